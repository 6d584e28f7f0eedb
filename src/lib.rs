// src/lib.rs
//! Duplicate-detection engine for public art catalog submissions.
//!
//! Given one incoming record (an artwork or an artist) and a bounded set of
//! existing catalog candidates, the engine combines fuzzy text matching,
//! geospatial proximity, tag-set overlap, and reference-id equality into a
//! single weighted confidence score, then classifies the best candidate
//! against a caller-supplied threshold. On a confirmed match it can compute
//! a conservative tag merge that never overwrites curator-entered values.
//!
//! The engine is pure computation: persistence, candidate querying, and the
//! import loop that drives it are external collaborators behind the
//! [`retriever::CandidateRetriever`] boundary.

pub mod config;
pub mod matching;
pub mod merge;
pub mod models;
pub mod retriever;

pub use config::MatchConfig;
pub use matching::classifier::{build_similarity_report, check_duplicates};
pub use merge::merge_tags;
pub use models::core::{CandidateRecord, EntityKind, IncomingRecord};
pub use models::matching::{
    MatchDecision, ScoreBreakdown, ScoredCandidate, SimilarityReport, SimilarityTier,
    TagMergeResult,
};
pub use models::weights::{ArtistWeights, ArtworkWeights, WeightOverrides, WeightProfile};
pub use retriever::{CandidateQuery, CandidateRetriever};
