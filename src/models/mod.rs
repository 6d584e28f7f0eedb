// src/models/mod.rs
pub mod core;
pub mod matching;
pub mod weights;

pub use self::core::{CandidateRecord, EntityKind, IncomingRecord};
pub use self::matching::{
    MatchDecision, ScoreBreakdown, ScoredCandidate, SimilarityReport, SimilarityTier,
    TagMergeResult,
};
pub use self::weights::{ArtistWeights, ArtworkWeights, WeightOverrides, WeightProfile};
