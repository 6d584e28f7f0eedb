// src/models/matching.rs - Per-candidate scores, decisions, and merge results
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The five weighted component scores for one candidate plus their sum.
/// Every component has already been multiplied by its profile weight; the
/// invariant `total == gps + title + entity_secondary + reference_ids +
/// tag_similarity` holds by construction.
///
/// For artists the `title` slot holds the name comparison and the
/// `tag_similarity` slot holds the biography comparison; `gps` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub gps: f64,
    pub title: f64,
    pub entity_secondary: f64,
    pub reference_ids: f64,
    pub tag_similarity: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    /// Builds a breakdown from already-weighted components, fixing the total
    /// to their sum.
    pub fn from_components(
        gps: f64,
        title: f64,
        entity_secondary: f64,
        reference_ids: f64,
        tag_similarity: f64,
    ) -> Self {
        Self {
            gps,
            title,
            entity_secondary,
            reference_ids,
            tag_similarity,
            total: gps + title + entity_secondary + reference_ids + tag_similarity,
        }
    }
}

/// Outcome of one duplicate check. Produced once per invocation; the
/// breakdown and confidence are only present on the duplicate path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDecision {
    pub is_duplicate: bool,
    pub best_candidate_id: Option<String>,
    pub confidence_score: Option<f64>,
    pub breakdown: Option<ScoreBreakdown>,
    pub candidates_checked: usize,
}

impl MatchDecision {
    pub fn no_match(candidates_checked: usize) -> Self {
        Self {
            is_duplicate: false,
            best_candidate_id: None,
            confidence_score: None,
            breakdown: None,
            candidates_checked,
        }
    }
}

/// Tri-state similarity bucket used by the generic similarity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityTier {
    None,
    Warn,
    High,
}

impl SimilarityTier {
    /// Buckets a total score by the warn and high cutoffs. Scores at a
    /// cutoff land in the higher bucket.
    pub fn from_score(score: f64, warn_cutoff: f64, high_cutoff: f64) -> Self {
        if score >= high_cutoff {
            SimilarityTier::High
        } else if score >= warn_cutoff {
            SimilarityTier::Warn
        } else {
            SimilarityTier::None
        }
    }
}

/// One candidate's score and bucket within a similarity sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate_id: String,
    pub breakdown: ScoreBreakdown,
    pub tier: SimilarityTier,
}

/// Result of the generic similarity sweep: every candidate scored and
/// bucketed, with the high-tier ids pulled out. `is_ambiguous` signals that
/// more than one candidate cleared the high cutoff, so the caller should not
/// silently auto-merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub candidates: Vec<ScoredCandidate>,
    pub high_similarity_matches: Vec<String>,
    pub is_ambiguous: bool,
}

/// Outcome of a tag merge. `tags_overwritten` only counts fills of empty
/// existing values; a non-empty existing value is never replaced and never
/// counted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagMergeResult {
    pub new_tags_added: usize,
    pub tags_overwritten: usize,
    pub merged_tags: HashMap<String, String>,
}
