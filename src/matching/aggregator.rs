// src/matching/aggregator.rs - Combines the per-signal scores into one breakdown
use log::debug;
use std::collections::HashMap;

use crate::matching::geospatial::proximity_score;
use crate::matching::normalize::normalize_text;
use crate::matching::reference::reference_id_score;
use crate::matching::tags::{key_similarity, parse_tag_payload};
use crate::matching::text::string_similarity;
use crate::models::core::{CandidateRecord, IncomingRecord};
use crate::models::matching::ScoreBreakdown;
use crate::models::weights::WeightProfile;

/// Tag key holding the artist attribution on artwork records.
const ARTIST_ATTRIBUTION_TAG: &str = "artist";
/// Tag key holding the website on artist records.
const WEBSITE_TAG: &str = "website";
/// Tag key holding the free-text biography on artist records.
const BIO_TAG: &str = "bio";

/// Scores one candidate against the incoming record under a weight profile.
///
/// Every component in the returned breakdown is already weighted
/// (`raw * weight`), and the total is their sum. Each signal is total: a
/// missing coordinate, absent tag, or malformed tag payload scores 0 for
/// that signal only, so a candidate's scoring can never fail mid-sweep.
pub fn score_candidate(
    incoming: &IncomingRecord,
    candidate: &CandidateRecord,
    profile: &WeightProfile,
    max_distance_meters: f64,
) -> ScoreBreakdown {
    let candidate_tags = parse_tag_payload(candidate.tags_raw.as_deref());
    let title_raw = string_similarity(
        &normalize_text(&incoming.title_or_name),
        &normalize_text(&candidate.title_or_name),
    );
    let reference_raw = reference_id_score(incoming.external_id.as_deref(), candidate);

    let breakdown = match profile {
        WeightProfile::Artwork(w) => {
            let gps_raw = match (incoming.coordinates, candidate.coordinates) {
                (Some(a), Some(b)) => proximity_score(a, b, max_distance_meters),
                _ => 0.0,
            };
            let secondary_raw =
                gated_tag_similarity(&incoming.tags, &candidate_tags, ARTIST_ATTRIBUTION_TAG);
            let tag_raw = key_similarity(&incoming.tags, &candidate_tags);
            ScoreBreakdown::from_components(
                gps_raw * w.gps,
                title_raw * w.title,
                secondary_raw * w.entity_secondary,
                reference_raw * w.reference_ids,
                tag_raw * w.tag_similarity,
            )
        }
        WeightProfile::Artist(w) => {
            // Artists have no coordinates; the gps component is always 0 and
            // the tag-similarity slot scores biography text instead.
            let secondary_raw =
                gated_tag_similarity(&incoming.tags, &candidate_tags, WEBSITE_TAG);
            let bio_raw = gated_tag_similarity(&incoming.tags, &candidate_tags, BIO_TAG);
            ScoreBreakdown::from_components(
                0.0,
                title_raw * w.name,
                secondary_raw * w.entity_secondary,
                reference_raw * w.reference_ids,
                bio_raw * w.bio,
            )
        }
    };

    debug!(
        "Scored candidate {} against '{}': total {:.4} (gps {:.4}, title {:.4}, secondary {:.4}, refs {:.4}, tags {:.4})",
        candidate.id,
        incoming.title_or_name,
        breakdown.total,
        breakdown.gps,
        breakdown.title,
        breakdown.entity_secondary,
        breakdown.reference_ids,
        breakdown.tag_similarity,
    );
    breakdown
}

/// Text similarity of one tag's value, gated on both sides carrying a
/// non-empty value for the key; otherwise 0.
fn gated_tag_similarity(
    incoming_tags: &HashMap<String, String>,
    candidate_tags: &HashMap<String, String>,
    key: &str,
) -> f64 {
    match (incoming_tags.get(key), candidate_tags.get(key)) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            string_similarity(&normalize_text(a), &normalize_text(b))
        }
        _ => 0.0,
    }
}
