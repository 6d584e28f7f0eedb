// src/matching/classifier.rs - Duplicate decision and tiered similarity sweep
use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::MatchConfig;
use crate::matching::aggregator::score_candidate;
use crate::models::core::{CandidateRecord, IncomingRecord};
use crate::models::matching::{
    MatchDecision, ScoreBreakdown, ScoredCandidate, SimilarityReport, SimilarityTier,
};
use crate::models::weights::WeightProfile;
use crate::retriever::{CandidateQuery, CandidateRetriever};

/// Runs one duplicate check: validates configuration, fetches the bounded
/// candidate set, scores every candidate, and compares the single best total
/// against the caller's threshold.
///
/// The best-candidate fold uses strict `>`, so the first candidate scanned
/// wins ties; candidates are evaluated in retriever return order, which
/// keeps the tie-break deterministic. A retriever failure is a hard failure
/// of the whole check — the engine never guesses at candidates it could not
/// fetch.
pub async fn check_duplicates<R: CandidateRetriever>(
    retriever: &R,
    incoming: &IncomingRecord,
    config: &MatchConfig,
) -> Result<MatchDecision> {
    config.validate()?;
    let profile = WeightProfile::with_overrides(incoming.entity_kind, &config.weights);
    profile.validate()?;

    let query = CandidateQuery::for_record(incoming, config.candidate_window_degrees);
    let candidates = retriever
        .fetch_candidates(&query)
        .await
        .context("Candidate retrieval failed")?;

    if candidates.is_empty() {
        debug!(
            "No {} candidates near '{}'",
            incoming.entity_kind.as_str(),
            incoming.title_or_name
        );
        return Ok(MatchDecision::no_match(0));
    }

    let mut best: Option<(&CandidateRecord, ScoreBreakdown)> = None;
    for candidate in &candidates {
        let breakdown = score_candidate(incoming, candidate, &profile, config.max_distance_meters);
        let is_new_best = match &best {
            Some((_, current)) => breakdown.total > current.total,
            None => true,
        };
        if is_new_best {
            best = Some((candidate, breakdown));
        }
    }

    // candidates is non-empty, so the fold produced a best
    let Some((best_candidate, best_breakdown)) = best else {
        return Ok(MatchDecision::no_match(candidates.len()));
    };

    if best_breakdown.total >= config.threshold {
        info!(
            "Duplicate {}: '{}' matches candidate {} with confidence {:.4} ({} checked)",
            incoming.entity_kind.as_str(),
            incoming.title_or_name,
            best_candidate.id,
            best_breakdown.total,
            candidates.len()
        );
        Ok(MatchDecision {
            is_duplicate: true,
            best_candidate_id: Some(best_candidate.id.clone()),
            confidence_score: Some(best_breakdown.total),
            breakdown: Some(best_breakdown),
            candidates_checked: candidates.len(),
        })
    } else {
        debug!(
            "No duplicate for '{}': best total {:.4} below threshold {} ({} checked)",
            incoming.title_or_name,
            best_breakdown.total,
            config.threshold,
            candidates.len()
        );
        Ok(MatchDecision::no_match(candidates.len()))
    }
}

/// Scores every candidate and buckets each total into `none`/`warn`/`high`
/// by the configured cutoffs. Unlike the duplicate check, this keeps all
/// scores: the report lists every high-tier candidate and flags the sweep as
/// ambiguous when more than one reaches the high cutoff, signaling that a
/// silent auto-merge would be unsafe.
pub fn build_similarity_report(
    incoming: &IncomingRecord,
    candidates: &[CandidateRecord],
    config: &MatchConfig,
) -> Result<SimilarityReport> {
    config.validate()?;
    let profile = WeightProfile::with_overrides(incoming.entity_kind, &config.weights);
    profile.validate()?;

    let scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|candidate| {
            let breakdown =
                score_candidate(incoming, candidate, &profile, config.max_distance_meters);
            ScoredCandidate {
                candidate_id: candidate.id.clone(),
                tier: SimilarityTier::from_score(
                    breakdown.total,
                    config.warn_cutoff,
                    config.high_cutoff,
                ),
                breakdown,
            }
        })
        .collect();

    let high_similarity_matches: Vec<String> = scored
        .iter()
        .filter(|s| s.tier == SimilarityTier::High)
        .map(|s| s.candidate_id.clone())
        .collect();
    let is_ambiguous = high_similarity_matches.len() > 1;

    if is_ambiguous {
        info!(
            "Ambiguous match for '{}': {} candidates at or above the high cutoff {}",
            incoming.title_or_name,
            high_similarity_matches.len(),
            config.high_cutoff
        );
    }

    Ok(SimilarityReport {
        candidates: scored,
        high_similarity_matches,
        is_ambiguous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::EntityKind;
    use crate::models::weights::WeightOverrides;
    use anyhow::anyhow;

    /// Retriever stub returning a fixed candidate list, ignoring the query.
    struct FixedRetriever {
        candidates: Vec<CandidateRecord>,
    }

    impl CandidateRetriever for FixedRetriever {
        async fn fetch_candidates(&self, _query: &CandidateQuery) -> Result<Vec<CandidateRecord>> {
            Ok(self.candidates.clone())
        }
    }

    /// Retriever stub that always fails, standing in for a store outage.
    struct FailingRetriever;

    impl CandidateRetriever for FailingRetriever {
        async fn fetch_candidates(&self, _query: &CandidateQuery) -> Result<Vec<CandidateRecord>> {
            Err(anyhow!("connection refused"))
        }
    }

    fn incoming_artwork() -> IncomingRecord {
        let mut record = IncomingRecord::new("Angel of Victory", EntityKind::Artwork);
        record.coordinates = Some((49.2827, -123.1207));
        record
    }

    fn artwork_candidate(id: &str, title: &str, coordinates: (f64, f64)) -> CandidateRecord {
        let mut candidate = CandidateRecord::new(id, title);
        candidate.coordinates = Some(coordinates);
        candidate
    }

    #[tokio::test]
    async fn test_empty_candidate_list_is_no_duplicate() {
        let _ = env_logger::builder().is_test(true).try_init();
        let retriever = FixedRetriever { candidates: vec![] };
        let decision = check_duplicates(&retriever, &incoming_artwork(), &MatchConfig::new(0.7))
            .await
            .unwrap();
        assert!(!decision.is_duplicate);
        assert_eq!(decision.candidates_checked, 0);
        assert!(decision.best_candidate_id.is_none());
    }

    #[tokio::test]
    async fn test_nearby_identical_artwork_is_duplicate() {
        let retriever = FixedRetriever {
            candidates: vec![artwork_candidate(
                "c1",
                "Angel of Victory",
                (49.2828, -123.1206), // ~15 m away
            )],
        };
        let decision = check_duplicates(&retriever, &incoming_artwork(), &MatchConfig::new(0.7))
            .await
            .unwrap();
        assert!(decision.is_duplicate);
        assert_eq!(decision.best_candidate_id.as_deref(), Some("c1"));
        assert!(decision.confidence_score.unwrap() >= 0.7);
        let breakdown = decision.breakdown.unwrap();
        assert!((breakdown.total - decision.confidence_score.unwrap()).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_distant_artwork_with_identical_title_is_not_duplicate() {
        // ~600 m away: the gps component is 0 and a perfect title alone
        // contributes only its 0.25 weight.
        let retriever = FixedRetriever {
            candidates: vec![artwork_candidate(
                "c1",
                "Angel of Victory",
                (49.2881, -123.1207),
            )],
        };
        let decision = check_duplicates(&retriever, &incoming_artwork(), &MatchConfig::new(0.7))
            .await
            .unwrap();
        assert!(!decision.is_duplicate);
        assert_eq!(decision.candidates_checked, 1);
    }

    #[tokio::test]
    async fn test_best_candidate_wins_and_first_seen_breaks_ties() {
        let same_spot = (49.2827, -123.1207);
        let retriever = FixedRetriever {
            candidates: vec![
                artwork_candidate("first", "Angel of Victory", same_spot),
                artwork_candidate("second", "Angel of Victory", same_spot),
                artwork_candidate("weaker", "Totem Pole", (49.30, -123.20)),
            ],
        };
        let decision = check_duplicates(&retriever, &incoming_artwork(), &MatchConfig::new(0.7))
            .await
            .unwrap();
        assert!(decision.is_duplicate);
        assert_eq!(decision.best_candidate_id.as_deref(), Some("first"));
        assert_eq!(decision.candidates_checked, 3);
    }

    #[tokio::test]
    async fn test_retriever_failure_is_a_hard_error() {
        let result = check_duplicates(&FailingRetriever, &incoming_artwork(), &MatchConfig::new(0.7)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_config_rejected_before_retrieval() {
        // The failing retriever would error if reached; validation fires first.
        let result =
            check_duplicates(&FailingRetriever, &incoming_artwork(), &MatchConfig::new(2.0)).await;
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("threshold"), "unexpected error: {}", message);
    }

    #[tokio::test]
    async fn test_negative_weight_override_rejected() {
        let mut config = MatchConfig::new(0.7);
        config.weights = WeightOverrides {
            gps: Some(-1.0),
            ..Default::default()
        };
        let retriever = FixedRetriever { candidates: vec![] };
        assert!(check_duplicates(&retriever, &incoming_artwork(), &config)
            .await
            .is_err());
    }

    #[test]
    fn test_ambiguity_flagged_for_multiple_high_scorers() {
        // Title-only weighting makes the totals easy to place around the
        // 0.85 high cutoff.
        let mut config = MatchConfig::new(0.7);
        config.weights = WeightOverrides {
            gps: Some(0.0),
            title: Some(1.0),
            entity_secondary: Some(0.0),
            reference_ids: Some(0.0),
            tag_similarity: Some(0.0),
        };
        let candidates = vec![
            CandidateRecord::new("exact", "Angel of Victory"),
            CandidateRecord::new("near", "Angel of Victori"),
            CandidateRecord::new("far", "Raven Totem"),
        ];
        let report =
            build_similarity_report(&incoming_artwork(), &candidates, &config).unwrap();
        assert!(report.is_ambiguous);
        assert_eq!(report.high_similarity_matches.len(), 2);
        assert_eq!(report.candidates.len(), 3);
        assert_eq!(report.candidates[0].tier, SimilarityTier::High);
        assert_eq!(report.candidates[2].tier, SimilarityTier::None);
    }

    #[test]
    fn test_single_high_scorer_is_not_ambiguous() {
        let mut config = MatchConfig::new(0.7);
        config.weights = WeightOverrides {
            gps: Some(0.0),
            title: Some(1.0),
            entity_secondary: Some(0.0),
            reference_ids: Some(0.0),
            tag_similarity: Some(0.0),
        };
        let candidates = vec![
            CandidateRecord::new("exact", "Angel of Victory"),
            CandidateRecord::new("far", "Raven Totem"),
        ];
        let report =
            build_similarity_report(&incoming_artwork(), &candidates, &config).unwrap();
        assert!(!report.is_ambiguous);
        assert_eq!(report.high_similarity_matches, vec!["exact".to_string()]);
    }
}
