// src/matching/reference.rs - External-identifier exact matching
use crate::models::core::CandidateRecord;

/// Binary reference-id score: 1.0 when the incoming external id exactly
/// equals any identifier field on the candidate (its own id, source id, or
/// external id — which are populated depends on provenance), else 0.0.
/// No partial credit; a missing incoming id always scores 0.
pub fn reference_id_score(external_id: Option<&str>, candidate: &CandidateRecord) -> f64 {
    let Some(incoming) = external_id else {
        return 0.0;
    };
    if incoming.is_empty() {
        return 0.0;
    }
    let candidate_ids = [
        Some(candidate.id.as_str()),
        candidate.source_id.as_deref(),
        candidate.external_id.as_deref(),
    ];
    if candidate_ids.iter().flatten().any(|id| *id == incoming) {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CandidateRecord {
        let mut c = CandidateRecord::new("node-42", "Angel of Victory");
        c.source_id = Some("vanarts-1138".to_string());
        c.external_id = Some("Q1073543".to_string());
        c
    }

    #[test]
    fn test_missing_incoming_id_scores_zero() {
        assert_eq!(reference_id_score(None, &candidate()), 0.0);
        assert_eq!(reference_id_score(Some(""), &candidate()), 0.0);
    }

    #[test]
    fn test_match_against_each_field() {
        let c = candidate();
        assert_eq!(reference_id_score(Some("node-42"), &c), 1.0);
        assert_eq!(reference_id_score(Some("vanarts-1138"), &c), 1.0);
        assert_eq!(reference_id_score(Some("Q1073543"), &c), 1.0);
    }

    #[test]
    fn test_no_partial_credit() {
        assert_eq!(reference_id_score(Some("Q107354"), &candidate()), 0.0);
        assert_eq!(reference_id_score(Some("node-43"), &candidate()), 0.0);
    }
}
