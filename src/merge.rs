// src/merge.rs - Conservative tag merge for confirmed matches
use log::debug;
use std::collections::HashMap;

use crate::models::core::EntityKind;
use crate::models::matching::TagMergeResult;

/// Merges proposed tags into an existing record's tags under the
/// append-and-fill policy:
///
/// - key absent from existing: add it (`new_tags_added`)
/// - key present with an empty existing value: fill it (`tags_overwritten`)
/// - key present with a non-empty value: keep the existing value,
///   unconditionally
///
/// The never-clobber rule is the point of this resolver: curator-entered
/// data must not be replaced by lower-quality import data, even when the
/// proposed value looks better. Only the merge is computed here; writing
/// `merged_tags` back is the persistence layer's job.
///
/// Proposed keys are visited in sorted order so counters and debug output
/// are reproducible run to run.
pub fn merge_tags(
    kind: EntityKind,
    existing: &HashMap<String, String>,
    proposed: &HashMap<String, String>,
) -> TagMergeResult {
    let mut merged_tags = existing.clone();
    let mut new_tags_added = 0;
    let mut tags_overwritten = 0;

    let mut proposed_keys: Vec<&String> = proposed.keys().collect();
    proposed_keys.sort();

    for key in proposed_keys {
        let value = &proposed[key];
        match merged_tags.get(key) {
            None => {
                merged_tags.insert(key.clone(), value.clone());
                new_tags_added += 1;
            }
            Some(current) if current.is_empty() => {
                debug!("Filling empty {} tag '{}'", kind.as_str(), key);
                merged_tags.insert(key.clone(), value.clone());
                tags_overwritten += 1;
            }
            Some(_) => {
                // Existing non-empty value wins, always.
            }
        }
    }

    debug!(
        "{} tag merge: {} added, {} filled, {} total",
        kind.as_str(),
        new_tags_added,
        tags_overwritten,
        merged_tags.len()
    );

    TagMergeResult {
        new_tags_added,
        tags_overwritten,
        merged_tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_new_keys_added() {
        let existing = tag_map(&[("material", "bronze")]);
        let proposed = tag_map(&[("height", "3m"), ("year", "1921")]);
        let result = merge_tags(EntityKind::Artwork, &existing, &proposed);
        assert_eq!(result.new_tags_added, 2);
        assert_eq!(result.tags_overwritten, 0);
        assert_eq!(result.merged_tags.get("height").map(String::as_str), Some("3m"));
        assert_eq!(result.merged_tags.get("material").map(String::as_str), Some("bronze"));
    }

    #[test]
    fn test_empty_existing_value_filled() {
        let existing = tag_map(&[("material", "")]);
        let proposed = tag_map(&[("material", "bronze")]);
        let result = merge_tags(EntityKind::Artwork, &existing, &proposed);
        assert_eq!(result.tags_overwritten, 1);
        assert_eq!(result.new_tags_added, 0);
        assert_eq!(result.merged_tags.get("material").map(String::as_str), Some("bronze"));
    }

    #[test]
    fn test_nonempty_existing_value_never_replaced() {
        let existing = tag_map(&[("material", "bronze"), ("artist", "MacCarthy")]);
        let proposed = tag_map(&[
            ("material", "granite"),
            ("artist", "Coeur de Lion MacCarthy"),
        ]);
        let result = merge_tags(EntityKind::Artwork, &existing, &proposed);
        assert_eq!(result.tags_overwritten, 0);
        assert_eq!(result.new_tags_added, 0);
        for (key, value) in &existing {
            assert_eq!(result.merged_tags.get(key), Some(value));
        }
    }

    #[test]
    fn test_mixed_merge_counts() {
        let existing = tag_map(&[("material", "bronze"), ("height", ""), ("year", "1921")]);
        let proposed = tag_map(&[
            ("material", "granite"), // ignored: non-empty existing
            ("height", "3m"),        // fills empty
            ("plinth", "granite"),   // new
        ]);
        let result = merge_tags(EntityKind::Artwork, &existing, &proposed);
        assert_eq!(result.new_tags_added, 1);
        assert_eq!(result.tags_overwritten, 1);
        assert_eq!(result.merged_tags.len(), 4);
        assert_eq!(result.merged_tags.get("material").map(String::as_str), Some("bronze"));
        assert_eq!(result.merged_tags.get("height").map(String::as_str), Some("3m"));
    }

    #[test]
    fn test_empty_proposed_map_is_a_no_op() {
        let existing = tag_map(&[("material", "bronze")]);
        let result = merge_tags(EntityKind::Artist, &existing, &HashMap::new());
        assert_eq!(result.new_tags_added, 0);
        assert_eq!(result.tags_overwritten, 0);
        assert_eq!(result.merged_tags, existing);
    }
}
