// src/matching/tags.rs - Tag payload parsing and Jaccard overlap scoring
use log::debug;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Parses a candidate's stored tag payload into a string map. A missing,
/// empty, or malformed payload yields an empty map: one bad record must not
/// abort a sweep over many candidates, so parse failures are swallowed at
/// this boundary and the tag signal simply contributes nothing.
pub fn parse_tag_payload(raw: Option<&str>) -> HashMap<String, String> {
    let Some(raw) = raw else {
        return HashMap::new();
    };
    if raw.trim().is_empty() {
        return HashMap::new();
    }
    match serde_json::from_str::<HashMap<String, Value>>(raw) {
        Ok(parsed) => parsed
            .into_iter()
            .map(|(key, value)| (key, value_to_string(value)))
            .collect(),
        Err(e) => {
            debug!("Treating unparsable tag payload as empty: {}", e);
            HashMap::new()
        }
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Jaccard similarity over the tag key sets: `|intersection| / |union|`.
/// Either side empty scores 0 — absence of overlap evidence is no
/// similarity, not a penalty.
pub fn key_similarity(a: &HashMap<String, String>, b: &HashMap<String, String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let keys_a: HashSet<&str> = a.keys().map(String::as_str).collect();
    let keys_b: HashSet<&str> = b.keys().map(String::as_str).collect();
    let intersection = keys_a.intersection(&keys_b).count();
    let union = keys_a.union(&keys_b).count();
    intersection as f64 / union as f64
}

/// Stricter Jaccard variant over `(key, value)` pairs: shared keys only
/// count when the values agree too.
pub fn pair_similarity(a: &HashMap<String, String>, b: &HashMap<String, String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let pairs_a: HashSet<(&str, &str)> = a
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let pairs_b: HashSet<(&str, &str)> = b
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let intersection = pairs_a.intersection(&pairs_b).count();
    let union = pairs_a.union(&pairs_b).count();
    intersection as f64 / union as f64
}
