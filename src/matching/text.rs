// src/matching/text.rs - Normalized Levenshtein string similarity
use strsim::levenshtein;

/// Similarity in [0,1] between two strings via normalized edit distance:
/// `1 - levenshtein(a, b) / max(len_a, len_b)` over characters.
///
/// Lowercases and trims both sides as a safety net; callers comparing names
/// should normalize with [`super::normalize::normalize_text`] first. Either
/// side empty scores 0, equal strings score 1.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let distance = levenshtein(&a, &b) as f64;
    let max_len = a.chars().count().max(b.chars().count()) as f64;
    (1.0 - distance / max_len).max(0.0)
}
