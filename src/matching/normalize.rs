// src/matching/normalize.rs - Canonical text form for name comparison
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// Keeps word characters, whitespace, and hyphens; everything else goes.
static NON_WORD_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Canonicalizes a name or title for comparison: trim, lowercase, NFD
/// decomposition with combining marks stripped, punctuation removed, and
/// internal whitespace runs collapsed to single spaces.
///
/// Total and pure: empty input yields an empty string, nothing errors.
pub fn normalize_text(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let cleaned = NON_WORD_CHARS.replace_all(&stripped, "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
