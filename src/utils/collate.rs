//! Locale-aware string ordering.
//!
//! Compares at "base" strength: letter case and accents are ignored, so
//! `"apple"`, `"Apple"` and `"Äpple"` sort together.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sort key with case and diacritics folded away.
pub fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two strings at base strength.
///
/// Strings equal at base strength fall back to a plain comparison so the
/// ordering stays total and deterministic.
pub fn compare_base(a: &str, b: &str) -> Ordering {
    base_key(a).cmp(&base_key(b)).then_with(|| a.cmp(b))
}
