//! Character-ratio language detection.

use crate::text::is_ideograph;

use super::reports::Language;

/// Minimum share of ideographs for `zh`.
const CHINESE_THRESHOLD: f64 = 0.3;
/// Minimum share of ASCII letters for `en`.
const ENGLISH_THRESHOLD: f64 = 0.5;

/// Tag cleaned text as `zh`, `en`, or `unknown`.
///
/// Expects [`text::clean`](crate::text::clean) output: segmentation spaces
/// would dilute the ideograph share. Ratios are taken over every character,
/// spaces included, and the Chinese check runs first.
#[tracing::instrument(skip_all, fields(text_len = clean.len()))]
pub fn detect_language(clean: &str) -> Language {
    let mut total = 0usize;
    let mut ideographs = 0usize;
    let mut latin = 0usize;
    for ch in clean.chars() {
        total += 1;
        if is_ideograph(ch) {
            ideographs += 1;
        } else if ch.is_ascii_alphabetic() {
            latin += 1;
        }
    }

    if total == 0 {
        return Language::Unknown;
    }

    let total = total as f64;
    if ideographs as f64 / total > CHINESE_THRESHOLD {
        Language::Zh
    } else if latin as f64 / total > ENGLISH_THRESHOLD {
        Language::En
    } else {
        Language::Unknown
    }
}
