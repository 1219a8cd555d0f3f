//! Pattern-based entity extraction.

use regex::Regex;
use std::sync::LazyLock;

use super::reports::{Entity, EntityKind};

/// Regex for digit runs.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Regex for email addresses.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

/// Regex for http(s) URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

/// Extract NUMBER, EMAIL and URL entities from normalized text.
///
/// Kinds are scanned independently and concatenated in that order. Matches
/// are not de-duplicated, so digits inside an email also yield a NUMBER.
#[tracing::instrument(skip_all, fields(text_len = clean.len()))]
pub fn extract_entities(clean: &str) -> Vec<Entity> {
    let patterns: [(EntityKind, &Regex); 3] = [
        (EntityKind::Number, &*NUMBER_PATTERN),
        (EntityKind::Email, &*EMAIL_PATTERN),
        (EntityKind::Url, &*URL_PATTERN),
    ];

    let entities: Vec<Entity> = patterns
        .into_iter()
        .flat_map(|(kind, pattern)| {
            pattern.find_iter(clean).map(move |m| Entity {
                kind,
                value: m.as_str().to_string(),
                confidence: kind.confidence(),
            })
        })
        .collect();

    tracing::debug!(count = entities.len(), "entities extracted");
    entities
}
