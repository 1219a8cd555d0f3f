//! Frequency-ranked keyword extraction.

use std::collections::HashMap;

use crate::lexicon::Lexicons;

/// Rank tokens by frequency, skipping stop words and single characters.
///
/// Ties keep first-occurrence order. At most `limit` keywords are returned.
#[tracing::instrument(skip_all, fields(tokens = tokens.len(), limit))]
pub fn extract_keywords(tokens: &[String], lexicons: &Lexicons, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut freq: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        let token = token.as_str();
        if token.chars().count() <= 1 || lexicons.is_stop_word(token) {
            continue;
        }
        let count = freq.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| freq[b].cmp(&freq[a]));
    order.truncate(limit);
    order.into_iter().map(str::to_string).collect()
}
