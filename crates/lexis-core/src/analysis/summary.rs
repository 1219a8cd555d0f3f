//! Word and sentence statistics.

use super::reports::SummaryStats;
use super::round_half_up;

/// Summarize token and sentence counts.
///
/// The readability score is `max(0, 100 - 2 * average)`, computed from the
/// unrounded average. It is 0 when not requested or when there are no
/// sentences.
pub fn summarize(
    tokens: &[String],
    sentences: &[String],
    calculate_readability: bool,
) -> SummaryStats {
    let word_count = tokens.len();
    let sentence_count = sentences.len();

    let average = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };
    let readability = if calculate_readability && sentence_count > 0 {
        (100.0 - average * 2.0).max(0.0)
    } else {
        0.0
    };

    SummaryStats {
        word_count,
        sentence_count,
        average_words_per_sentence: round_half_up(average, 2),
        readability_score: round_half_up(readability, 2),
    }
}
