//! Lexicon-based sentiment scoring.

use crate::lexicon::{Lexicons, Polarity};

use super::reports::{Sentiment, SentimentLabel};
use super::round_half_up;

/// Scores above this are positive; scores below its negation are negative.
const LABEL_THRESHOLD: f64 = 0.1;

/// Score tokens against the sentiment lexicons.
///
/// Each positive token adds one and each negative token subtracts one. The
/// tally is divided by the token count. Negation and intensifiers are not
/// modeled.
#[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
pub fn score_sentiment(tokens: &[String], lexicons: &Lexicons) -> Sentiment {
    if tokens.is_empty() {
        return Sentiment::neutral();
    }

    let mut tally: i64 = 0;
    let mut matches: usize = 0;
    for token in tokens {
        match lexicons.polarity(token) {
            Some(Polarity::Positive) => {
                tally += 1;
                matches += 1;
            }
            Some(Polarity::Negative) => {
                tally -= 1;
                matches += 1;
            }
            None => {}
        }
    }

    let total = tokens.len() as f64;
    let score = if matches > 0 { tally as f64 / total } else { 0.0 };
    let confidence = (matches as f64 / total * 2.0).min(1.0);

    Sentiment {
        score: round_half_up(score, 4),
        label: label_for(score),
        confidence: round_half_up(confidence, 4),
    }
}

fn label_for(score: f64) -> SentimentLabel {
    if score > LABEL_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -LABEL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn empty_is_neutral_with_zero_confidence() {
        let s = score_sentiment(&[], &Lexicons::builtin());
        assert_eq!(s, Sentiment::neutral());
    }

    #[test]
    fn no_matches_is_neutral() {
        let s = score_sentiment(&toks(&["the", "table", "is", "brown"]), &Lexicons::builtin());
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.confidence, 0.0);
    }

    #[test]
    fn chinese_positive_sentence() {
        let tokens = toks(&["这个", "产品", "很", "好", "我", "很", "喜欢"]);
        let s = score_sentiment(&tokens, &Lexicons::builtin());
        assert_eq!(s.label, SentimentLabel::Positive);
        assert_eq!(s.score, 0.2857);
        assert_eq!(s.confidence, 0.5714);
    }

    #[test]
    fn chinese_negative_sentence() {
        let tokens = toks(&["这个", "产品", "很", "差", "我", "很", "讨厌"]);
        let s = score_sentiment(&tokens, &Lexicons::builtin());
        assert_eq!(s.label, SentimentLabel::Negative);
        assert_eq!(s.score, -0.2857);
    }

    #[test]
    fn confidence_caps_at_one() {
        let s = score_sentiment(&toks(&["good", "great", "bad"]), &Lexicons::builtin());
        assert_eq!(s.confidence, 1.0);
        assert_eq!(s.score, 0.3333);
        assert_eq!(s.label, SentimentLabel::Positive);
    }

    #[test]
    fn balanced_matches_are_neutral() {
        let s = score_sentiment(&toks(&["good", "bad"]), &Lexicons::builtin());
        assert_eq!(s.score, 0.0);
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.confidence, 1.0);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut words = vec!["good"];
        words.extend(std::iter::repeat_n("word", 9));
        let s = score_sentiment(&toks(&words), &Lexicons::builtin());
        assert_eq!(s.score, 0.1);
        assert_eq!(s.label, SentimentLabel::Neutral);
    }
}
