//! Hybrid text similarity.
//!
//! Blends the Jaccard index of the normalized token sets with Jaro-Winkler
//! closeness of the raw strings. The raw-string half deliberately skips
//! normalization, so case and punctuation differences lower the score.

use std::collections::HashSet;

use crate::error::{AnalysisError, AnalysisResult};
use crate::lexicon::Lexicons;
use crate::text;

use super::reports::{SimilarityDetails, SimilarityReport};
use super::round_half_up;

/// Name reported in [`SimilarityReport::method`].
pub const METHOD: &str = "hybrid";

/// Compare two texts.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] when either text is empty or
/// whitespace-only.
#[tracing::instrument(skip_all, fields(len1 = text1.len(), len2 = text2.len()))]
pub fn compare_texts(
    text1: &str,
    text2: &str,
    lexicons: &Lexicons,
) -> AnalysisResult<SimilarityReport> {
    if text1.trim().is_empty() {
        return Err(AnalysisError::InvalidInput { field: "text1" });
    }
    if text2.trim().is_empty() {
        return Err(AnalysisError::InvalidInput { field: "text2" });
    }

    let normalizer = lexicons.normalizer();
    let tokens1: HashSet<String> = text::tokenize(&normalizer.normalize(text1))
        .into_iter()
        .collect();
    let tokens2: HashSet<String> = text::tokenize(&normalizer.normalize(text2))
        .into_iter()
        .collect();

    let jaccard = jaccard_index(&tokens1, &tokens2);
    let closeness = raw_closeness(text1, text2);

    Ok(SimilarityReport {
        similarity: round_half_up((jaccard + closeness) / 2.0, 4),
        method: METHOD.to_string(),
        details: SimilarityDetails {
            jaccard_index: round_half_up(jaccard, 4),
            cosine_distance: round_half_up(closeness, 4),
        },
    })
}

/// `|a ∩ b| / |a ∪ b|`, or 0 when both sets are empty.
pub fn jaccard_index(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Jaro-Winkler closeness with the pair in a fixed order, so swapping the
/// arguments cannot change the result.
fn raw_closeness(text1: &str, text2: &str) -> f64 {
    let (first, second) = if text1 <= text2 {
        (text1, text2)
    } else {
        (text2, text1)
    };
    strsim::jaro_winkler(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(a: &str, b: &str) -> AnalysisResult<SimilarityReport> {
        compare_texts(a, b, &Lexicons::builtin())
    }

    #[test]
    fn identical_texts_score_one() {
        let report = compare("The cat sat on the mat.", "The cat sat on the mat.").unwrap();
        assert_eq!(report.similarity, 1.0);
        assert_eq!(report.details.jaccard_index, 1.0);
        assert_eq!(report.details.cosine_distance, 1.0);
        assert_eq!(report.method, "hybrid");
    }

    #[test]
    fn symmetric() {
        let pairs = [
            ("hello world", "hello there"),
            ("这是一个测试文本", "这是另一个测试文本"),
            ("Rust is fast!", "rust is FAST"),
        ];
        for (a, b) in pairs {
            assert_eq!(compare(a, b).unwrap(), compare(b, a).unwrap());
        }
    }

    #[test]
    fn jaccard_over_normalized_tokens() {
        let report = compare("hello world", "Hello, there!").unwrap();
        assert_eq!(report.details.jaccard_index, 0.3333);
        assert!(report.details.cosine_distance < 1.0);
    }

    #[test]
    fn case_only_difference_keeps_full_jaccard() {
        let report = compare("Rust is fast", "rust is fast").unwrap();
        assert_eq!(report.details.jaccard_index, 1.0);
        assert!(report.details.cosine_distance < 1.0);
        assert!(report.similarity < 1.0);
    }

    #[test]
    fn scores_are_bounded() {
        let report = compare("abc", "xyz 123").unwrap();
        assert_eq!(report.details.jaccard_index, 0.0);
        assert!((0.0..=1.0).contains(&report.similarity));
        assert!((0.0..=1.0).contains(&report.details.cosine_distance));
    }

    #[test]
    fn empty_token_sets_have_zero_jaccard() {
        let report = compare("!!!", "???").unwrap();
        assert_eq!(report.details.jaccard_index, 0.0);
    }

    #[test]
    fn rejects_blank_arguments() {
        assert!(matches!(
            compare("", "text"),
            Err(AnalysisError::InvalidInput { field: "text1" })
        ));
        assert!(matches!(
            compare("text", "   "),
            Err(AnalysisError::InvalidInput { field: "text2" })
        ));
    }
}
