//! Lexicon tables shared by every analysis component.
//!
//! A [`Lexicons`] value bundles the sentiment word sets, the stop words, and a
//! [`Normalizer`] whose segmentation dictionary covers all of them. Tables are
//! immutable once built. The built-in tables are initialized once per process
//! and handed out behind an [`Arc`].

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::LexiconConfig;
use crate::error::AnalysisResult;
use crate::text::Normalizer;
use crate::word_lists::{NEGATIVE_WORDS, POSITIVE_WORDS, SEGMENT_VOCABULARY, STOP_WORDS};

static BUILTIN: OnceLock<Arc<Lexicons>> = OnceLock::new();

/// Sentiment direction of a lexicon word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Counts +1.
    Positive,
    /// Counts -1.
    Negative,
}

/// Readiness of the built-in lexicon tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    /// Tables are built and analysis can run.
    Ready,
    /// Tables have not been built yet.
    Initializing,
}

impl EngineStatus {
    /// Returns the status as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Initializing => "initializing",
        }
    }
}

impl std::fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report whether the built-in tables have been initialized.
pub fn status() -> EngineStatus {
    if BUILTIN.get().is_some() {
        EngineStatus::Ready
    } else {
        EngineStatus::Initializing
    }
}

/// Entry counts of each table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexiconSizes {
    /// Positive sentiment words.
    pub positive: usize,
    /// Negative sentiment words.
    pub negative: usize,
    /// Stop words.
    pub stop_words: usize,
    /// Ideographic segmentation dictionary entries.
    pub vocabulary: usize,
}

/// Immutable lexicon tables.
#[derive(Debug, Clone)]
pub struct Lexicons {
    positive: HashSet<String>,
    negative: HashSet<String>,
    stop_words: HashSet<String>,
    normalizer: Normalizer,
}

impl Lexicons {
    /// The process-wide built-in tables, built on first use.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(BUILTIN.get_or_init(|| {
            tracing::debug!("building built-in lexicons");
            Arc::new(
                Self::from_words(
                    POSITIVE_WORDS.iter().copied(),
                    NEGATIVE_WORDS.iter().copied(),
                    STOP_WORDS.iter().copied(),
                    SEGMENT_VOCABULARY.iter().copied(),
                )
                .expect("built-in lexicon is valid"),
            )
        }))
    }

    /// Build the built-in tables extended with configured words.
    ///
    /// Configured words are trimmed and lowercased. A word configured as both
    /// positive and negative counts as positive.
    #[tracing::instrument(skip_all)]
    pub fn extended(config: &LexiconConfig) -> AnalysisResult<Self> {
        let owned = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };

        let positive = owned(&config.positive);
        let negative = owned(&config.negative);
        let stop_words = owned(&config.stop_words);
        let vocabulary = owned(&config.vocabulary);
        tracing::debug!(
            positive = positive.len(),
            negative = negative.len(),
            stop_words = stop_words.len(),
            vocabulary = vocabulary.len(),
            "extending built-in lexicons"
        );

        Self::from_words(
            POSITIVE_WORDS.iter().map(|w| (*w).to_string()).chain(positive),
            NEGATIVE_WORDS.iter().map(|w| (*w).to_string()).chain(negative),
            STOP_WORDS.iter().map(|w| (*w).to_string()).chain(stop_words),
            SEGMENT_VOCABULARY
                .iter()
                .map(|w| (*w).to_string())
                .chain(vocabulary),
        )
    }

    fn from_words<P, N, S, V>(
        positive: P,
        negative: N,
        stop_words: S,
        vocabulary: V,
    ) -> AnalysisResult<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let positive: HashSet<String> = positive.into_iter().map(Into::into).collect();
        let negative: HashSet<String> = negative.into_iter().map(Into::into).collect();
        let stop_words: HashSet<String> = stop_words.into_iter().map(Into::into).collect();
        let vocabulary: Vec<String> = vocabulary.into_iter().map(Into::into).collect();

        let normalizer = Normalizer::new(
            positive
                .iter()
                .chain(negative.iter())
                .chain(stop_words.iter())
                .chain(vocabulary.iter()),
        )?;

        Ok(Self {
            positive,
            negative,
            stop_words,
            normalizer,
        })
    }

    /// Polarity of a token, checking the positive table first.
    pub fn polarity(&self, token: &str) -> Option<Polarity> {
        if self.positive.contains(token) {
            Some(Polarity::Positive)
        } else if self.negative.contains(token) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    /// Whether a token is excluded from keyword ranking.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// The normalizer whose dictionary covers these tables.
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Entry counts, for diagnostics.
    pub fn sizes(&self) -> LexiconSizes {
        LexiconSizes {
            positive: self.positive.len(),
            negative: self.negative.len(),
            stop_words: self.stop_words.len(),
            vocabulary: self.normalizer.vocabulary_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_shared_and_ready() {
        let a = Lexicons::builtin();
        let b = Lexicons::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(status(), EngineStatus::Ready);
    }

    #[test]
    fn extension_grows_tables() {
        let base = Lexicons::builtin().sizes();
        let extended = Lexicons::extended(&LexiconConfig {
            positive: vec!["stellar".into()],
            stop_words: vec!["foo".into()],
            ..LexiconConfig::default()
        })
        .unwrap()
        .sizes();
        assert_eq!(extended.positive, base.positive + 1);
        assert_eq!(extended.negative, base.negative);
        assert_eq!(extended.stop_words, base.stop_words + 1);
    }

    #[test]
    fn polarity_lookup() {
        let lex = Lexicons::builtin();
        assert_eq!(lex.polarity("good"), Some(Polarity::Positive));
        assert_eq!(lex.polarity("喜欢"), Some(Polarity::Positive));
        assert_eq!(lex.polarity("terrible"), Some(Polarity::Negative));
        assert_eq!(lex.polarity("table"), None);
    }

    #[test]
    fn stop_words_lookup() {
        let lex = Lexicons::builtin();
        assert!(lex.is_stop_word("the"));
        assert!(lex.is_stop_word("的"));
        assert!(!lex.is_stop_word("product"));
    }

    #[test]
    fn extended_adds_configured_words() {
        let config = LexiconConfig {
            positive: vec!["  Superb ".into(), "惊艳".into()],
            negative: vec!["meh".into()],
            stop_words: vec!["lorem".into()],
            vocabulary: vec!["机器学习".into()],
        };
        let lex = Lexicons::extended(&config).unwrap();
        assert_eq!(lex.polarity("superb"), Some(Polarity::Positive));
        assert_eq!(lex.polarity("meh"), Some(Polarity::Negative));
        assert_eq!(lex.polarity("good"), Some(Polarity::Positive));
        assert!(lex.is_stop_word("lorem"));
        assert_eq!(lex.normalizer().normalize("机器学习很惊艳"), "机器学习 很 惊艳");
    }

    #[test]
    fn positive_wins_when_word_is_in_both_tables() {
        let config = LexiconConfig {
            positive: vec!["fine".into()],
            negative: vec!["fine".into()],
            ..LexiconConfig::default()
        };
        let lex = Lexicons::extended(&config).unwrap();
        assert_eq!(lex.polarity("fine"), Some(Polarity::Positive));
    }

    #[test]
    fn status_strings() {
        assert_eq!(EngineStatus::Ready.to_string(), "ready");
        assert_eq!(EngineStatus::Initializing.as_str(), "initializing");
    }
}
