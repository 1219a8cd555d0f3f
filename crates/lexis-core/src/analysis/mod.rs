//! Rule-based text analysis.
//!
//! Decomposes document analysis into independent features, orchestrated by
//! [`Engine`].
//!
//! Each feature is a pure function in its own module. Callers can also
//! invoke features individually on normalized text.

pub mod entities;
pub mod keywords;
pub mod language;
pub mod options;
pub mod reports;
pub mod sentiment;
pub mod similarity;
pub mod summary;

use std::sync::Arc;

use chrono::Utc;

pub use options::AnalysisOptions;
pub use reports::{
    AnalysisReport, Entity, EntityKind, Language, Sentiment, SentimentLabel, SimilarityDetails,
    SimilarityReport, SummaryStats,
};

use crate::error::{AnalysisError, AnalysisResult};
use crate::lexicon::{EngineStatus, Lexicons};
use crate::text;

/// Every capability the engine offers.
pub const SUPPORTED_FEATURES: &[&str] = &[
    "sentiment_analysis",
    "keyword_extraction",
    "entity_recognition",
    "text_summary",
    "language_detection",
    "similarity_comparison",
    "batch_processing",
];

/// Analysis orchestrator.
///
/// Holds a shared handle to immutable lexicon tables, so clones are cheap and
/// an engine can be used from many threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    lexicons: Arc<Lexicons>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the built-in lexicons.
    pub fn new() -> Self {
        Self::with_lexicons(Lexicons::builtin())
    }

    /// Engine over caller-supplied lexicons.
    pub const fn with_lexicons(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }

    /// The lexicon tables this engine reads.
    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Analyze one document.
    ///
    /// Sentiment, summary and language always run; keywords and entities run
    /// per `options`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] when `text` is empty or
    /// whitespace-only.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(
        &self,
        text: &str,
        options: &AnalysisOptions,
    ) -> AnalysisResult<AnalysisReport> {
        if text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput { field: "text" });
        }
        tracing::debug!(?options, "analyzing text");

        let clean = self.lexicons.normalizer().normalize(text);
        let tokens = text::tokenize(&clean);
        let sentences = text::split_sentences(&clean);

        let keywords = if options.extract_keywords {
            keywords::extract_keywords(&tokens, &self.lexicons, options.keyword_limit)
        } else {
            Vec::new()
        };
        let entities = if options.extract_entities {
            entities::extract_entities(&clean)
        } else {
            Vec::new()
        };

        let report = AnalysisReport {
            sentiment: sentiment::score_sentiment(&tokens, &self.lexicons),
            keywords,
            entities,
            summary: summary::summarize(&tokens, &sentences, options.calculate_readability),
            language: language::detect_language(&text::clean(text)),
            timestamp: Utc::now(),
        };
        tracing::debug!(
            words = report.summary.word_count,
            sentences = report.summary.sentence_count,
            label = report.sentiment.label.as_str(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Analyze several documents, preserving input order.
    ///
    /// The batch fails fast: the first invalid item aborts it and no partial
    /// results are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::BatchItem`] naming the zero-based index of the
    /// first item that failed.
    #[tracing::instrument(skip_all, fields(items = texts.len()))]
    pub fn batch_analyze<S: AsRef<str>>(
        &self,
        texts: &[S],
        options: &AnalysisOptions,
    ) -> AnalysisResult<Vec<AnalysisReport>> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                self.analyze(text.as_ref(), options)
                    .map_err(|source| AnalysisError::BatchItem {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect()
    }

    /// Compare two texts. See [`similarity::compare_texts`].
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] when either text is blank.
    pub fn compare_similarity(
        &self,
        text1: &str,
        text2: &str,
    ) -> AnalysisResult<SimilarityReport> {
        similarity::compare_texts(text1, text2, &self.lexicons)
    }

    /// Names of the supported capabilities.
    pub const fn supported_features(&self) -> &'static [&'static str] {
        SUPPORTED_FEATURES
    }

    /// An engine always holds built tables, so it is always ready.
    pub const fn status(&self) -> EngineStatus {
        EngineStatus::Ready
    }
}

/// Round half toward positive infinity to `places` decimals.
pub(crate) fn round_half_up(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor + 0.5).floor() / factor
}
