//! Error types for lexis-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {0}")]
    NotFound(camino::Utf8PathBuf),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A required text argument was empty or whitespace-only.
    #[error("{field} must be a non-empty string")]
    InvalidInput {
        /// Name of the offending argument.
        field: &'static str,
    },

    /// One item of a batch failed; the whole batch is rejected.
    #[error("batch item {index} failed: {source}")]
    BatchItem {
        /// Zero-based position of the failing item.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<AnalysisError>,
    },

    /// The segmentation dictionary could not be built from the configured words.
    #[error("lexicon construction failed: {0}")]
    Lexicon(String),
}

impl AnalysisError {
    /// Returns `true` when the failure was caused by the caller's input.
    ///
    /// Batch failures report the classification of the item that failed.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput { .. } => true,
            Self::BatchItem { source, .. } => source.is_invalid_input(),
            Self::Lexicon(_) => false,
        }
    }
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
