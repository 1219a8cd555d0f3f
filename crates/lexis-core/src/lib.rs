//! Core library for lexis.
//!
//! A deterministic, rule-based text analytics engine: lexical normalization,
//! lexicon sentiment, frequency-ranked keywords, pattern-based entities,
//! summary statistics, character-ratio language detection, and hybrid
//! similarity between two texts.
//!
//! # Modules
//!
//! - [`analysis`] - The [`Engine`] orchestrator and per-feature functions
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`lexicon`] - Immutable word tables shared by all features
//! - [`record`] - Typed record values from an external record store
//! - [`response`] - Success/failure envelope for transports
//! - [`text`] - Normalization, tokenization, sentence splitting
//!
//! # Quick Start
//!
//! ```
//! use lexis_core::{AnalysisOptions, Engine};
//!
//! let engine = Engine::new();
//! let report = engine
//!     .analyze("这个产品很好，我很喜欢！", &AnalysisOptions::default())
//!     .expect("non-empty text");
//!
//! assert_eq!(report.sentiment.label.as_str(), "positive");
//! assert_eq!(report.language.as_str(), "zh");
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod record;
pub mod response;
pub mod text;
pub mod word_lists;

pub use analysis::{AnalysisOptions, AnalysisReport, Engine, SimilarityReport};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use lexicon::{EngineStatus, Lexicons};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
