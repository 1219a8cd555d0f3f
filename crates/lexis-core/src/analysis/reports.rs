//! Report structs for text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. Field names are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Lexicon-based polarity.
    pub sentiment: Sentiment,
    /// Most frequent non-stop-word tokens, most frequent first.
    pub keywords: Vec<String>,
    /// Pattern matches grouped by type (NUMBER, then EMAIL, then URL).
    pub entities: Vec<Entity>,
    /// Structural statistics.
    pub summary: SummaryStats,
    /// Coarse language tag.
    pub language: Language,
    /// When the analysis ran (UTC).
    pub timestamp: DateTime<Utc>,
}

// -- Sentiment ---------------------------------------------------------------

/// Sentiment polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Score above 0.1.
    Positive,
    /// Score below -0.1.
    Negative,
    /// Score within [-0.1, 0.1].
    Neutral,
}

impl SentimentLabel {
    /// Returns the label as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Lexicon-based sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    /// Net matches divided by token count, in [-1, 1].
    pub score: f64,
    /// Label derived from the score.
    pub label: SentimentLabel,
    /// Fraction of tokens found in a sentiment lexicon, doubled and capped at 1.
    pub confidence: f64,
}

impl Sentiment {
    /// The result for text with no tokens.
    pub const fn neutral() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
        }
    }
}

// -- Entities ----------------------------------------------------------------

/// Kind of extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    /// A run of ASCII digits.
    Number,
    /// An email address.
    Email,
    /// An http or https URL.
    Url,
}

impl EntityKind {
    /// Fixed confidence assigned to every match of this kind.
    pub const fn confidence(&self) -> f64 {
        match self {
            Self::Number | Self::Url => 0.9,
            Self::Email => 0.95,
        }
    }

    /// Returns the kind as an uppercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::Email => "EMAIL",
            Self::Url => "URL",
        }
    }
}

/// A typed pattern match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Entity {
    /// Entity kind.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Matched substring of the normalized text.
    pub value: String,
    /// Per-kind constant confidence.
    pub confidence: f64,
}

// -- Summary -----------------------------------------------------------------

/// Word and sentence statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Number of tokens.
    pub word_count: usize,
    /// Number of non-empty sentences.
    pub sentence_count: usize,
    /// Tokens per sentence (2 decimals), 0 when there are no sentences.
    pub average_words_per_sentence: f64,
    /// `max(0, 100 - 2 * average)` (2 decimals), 0 when not requested.
    pub readability_score: f64,
}

// -- Language ----------------------------------------------------------------

/// Coarse language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// More than 30% CJK ideographs.
    Zh,
    /// More than 50% ASCII letters.
    En,
    /// Neither threshold met.
    Unknown,
}

impl Language {
    /// Returns the tag as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
            Self::Unknown => "unknown",
        }
    }
}

// -- Similarity --------------------------------------------------------------

/// Pairwise similarity between two texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityReport {
    /// Mean of the two component measures (4 decimals).
    pub similarity: f64,
    /// Always `"hybrid"`.
    pub method: String,
    /// Component measures.
    pub details: SimilarityDetails,
}

/// Component measures of a [`SimilarityReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityDetails {
    /// Jaccard index of the normalized token sets (4 decimals).
    pub jaccard_index: f64,
    /// Jaro-Winkler closeness of the raw strings (4 decimals).
    ///
    /// Named for wire compatibility; the value is a closeness, not a distance.
    pub cosine_distance: f64,
}
