//! Per-call analysis options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Switches for the optional analysis stages.
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid
/// options object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisOptions {
    /// Rank keywords (default `true`).
    pub extract_keywords: bool,
    /// Extract NUMBER, EMAIL and URL entities (default `true`).
    pub extract_entities: bool,
    /// Compute the readability score (default `true`).
    pub calculate_readability: bool,
    /// Maximum number of keywords (default 10; 0 yields none).
    pub keyword_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            extract_keywords: true,
            extract_entities: true,
            calculate_readability: true,
            keyword_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let options: AnalysisOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, AnalysisOptions::default());
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let options: AnalysisOptions =
            serde_json::from_str(r#"{"keywordLimit": 3, "extractEntities": false}"#).unwrap();
        assert_eq!(options.keyword_limit, 3);
        assert!(!options.extract_entities);
        assert!(options.extract_keywords);
        assert!(options.calculate_readability);
    }
}
