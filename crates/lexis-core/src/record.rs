//! Typed record values supplied by an external record store.
//!
//! Records carry a schema-less metadata map whose values are drawn from a
//! closed set of variants. Nested maps are addressed with dotted paths such
//! as `metadata.owner.team`. The engine analyzes a record only after it has
//! been serialized to JSON text with [`Record::to_analysis_text`].

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
    /// A nested map.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Follow a dotted path through nested maps.
    ///
    /// An empty path returns the value itself. Paths that run into a
    /// non-map value or a missing key return `None`.
    pub fn get_path(&self, path: &str) -> Option<&Self> {
        if path.is_empty() {
            return Some(self);
        }
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        match self {
            Self::Map(map) => map.get(head)?.get_path(rest),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Schema-less record metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, Value>);

impl Metadata {
    /// Empty metadata.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a top-level entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Follow a dotted path, e.g. `owner.team`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        self.0.get(head)?.get_path(rest)
    }

    /// Returns `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Value)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One record as held by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Numeric payload.
    pub value: f64,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Record {
    /// Look up a field by dotted path.
    ///
    /// Top-level names are `id`, `name`, `value`, `timestamp` and `metadata`;
    /// anything below `metadata.` is resolved inside the metadata map.
    pub fn lookup(&self, path: &str) -> Option<Value> {
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        let scalar = match head {
            "id" => Value::Text(self.id.clone()),
            "name" => Value::Text(self.name.clone()),
            "value" => Value::Number(self.value),
            "timestamp" => {
                Value::Text(self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            "metadata" if rest.is_empty() => Value::Map(self.metadata.0.clone()),
            "metadata" => return self.metadata.get_path(rest).cloned(),
            _ => return None,
        };
        rest.is_empty().then_some(scalar)
    }

    /// Serialize the record to the JSON text handed to the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_analysis_text(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        serde_json::from_str(
            r#"{
                "id": "r-1",
                "name": "Quarterly review",
                "value": 42.5,
                "timestamp": "2024-03-01T12:00:00Z",
                "metadata": {
                    "category": "finance",
                    "flagged": false,
                    "score": 7,
                    "owner": { "team": "analytics", "lead": null }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn nested_metadata_lookup() {
        let record = sample();
        assert_eq!(
            record.lookup("metadata.owner.team"),
            Some(Value::Text("analytics".into()))
        );
        assert_eq!(record.lookup("metadata.owner.lead"), Some(Value::Null));
        assert_eq!(record.lookup("metadata.flagged"), Some(Value::Bool(false)));
        assert_eq!(record.lookup("metadata.score"), Some(Value::Number(7.0)));
    }

    #[test]
    fn top_level_lookup() {
        let record = sample();
        assert_eq!(record.lookup("id"), Some(Value::Text("r-1".into())));
        assert_eq!(record.lookup("value"), Some(Value::Number(42.5)));
        assert_eq!(
            record.lookup("timestamp"),
            Some(Value::Text("2024-03-01T12:00:00.000Z".into()))
        );
        assert!(matches!(record.lookup("metadata"), Some(Value::Map(_))));
    }

    #[test]
    fn missing_paths() {
        let record = sample();
        assert_eq!(record.lookup("metadata.owner.team.name"), None);
        assert_eq!(record.lookup("metadata.nope"), None);
        assert_eq!(record.lookup("id.inner"), None);
        assert_eq!(record.lookup("unknown"), None);
    }

    #[test]
    fn arrays_are_not_metadata_values() {
        let result: Result<Value, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn metadata_is_optional() {
        let record: Record = serde_json::from_str(
            r#"{"id":"x","name":"n","value":1,"timestamp":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(record.metadata.is_empty());
        let text = record.to_analysis_text().unwrap();
        assert!(!text.contains("metadata"));
    }

    #[test]
    fn analysis_text_is_json() {
        let text = sample().to_analysis_text().unwrap();
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample());
        assert!(text.contains("\"category\":\"finance\""));
    }

    #[test]
    fn display_values() {
        assert_eq!(Value::Text("hi".into()).to_string(), "hi");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Null.to_string(), "null");
        let mut metadata = Metadata::new();
        metadata.insert("a", Value::Bool(true));
        assert_eq!(metadata.len(), 1);
        assert_eq!(Value::Map(metadata.0).to_string(), r#"{"a":true}"#);
    }
}
