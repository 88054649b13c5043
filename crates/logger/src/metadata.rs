//! Structured metadata attached to loggers and log calls

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Metadata keyed by string, ordered for deterministic output.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// A plain string
    String(String),
    /// An ordered list of values
    Array(Vec<MetadataValue>),
    /// A nested mapping
    Dictionary(Metadata),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Self::Dictionary(entries) => {
                f.write_str("[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for MetadataValue {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(values)
    }
}

impl From<Metadata> for MetadataValue {
    fn from(entries: Metadata) -> Self {
        Self::Dictionary(entries)
    }
}

/// Renders metadata as space-separated `key=value` pairs.
pub(crate) fn render(metadata: &Metadata) -> String {
    metadata
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata;

    #[test]
    fn test_display_nested() {
        let value = MetadataValue::Array(vec![
            "a".into(),
            MetadataValue::Dictionary(metadata! { "k" => "v" }),
        ]);

        assert_eq!(value.to_string(), "[a, [k: v]]");
    }

    #[test]
    fn test_render_is_ordered() {
        let metadata = metadata! {
            "zone" => "eu",
            "attempt" => "3",
        };

        assert_eq!(render(&metadata), "attempt=3 zone=eu");
        assert_eq!(render(&Metadata::new()), "");
    }

    #[test]
    fn test_serde_untagged() {
        let metadata = metadata! {
            "peers" => vec![MetadataValue::from("a"), MetadataValue::from("b")],
            "node" => "n1",
        };

        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, r#"{"node":"n1","peers":["a","b"]}"#);
        assert_eq!(serde_json::from_str::<Metadata>(&json).unwrap(), metadata);
    }
}
