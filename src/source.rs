//! Raw configuration input boundary.
//!
//! Upstream configuration documents are YAML; this module reads them into
//! the untyped key → value map the field-group loaders consume. The loaders
//! themselves never touch the filesystem.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_yaml::Value;
use tracing::debug;

use crate::error::ConfigError;

/// The generic configuration map: key names to dynamically-typed values.
pub type RawConfig = BTreeMap<String, Value>;

/// Parse a YAML document into a raw configuration map.
///
/// An empty document yields an empty map; every key then takes its default.
pub fn parse_raw_config(document: &str) -> Result<RawConfig, ConfigError> {
    if document.trim().is_empty() {
        return Ok(RawConfig::new());
    }
    let raw: RawConfig = serde_yaml::from_str(document)?;
    Ok(raw)
}

/// Read a YAML configuration document from disk into a raw map.
pub fn read_raw_config(path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = path.as_ref();
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let raw = parse_raw_config(&document)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;
    debug!(path = %path.display(), keys = raw.len(), "loaded raw configuration");
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_document() {
        let raw = parse_raw_config("").expect("empty document should parse");
        assert!(raw.is_empty());

        let raw = parse_raw_config("  \n").expect("blank document should parse");
        assert!(raw.is_empty());
    }

    #[test]
    fn test_parse_scalars() {
        let raw = parse_raw_config("SERVER_HOSTNAME: registry.example.com\nEXTERNAL_TLS_TERMINATION: true")
            .expect("document should parse");

        assert_eq!(
            raw.get("SERVER_HOSTNAME"),
            Some(&Value::String("registry.example.com".to_string()))
        );
        assert_eq!(
            raw.get("EXTERNAL_TLS_TERMINATION"),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn test_parse_preserves_dynamic_types() {
        // Values keep whatever type the document gave them; interpretation
        // happens later, per field group.
        let raw = parse_raw_config("A: 42\nB:\n  nested: true").expect("document should parse");

        assert!(matches!(raw.get("A"), Some(Value::Number(_))));
        assert!(matches!(raw.get("B"), Some(Value::Mapping(_))));
    }

    #[test]
    fn test_parse_malformed_document() {
        let result = parse_raw_config(": : :");
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_non_mapping_document() {
        let result = parse_raw_config("- just\n- a\n- list");
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }
}
