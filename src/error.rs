//! Error types for configuration loading.

use thiserror::Error;

/// The semantic type a configuration field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A boolean field.
    Bool,
    /// A string field.
    String,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
        }
    }
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A present key holds a value that does not match the field's declared
    /// type. The whole group load is aborted; absence of a key is never an
    /// error (the default applies), and unrecognized keys are ignored.
    #[error("{key} must be of type {expected}")]
    TypeMismatch {
        /// The offending source key.
        key: &'static str,
        /// The type the field is declared with.
        expected: FieldKind,
    },

    /// The raw document could not be parsed as YAML.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}
