//! Error types for configuration loading and validation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when a configuration enters the crate from loosely typed data.
///
/// Projection itself never fails; these errors come from the entry points
/// that guard it (validation, parsing and loading).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required option is absent or holds `null`.
    #[error("missing required option {name:?}")]
    MissingRequired { name: &'static str },

    /// An option holds a value of the wrong shape.
    #[error("option {name:?} expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: String,
    },

    /// A dimensions value has a negative or non-finite side.
    #[error("option {name:?} has invalid dimensions: {reason}")]
    InvalidDimensions { name: String, reason: String },

    /// The top-level configuration value is not an object.
    #[error("configuration must be an object, got {actual}")]
    NotAnObject { actual: String },

    /// The configuration file extension is not `json` or `toml`.
    #[error("unsupported config file extension: {ext:?}")]
    UnsupportedExtension { ext: String },

    /// Reading the configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or conversion failed.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_message() {
        let err = ConfigError::MissingRequired { name: "nftUrl" };
        assert_eq!(err.to_string(), r#"missing required option "nftUrl""#);
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ConfigError::TypeMismatch {
            name: "timeoutMs".to_string(),
            expected: "integer milliseconds",
            actual: "\"soon\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"option "timeoutMs" expected integer milliseconds, got "soon""#
        );
    }
}
