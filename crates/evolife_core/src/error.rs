//! Error types for evolife_core.
//!
//! The tick itself never fails; errors only surface while loading
//! configuration or merging externally supplied tuning values.

use thiserror::Error;

/// Main error type for evolife_core operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// Malformed TOML configuration
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// File system errors
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tuning key that no behavior reads
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Value that cannot be clamped into range
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: f64 },

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<SimError>,
    },
}

/// Result type alias for evolife_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn unknown_parameter<S: Into<String>>(key: S) -> Self {
        Self::UnknownParameter(key.into())
    }

    #[must_use]
    pub fn invalid_value<S: Into<String>>(key: S, value: f64) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value,
        }
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
