//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::session::StepParseError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid frequency name.
    #[error("Invalid frequency '{value}': expected yearly, monthly, weekly, daily, or hourly")]
    InvalidFrequency {
        /// The invalid value provided
        value: String,
    },

    /// Invalid end condition name.
    #[error("Invalid end condition '{value}': expected never, after, or on-date")]
    InvalidEndCondition {
        /// The invalid value provided
        value: String,
    },

    /// Invalid numeric value (zero).
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A session step could not be parsed.
    #[error("Invalid step '{step}': {source}")]
    InvalidStep {
        /// The step as written
        step: String,
        /// Parse failure
        #[source]
        source: StepParseError,
    },
}

/// Well-known field names for `InvalidValue` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The default interval field.
    pub const INTERVAL: &str = "interval";
    /// The default count field.
    pub const COUNT: &str = "count";
}

impl ConfigError {
    /// Creates an `InvalidValue` error for a zero value.
    #[must_use]
    pub fn zero(field: &'static str) -> Self {
        Self::InvalidValue {
            field,
            reason: "must be greater than 0".to_string(),
        }
    }
}
