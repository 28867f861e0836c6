//! Error types for the form core.

use thiserror::Error;

use crate::surface::SurfaceError;

/// Error type for form construction and transitions.
///
/// Every variant except [`FormError::Surface`] is a configuration bug: the
/// registry or a field set is shaped wrongly. They surface at startup or at
/// attach time, never in the middle of ordinary user interaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Lookup of an option that has no registered field set.
    #[error("No field set registered for {selector} option '{option}'")]
    UnknownOption {
        /// Caption of the selector
        selector: &'static str,
        /// The option that was looked up
        option: String,
    },

    /// An enumerated option was left out when building a registry.
    #[error("Registry for {selector} is missing a field set for option '{option}'")]
    MissingFieldSet {
        /// Caption of the selector
        selector: &'static str,
        /// The option without a field set
        option: String,
    },

    /// An option was registered twice.
    #[error("Option '{option}' of {selector} is registered more than once")]
    DuplicateOption {
        /// Caption of the selector
        selector: &'static str,
        /// The duplicated option
        option: String,
    },

    /// Block membership or field shape cannot be resolved.
    #[error("Malformed field set '{field_set}': {reason}")]
    MalformedFieldSet {
        /// Name of the offending field set
        field_set: String,
        /// What is wrong with it
        reason: String,
    },

    /// The control surface rejected an operation.
    #[error("Control surface error: {0}")]
    Surface(#[from] SurfaceError),
}

impl FormError {
    /// Creates a `MalformedFieldSet` error.
    #[must_use]
    pub fn malformed(field_set: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFieldSet {
            field_set: field_set.into(),
            reason: reason.into(),
        }
    }
}
