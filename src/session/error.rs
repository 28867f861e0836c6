//! Error types for session scripts.

use thiserror::Error;

use crate::form::FormError;

/// A step that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepParseError {
    /// The step is blank.
    #[error("Empty step")]
    Empty,

    /// The step has no `=` separator.
    #[error("Step '{0}' is not of the form NAME=VALUE")]
    MissingSeparator(String),

    /// The name left of `=` is blank.
    #[error("Step '{0}' has an empty name")]
    EmptyName(String),

    /// `@case=` was given something other than a positive number.
    #[error("Invalid case number '{0}': expected 1 or more")]
    InvalidCase(String),

    /// `@end=` was given an unknown end condition.
    #[error("Invalid end condition '{0}': expected never, after, or on-date")]
    InvalidEnd(String),

    /// `@` directive other than `@case` and `@end`.
    #[error("Unknown directive '@{0}': expected @case or @end")]
    UnknownDirective(String),
}

/// A step that could not be applied to the form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No enabled control carries the name.
    #[error("No enabled control named '{name}'")]
    NoSuchControl {
        /// Requested control name
        name: String,
    },

    /// No checkbox carries the name and value.
    #[error("No checkbox {name}={value}")]
    NoSuchCheckbox {
        /// Requested control name
        name: String,
        /// Requested checkbox value
        value: String,
    },

    /// The case number is beyond the rendered case controls.
    #[error("No case {index}: {available} case control(s) rendered")]
    NoSuchCase {
        /// 1-based case number
        index: usize,
        /// Number of case controls currently rendered
        available: usize,
    },

    /// The form rejected the interaction.
    #[error(transparent)]
    Form(#[from] FormError),
}
