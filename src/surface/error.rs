//! Error types for control surface operations.

use thiserror::Error;

use super::ControlId;

/// Error type for control surface operations.
///
/// These indicate programming or script errors; ordinary user interaction
/// on a well-formed surface never produces them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The control does not exist (never created, or already removed).
    #[error("Unknown control {0}")]
    UnknownControl(ControlId),

    /// Controls can only be created inside regions and blocks.
    #[error("Control {0} cannot contain other controls")]
    NotAContainer(ControlId),

    /// The root control is permanent.
    #[error("The root control cannot be removed")]
    RootRemoval,

    /// The control has no user-editable value.
    #[error("Control {0} does not hold an editable value")]
    NotValueBearing(ControlId),

    /// The control has no checked flag.
    #[error("Control {0} cannot be checked")]
    NotCheckable(ControlId),

    /// A select control was given a value outside its choices.
    #[error("'{value}' is not a choice of control {id}")]
    InvalidChoice {
        /// The select control
        id: ControlId,
        /// The rejected value
        value: String,
    },
}
