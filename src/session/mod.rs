//! Scripted interaction with a recurrence form.
//!
//! A session is a list of [`Step`]s applied in order to a
//! [`RecurrenceForm`], the way a person would click through it. The CLI
//! uses sessions to drive a headless form and print the final descriptor.

mod error;
mod step;


pub use error::{SessionError, StepParseError};
pub use step::Step;

use crate::form::{RecurrenceDescriptor, RecurrenceForm};
use crate::surface::ControlSurface;

/// Applies `steps` in order and returns the resulting descriptor.
///
/// Stops at the first failing step.
///
/// # Errors
///
/// Returns the error of the first step that cannot be applied.
pub fn run_steps<S: ControlSurface>(
    form: &mut RecurrenceForm<S>,
    steps: &[Step],
) -> Result<RecurrenceDescriptor, SessionError> {
    for (i, step) in steps.iter().enumerate() {
        tracing::debug!("Step {}/{}: {step}", i + 1, steps.len());
        if step.apply(form)?.is_none() {
            tracing::warn!("Step '{step}' had no effect");
        }
    }
    Ok(form.collect())
}
