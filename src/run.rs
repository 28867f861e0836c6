//! Application execution logic.
//!
//! Builds a headless recurrence form from the validated configuration,
//! applies the configured session, and renders the resulting descriptor.

use thiserror::Error;

use rrule_form::config::ValidatedConfig;
use rrule_form::form::{FormError, RecurrenceDescriptor, RecurrenceForm};
use rrule_form::session::{SessionError, run_steps};
use rrule_form::surface::HeadlessSurface;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The form could not be built or torn down.
    #[error("Form error: {0}")]
    Form(#[source] FormError),

    /// A session step could not be applied.
    #[error("Session step failed: {0}")]
    Session(#[source] SessionError),

    /// The descriptor could not be encoded.
    #[error("Failed to encode descriptor: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Runs a session against a fresh headless form.
///
/// This function:
/// 1. Renders the form with the configured initial selections
/// 2. Applies every configured step in order
/// 3. Disposes the form and returns the final descriptor
///
/// # Errors
///
/// Returns an error if the form cannot be built or a step fails.
pub fn execute(config: &ValidatedConfig) -> Result<RecurrenceDescriptor, RunError> {
    let mut form =
        RecurrenceForm::new(HeadlessSurface::new(), &config.settings).map_err(RunError::Form)?;

    let descriptor = run_steps(&mut form, &config.steps).map_err(RunError::Session)?;
    tracing::info!("Session finished after {} step(s): {descriptor}", config.steps.len());

    let surface = form.dispose().map_err(RunError::Form)?;
    tracing::debug!(
        "Form disposed ({} control(s), {} listener(s) left)",
        surface.len(),
        surface.listener_count()
    );

    Ok(descriptor)
}

/// Encodes a descriptor as JSON, compact or indented.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(descriptor: &RecurrenceDescriptor, pretty: bool) -> Result<String, RunError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(descriptor)
    } else {
        serde_json::to_string(descriptor)
    };
    encoded.map_err(RunError::Encode)
}
