//! Single scripted interactions.

use std::fmt;
use std::str::FromStr;

use crate::form::{EndCondition, PrimaryOption, RecurrenceDescriptor, RecurrenceForm};
use crate::surface::ControlSurface;

use super::{SessionError, StepParseError};

/// One user interaction, written as a short text step.
///
/// | Step           | Meaning                                        |
/// |----------------|------------------------------------------------|
/// | `NAME=VALUE`   | type VALUE into the first enabled control NAME |
/// | `+NAME=VALUE`  | check the checkbox NAME with VALUE             |
/// | `-NAME=VALUE`  | uncheck the checkbox NAME with VALUE           |
/// | `@case=N`      | choose the N-th rendered case control          |
/// | `@end=VALUE`   | choose the end condition                       |
///
/// # Examples
///
/// ```
/// use rrule_form::session::Step;
///
/// let step: Step = "+BYDAY=MO".parse().unwrap();
/// assert_eq!(
///     step,
///     Step::Check { name: "BYDAY".into(), value: "MO".into(), checked: true }
/// );
/// assert_eq!(step.to_string(), "+BYDAY=MO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Type a value into a named control.
    SetValue {
        /// Control name
        name: String,
        /// Value to type
        value: String,
    },
    /// Check or uncheck a checkbox.
    Check {
        /// Checkbox name
        name: String,
        /// Checkbox value
        value: String,
        /// Target checked state
        checked: bool,
    },
    /// Choose a case control by 1-based position.
    ChooseCase(usize),
    /// Choose the end condition.
    SelectEnd(EndCondition),
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StepParseError::Empty);
        }

        let (head, value) = trimmed
            .split_once('=')
            .ok_or_else(|| StepParseError::MissingSeparator(trimmed.to_string()))?;
        let value = value.trim();

        if let Some(directive) = head.strip_prefix('@') {
            return parse_directive(directive.trim(), value);
        }

        let (name, checked) = if let Some(rest) = head.strip_prefix('+') {
            (rest, Some(true))
        } else if let Some(rest) = head.strip_prefix('-') {
            (rest, Some(false))
        } else {
            (head, None)
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(StepParseError::EmptyName(trimmed.to_string()));
        }

        let (name, value) = (name.to_string(), value.to_string());
        Ok(match checked {
            Some(checked) => Self::Check {
                name,
                value,
                checked,
            },
            None => Self::SetValue { name, value },
        })
    }
}

fn parse_directive(directive: &str, value: &str) -> Result<Step, StepParseError> {
    match directive.to_lowercase().as_str() {
        "case" => value
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .map(Step::ChooseCase)
            .ok_or_else(|| StepParseError::InvalidCase(value.to_string())),
        "end" => value
            .parse::<EndCondition>()
            .map(Step::SelectEnd)
            .map_err(StepParseError::InvalidEnd),
        _ => Err(StepParseError::UnknownDirective(directive.to_string())),
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetValue { name, value } => write!(f, "{name}={value}"),
            Self::Check {
                name,
                value,
                checked,
            } => write!(f, "{}{name}={value}", if *checked { '+' } else { '-' }),
            Self::ChooseCase(index) => write!(f, "@case={index}"),
            Self::SelectEnd(end) => write!(f, "@end={}", end.value().to_lowercase()),
        }
    }
}

impl Step {
    /// Performs the interaction on `form`.
    ///
    /// Returns the descriptor produced by the interaction, or `None` when the
    /// form ignored it (disabled control).
    ///
    /// # Errors
    ///
    /// Returns an error if the step's target is not rendered or the form
    /// rejects the interaction.
    pub fn apply<S: ControlSurface>(
        &self,
        form: &mut RecurrenceForm<S>,
    ) -> Result<Option<RecurrenceDescriptor>, SessionError> {
        match self {
            Self::SetValue { name, value } => {
                let control = form
                    .control_named(name)
                    .ok_or_else(|| SessionError::NoSuchControl { name: name.clone() })?;
                Ok(form.set_value(control, value)?)
            }
            Self::Check {
                name,
                value,
                checked,
            } => {
                let control = form.checkbox(name, value).ok_or_else(|| {
                    SessionError::NoSuchCheckbox {
                        name: name.clone(),
                        value: value.clone(),
                    }
                })?;
                Ok(form.set_checked(control, *checked)?)
            }
            Self::ChooseCase(index) => {
                let cases = form.case_controls();
                let case = index
                    .checked_sub(1)
                    .and_then(|i| cases.get(i).copied())
                    .ok_or(SessionError::NoSuchCase {
                        index: *index,
                        available: cases.len(),
                    })?;
                Ok(form.choose_case(case)?)
            }
            Self::SelectEnd(end) => Ok(form.select_end(*end)?),
        }
    }
}
