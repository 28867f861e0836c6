//! Startup settings of a recurrence form.

use crate::config::defaults;

use super::{EndCondition, Frequency};

/// Initial selections and defaults the form is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    /// Frequency selected on first render.
    pub frequency: Frequency,
    /// End condition selected on first render.
    pub end: EndCondition,
    /// Initial and fallback value of every INTERVAL field.
    pub interval: u32,
    /// Initial and fallback value of the COUNT field.
    pub count: u32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            frequency: defaults::FREQUENCY,
            end: defaults::END,
            interval: defaults::INTERVAL,
            count: defaults::COUNT,
        }
    }
}
