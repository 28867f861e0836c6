//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::form::{EndCondition, Frequency};

/// Default frequency on first render.
pub const FREQUENCY: Frequency = Frequency::Monthly;

/// Default end condition on first render.
pub const END: EndCondition = EndCondition::Never;

/// Default repeat interval.
pub const INTERVAL: u32 = 1;

/// Default occurrence count for the "after" end condition.
pub const COUNT: u32 = 1;
