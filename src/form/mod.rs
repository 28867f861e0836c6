//! Form core: the dependent-field state machine.
//!
//! This module provides types and functions for:
//! - Primary options and their selector values ([`PrimaryOption`], [`Frequency`], [`EndCondition`])
//! - Field descriptors and field sets ([`FieldDescriptor`], [`ValueDomain`], [`ExclusionBlock`], [`FieldSet`])
//! - The seeded value domains and field sets ([`catalog`])
//! - Option → field set lookup ([`FieldRegistry`])
//! - Mutually exclusive blocks ([`ExclusionController`])
//! - Field set lifecycle ([`FieldSetInstance`], [`Switchboard`])
//! - Aggregation into a descriptor ([`collect`], [`RecurrenceDescriptor`])
//! - The composed form ([`RecurrenceForm`], [`FormSettings`])
//!
//! # Control Flow
//!
//! A primary-option change reaches its [`Switchboard`], which disposes the
//! current [`FieldSetInstance`], looks up the new option's [`FieldSet`] in its
//! [`FieldRegistry`], and mounts a fresh instance. Mounting attaches an
//! [`ExclusionController`] that activates the first block before returning.
//! Every change bubbling out of the form is answered with a fresh
//! [`RecurrenceDescriptor`].

mod aggregate;
pub mod catalog;
mod error;
mod exclusion;
mod field;
mod instance;
mod option;
mod recurrence;
mod registry;
mod settings;
mod switchboard;

#[cfg(test)]
mod recurrence_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod test_fixtures;

pub use aggregate::{RecurrenceDescriptor, collect};
pub use error::FormError;
pub use exclusion::ExclusionController;
pub use field::{ExclusionBlock, FieldDescriptor, FieldItem, FieldSet, ValueDomain};
pub use instance::FieldSetInstance;
pub use option::{EndCondition, Frequency, PrimaryOption};
pub use recurrence::RecurrenceForm;
pub use registry::{FieldRegistry, RegistryBuilder};
pub use settings::FormSettings;
pub use switchboard::Switchboard;

/// Well-known field names of the recurrence descriptor.
pub mod key {
    /// Frequency selector.
    pub const FREQ: &str = "FREQ";
    /// Repeat interval.
    pub const INTERVAL: &str = "INTERVAL";
    /// Month number(s).
    pub const BYMONTH: &str = "BYMONTH";
    /// Day number(s) within the month.
    pub const BYMONTHDAY: &str = "BYMONTHDAY";
    /// Day-of-week code(s).
    pub const BYDAY: &str = "BYDAY";
    /// Position within the set of matching days.
    pub const BYSETPOS: &str = "BYSETPOS";
    /// Number of occurrences (end condition "after").
    pub const COUNT: &str = "COUNT";
    /// Last date (end condition "on date").
    pub const UNTIL: &str = "UNTIL";
}
