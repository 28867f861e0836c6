//! rrule-form: Recurrence Form State Machine
//!
//! A library for driving a recurrence-rule form whose visible fields depend
//! on earlier selections, and for collecting its state into a recurrence
//! descriptor.

pub mod config;
pub mod form;
pub mod session;
pub mod surface;
