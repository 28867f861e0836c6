//! Interaction events and subscription handles.

use std::fmt;

use super::ControlId;

/// Kind of interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Raw edit of a control's value, fired on every keystroke-level change.
    Input,
    /// Committed change of a control's value or checked flag.
    Change,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Change => write!(f, "change"),
        }
    }
}

/// An interaction event targeting one control.
///
/// Events bubble: subscribers of the target and of every ancestor are notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Control the interaction happened on.
    pub target: ControlId,
    /// Kind of interaction.
    pub kind: EventKind,
}

impl Event {
    /// Creates an input event.
    #[must_use]
    pub const fn input(target: ControlId) -> Self {
        Self {
            target,
            kind: EventKind::Input,
        }
    }

    /// Creates a change event.
    #[must_use]
    pub const fn change(target: ControlId) -> Self {
        Self {
            target,
            kind: EventKind::Change,
        }
    }
}

/// Handle of a live event subscription.
///
/// Returned by [`ControlSurface::subscribe`](super::ControlSurface::subscribe);
/// the owner must pass it back to `unsubscribe` before discarding the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}
