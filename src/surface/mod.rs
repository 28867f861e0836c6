//! Control surface abstraction.
//!
//! This module provides types and traits for:
//! - Identifying and describing controls ([`ControlId`], [`ControlKind`], [`ControlSpec`], [`Control`])
//! - Interaction events and subscriptions ([`Event`], [`EventKind`], [`SubscriptionId`])
//! - The capability set the form core is written against ([`ControlSurface`])
//! - An in-memory implementation for headless sessions and tests ([`HeadlessSurface`])

mod control;
mod error;
mod event;
mod headless;


pub use control::{Choice, Control, ControlId, ControlKind, ControlSpec};
pub use error::SurfaceError;
pub use event::{Event, EventKind, SubscriptionId};
pub use headless::HeadlessSurface;

/// Capability set of a renderable, interactive control tree.
///
/// The form core never assumes a rendering technology; any UI layer that can
/// create, remove, read and write controls and deliver bubbling events can
/// host it.
///
/// # Event Delivery
///
/// The surface does not invoke callbacks itself. It records subscriptions and
/// answers [`listeners`](Self::listeners) for an event; the owner of the
/// subscriptions routes the event. This keeps every transition synchronous
/// inside the caller's event handler.
pub trait ControlSurface {
    /// Returns the permanent root container.
    fn root(&self) -> ControlId;

    /// Creates a control as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is unknown or not a container.
    fn create(&mut self, parent: ControlId, spec: ControlSpec) -> Result<ControlId, SurfaceError>;

    /// Removes a control together with its whole subtree.
    ///
    /// Subscriptions are not released; owners must unsubscribe first.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is unknown or is the root.
    fn remove(&mut self, id: ControlId) -> Result<(), SurfaceError>;

    /// Reads a control's live state.
    fn control(&self, id: ControlId) -> Option<&Control>;

    /// Lists the direct children of a control in insertion order.
    fn children(&self, id: ControlId) -> Vec<ControlId>;

    /// Writes a control's value.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is unknown, holds no editable value,
    /// or is a select control and `value` is not one of its choices.
    fn set_value(&mut self, id: ControlId, value: &str) -> Result<(), SurfaceError>;

    /// Enables or disables a control.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is unknown.
    fn set_enabled(&mut self, id: ControlId, enabled: bool) -> Result<(), SurfaceError>;

    /// Sets the checked flag of a checkbox or case control.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is unknown or not checkable.
    fn set_checked(&mut self, id: ControlId, checked: bool) -> Result<(), SurfaceError>;

    /// Subscribes to events of `kind` that target `region` or bubble through it.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is unknown.
    fn subscribe(&mut self, region: ControlId, kind: EventKind) -> Result<SubscriptionId, SurfaceError>;

    /// Releases a subscription. Returns false if it was not live.
    fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool;

    /// Returns true if the subscription is live.
    fn is_subscribed(&self, subscription: SubscriptionId) -> bool;

    /// Returns the live subscriptions notified by `event`, in bubbling order.
    fn listeners(&self, event: &Event) -> Vec<SubscriptionId>;

    /// Reads a control, failing on unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownControl`] if the control does not exist.
    fn require(&self, id: ControlId) -> Result<&Control, SurfaceError> {
        self.control(id).ok_or(SurfaceError::UnknownControl(id))
    }

    /// Lists every control below `id` in document order (pre-order, excluding `id`).
    fn descendants(&self, id: ControlId) -> Vec<ControlId> {
        let mut out = Vec::new();
        let mut stack: Vec<ControlId> = self.children(id).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).into_iter().rev());
        }
        out
    }

    /// Returns true if `id` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: ControlId, id: ControlId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.control(current).and_then(|c| c.parent);
        }
        false
    }
}
