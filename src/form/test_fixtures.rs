//! Shared test fixtures for form tests.

use crate::surface::{
    Control, ControlId, ControlSpec, ControlSurface, Event, EventKind, HeadlessSurface,
    SubscriptionId, SurfaceError,
};

/// Headless surface that can be told to reject operations.
#[derive(Default)]
pub struct FlakySurface {
    inner: HeadlessSurface,
    fail_create_at: Option<usize>,
    fail_removes: bool,
}

impl FlakySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets `skip` more creates succeed, then fails the next one once.
    pub const fn fail_create(&mut self, skip: usize) {
        self.fail_create_at = Some(skip);
    }

    /// Fails every remove from now on.
    pub const fn fail_removes(&mut self) {
        self.fail_removes = true;
    }

    pub const fn inner(&self) -> &HeadlessSurface {
        &self.inner
    }
}

impl ControlSurface for FlakySurface {
    fn root(&self) -> ControlId {
        self.inner.root()
    }

    fn create(&mut self, parent: ControlId, spec: ControlSpec) -> Result<ControlId, SurfaceError> {
        match self.fail_create_at {
            Some(0) => {
                self.fail_create_at = None;
                return Err(SurfaceError::NotAContainer(parent));
            }
            Some(n) => self.fail_create_at = Some(n - 1),
            None => {}
        }
        self.inner.create(parent, spec)
    }

    fn remove(&mut self, id: ControlId) -> Result<(), SurfaceError> {
        if self.fail_removes {
            return Err(SurfaceError::UnknownControl(id));
        }
        self.inner.remove(id)
    }

    fn control(&self, id: ControlId) -> Option<&Control> {
        self.inner.control(id)
    }

    fn children(&self, id: ControlId) -> Vec<ControlId> {
        self.inner.children(id)
    }

    fn set_value(&mut self, id: ControlId, value: &str) -> Result<(), SurfaceError> {
        self.inner.set_value(id, value)
    }

    fn set_enabled(&mut self, id: ControlId, enabled: bool) -> Result<(), SurfaceError> {
        self.inner.set_enabled(id, enabled)
    }

    fn set_checked(&mut self, id: ControlId, checked: bool) -> Result<(), SurfaceError> {
        self.inner.set_checked(id, checked)
    }

    fn subscribe(&mut self, region: ControlId, kind: EventKind) -> Result<SubscriptionId, SurfaceError> {
        self.inner.subscribe(region, kind)
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.inner.unsubscribe(subscription)
    }

    fn is_subscribed(&self, subscription: SubscriptionId) -> bool {
        self.inner.is_subscribed(subscription)
    }

    fn listeners(&self, event: &Event) -> Vec<SubscriptionId> {
        self.inner.listeners(event)
    }
}
