//! In-memory control surface.

use std::collections::{BTreeMap, HashMap};

use super::{
    Control, ControlId, ControlSpec, ControlSurface, Event, EventKind, SubscriptionId, SurfaceError,
};

/// A control surface that keeps the whole tree in memory.
///
/// Used by the CLI to drive scripted sessions and by tests as the surface
/// double. Behaves like a minimal document: children keep insertion order,
/// events bubble from the target to the root.
///
/// # Examples
///
/// ```
/// use rrule_form::surface::{ControlSpec, ControlSurface, HeadlessSurface};
///
/// let mut surface = HeadlessSurface::new();
/// let root = surface.root();
/// let text = surface
///     .create(root, ControlSpec::text("hello").with_name("GREETING"))
///     .unwrap();
///
/// assert_eq!(surface.control(text).unwrap().value, "hello");
/// assert_eq!(surface.descendants(root), vec![text]);
/// ```
#[derive(Debug)]
pub struct HeadlessSurface {
    root: ControlId,
    controls: HashMap<ControlId, Control>,
    children: HashMap<ControlId, Vec<ControlId>>,
    subscriptions: BTreeMap<SubscriptionId, (ControlId, EventKind)>,
    next_control: u64,
    next_subscription: u64,
}

impl HeadlessSurface {
    /// Creates a surface holding only the root region.
    #[must_use]
    pub fn new() -> Self {
        let root = ControlId::new(0);
        let mut controls = HashMap::new();
        controls.insert(root, Control::from_spec(root, None, ControlSpec::region()));

        Self {
            root,
            controls,
            children: HashMap::new(),
            subscriptions: BTreeMap::new(),
            next_control: 1,
            next_subscription: 1,
        }
    }

    /// Returns the number of live controls, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Always false: the root is permanent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn control_mut(&mut self, id: ControlId) -> Result<&mut Control, SurfaceError> {
        self.controls
            .get_mut(&id)
            .ok_or(SurfaceError::UnknownControl(id))
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSurface for HeadlessSurface {
    fn root(&self) -> ControlId {
        self.root
    }

    fn create(&mut self, parent: ControlId, spec: ControlSpec) -> Result<ControlId, SurfaceError> {
        if !self.require(parent)?.kind.is_container() {
            return Err(SurfaceError::NotAContainer(parent));
        }

        let id = ControlId::new(self.next_control);
        self.next_control += 1;

        self.controls
            .insert(id, Control::from_spec(id, Some(parent), spec));
        self.children.entry(parent).or_default().push(id);
        Ok(id)
    }

    fn remove(&mut self, id: ControlId) -> Result<(), SurfaceError> {
        if id == self.root {
            return Err(SurfaceError::RootRemoval);
        }
        let parent = self.require(id)?.parent;

        let mut doomed = self.descendants(id);
        doomed.push(id);
        for control in doomed {
            self.controls.remove(&control);
            self.children.remove(&control);
        }

        if let Some(siblings) = parent.and_then(|p| self.children.get_mut(&p)) {
            siblings.retain(|&c| c != id);
        }
        Ok(())
    }

    fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    fn children(&self, id: ControlId) -> Vec<ControlId> {
        self.children.get(&id).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, id: ControlId, value: &str) -> Result<(), SurfaceError> {
        let control = self.control_mut(id)?;
        if !control.kind.is_value_bearing() {
            return Err(SurfaceError::NotValueBearing(id));
        }
        if let Some(choices) = control.choices() {
            if !choices.iter().any(|c| c.value == value) {
                return Err(SurfaceError::InvalidChoice {
                    id,
                    value: value.to_string(),
                });
            }
        }
        control.value = value.to_string();
        Ok(())
    }

    fn set_enabled(&mut self, id: ControlId, enabled: bool) -> Result<(), SurfaceError> {
        self.control_mut(id)?.enabled = enabled;
        Ok(())
    }

    fn set_checked(&mut self, id: ControlId, checked: bool) -> Result<(), SurfaceError> {
        let control = self.control_mut(id)?;
        if !control.kind.is_checkable() {
            return Err(SurfaceError::NotCheckable(id));
        }
        control.checked = checked;
        Ok(())
    }

    fn subscribe(
        &mut self,
        region: ControlId,
        kind: EventKind,
    ) -> Result<SubscriptionId, SurfaceError> {
        self.require(region)?;

        let subscription = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.insert(subscription, (region, kind));
        Ok(subscription)
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.subscriptions.remove(&subscription).is_some()
    }

    fn is_subscribed(&self, subscription: SubscriptionId) -> bool {
        self.subscriptions.contains_key(&subscription)
    }

    fn listeners(&self, event: &Event) -> Vec<SubscriptionId> {
        let mut out = Vec::new();
        let mut cursor = self.control(event.target).map(|c| c.id);

        while let Some(current) = cursor {
            out.extend(
                self.subscriptions
                    .iter()
                    .filter(|(_, (region, kind))| *region == current && *kind == event.kind)
                    .map(|(id, _)| *id),
            );
            cursor = self.control(current).and_then(|c| c.parent);
        }
        out
    }
}
