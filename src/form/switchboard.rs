//! Selection switchboard: swaps field sets when a primary option changes.

use crate::surface::{
    Choice, ControlId, ControlSpec, ControlSurface, Event, EventKind, SubscriptionId,
};

use super::{FieldRegistry, FieldSetInstance, FormError, PrimaryOption};

/// State machine over the options of `O`.
///
/// Owns a selector control, a managed region next to it, and the field set
/// instance currently mounted in that region. The machine starts in the
/// option given to [`mount`](Self::mount), enters it immediately, and can
/// transition any number of times afterwards.
///
/// # Guarantee
///
/// After every completed transition exactly one field set instance is present
/// in the managed region, and if it has blocks exactly one of them is active.
#[derive(Debug)]
pub struct Switchboard<O: PrimaryOption> {
    registry: FieldRegistry<O>,
    selector: ControlId,
    region: ControlId,
    subscription: SubscriptionId,
    current: Option<(O, FieldSetInstance)>,
}

impl<O: PrimaryOption> Switchboard<O> {
    /// Renders the selector and managed region under `parent`, then enters
    /// `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects an operation or the initial
    /// field set cannot be mounted.
    pub fn mount<S: ControlSurface + ?Sized>(
        surface: &mut S,
        parent: ControlId,
        registry: FieldRegistry<O>,
        initial: O,
    ) -> Result<Self, FormError> {
        let choices = O::all()
            .iter()
            .map(|o| Choice::new(o.value(), o.label()))
            .collect();
        let mut spec = ControlSpec::select(choices, initial.value()).with_label(O::SELECTOR);
        if let Some(field) = O::FIELD {
            spec = spec.with_name(field);
        }

        let selector = surface.create(parent, spec)?;
        let region = surface.create(parent, ControlSpec::region().with_label(O::SELECTOR))?;
        let subscription = surface.subscribe(selector, EventKind::Change)?;

        let mut board = Self {
            registry,
            selector,
            region,
            subscription,
            current: None,
        };
        board.enter(surface, initial)?;
        Ok(board)
    }

    /// Transitions to `option`.
    ///
    /// Tears the current instance down completely (subscriptions first, then
    /// controls), syncs the selector, and mounts a fresh instance of the new
    /// option's field set in the managed region. Controls outside the managed
    /// region are left untouched. Selecting the current option is a no-op.
    ///
    /// Returns true if a transition happened. If the new field set cannot be
    /// mounted, the previous option is entered again before the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the field set cannot be looked up or mounted.
    pub fn switch_to<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        option: O,
    ) -> Result<bool, FormError> {
        if self.current() == Some(option) {
            return Ok(false);
        }
        self.registry.field_set_for(option)?;

        let previous = match self.current.take() {
            Some((previous, instance)) => {
                instance.dispose(surface)?;
                Some(previous)
            }
            None => None,
        };

        if let Err(e) = self.sync_and_enter(surface, option) {
            if let Some(previous) = previous {
                self.restore(surface, previous);
            }
            return Err(e);
        }
        if let Some(previous) = previous {
            tracing::info!("{}: {previous} -> {option}", O::SELECTOR);
        }
        Ok(true)
    }

    fn sync_and_enter<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        option: O,
    ) -> Result<(), FormError> {
        if surface.require(self.selector)?.value != option.value() {
            surface.set_value(self.selector, option.value())?;
        }
        self.enter(surface, option)
    }

    /// Re-enters `previous` after a failed transition.
    fn restore<S: ControlSurface + ?Sized>(&mut self, surface: &mut S, previous: O) {
        match self.sync_and_enter(surface, previous) {
            Ok(()) => tracing::warn!("{}: transition failed, restored {previous}", O::SELECTOR),
            Err(e) => tracing::error!("{}: could not restore {previous}: {e}", O::SELECTOR),
        }
    }

    fn enter<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        option: O,
    ) -> Result<(), FormError> {
        let set = self.registry.field_set_for(option)?;
        let instance = FieldSetInstance::mount(set, surface, self.region)?;

        tracing::debug!(
            "{}: entered {option} ({} item(s), active block {:?})",
            O::SELECTOR,
            set.items().len(),
            instance.active_block()
        );
        self.current = Some((option, instance));
        Ok(())
    }

    /// Handles an event delivered to `subscription`.
    ///
    /// Selector changes trigger a transition; anything else is forwarded to
    /// the current instance. Returns true if the subscription belongs to this
    /// switchboard or its instance.
    ///
    /// # Errors
    ///
    /// Returns an error if a transition fails.
    pub fn handle<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        subscription: SubscriptionId,
        event: &Event,
    ) -> Result<bool, FormError> {
        if subscription == self.subscription {
            if event.target == self.selector {
                let value = surface.require(self.selector)?.value.clone();
                match O::from_value(&value) {
                    Some(option) => {
                        self.switch_to(surface, option)?;
                    }
                    None => tracing::warn!("{}: ignoring unknown value '{value}'", O::SELECTOR),
                }
            }
            return Ok(true);
        }

        match self.current.as_mut() {
            Some((_, instance)) => instance.handle(surface, subscription, event),
            None => Ok(false),
        }
    }

    /// Tears down the current instance and the switchboard's own controls.
    ///
    /// # Errors
    ///
    /// Returns an error if a control was already removed by someone else.
    pub fn dispose<S: ControlSurface + ?Sized>(self, surface: &mut S) -> Result<(), FormError> {
        surface.unsubscribe(self.subscription);
        if let Some((_, instance)) = self.current {
            instance.dispose(surface)?;
        }
        surface.remove(self.region)?;
        surface.remove(self.selector)?;
        Ok(())
    }

    /// The option currently entered.
    #[must_use]
    pub fn current(&self) -> Option<O> {
        self.current.as_ref().map(|(option, _)| *option)
    }

    /// The instance currently mounted.
    #[must_use]
    pub fn instance(&self) -> Option<&FieldSetInstance> {
        self.current.as_ref().map(|(_, instance)| instance)
    }

    /// The selector control.
    #[must_use]
    pub const fn selector(&self) -> ControlId {
        self.selector
    }

    /// The managed region.
    #[must_use]
    pub const fn region(&self) -> ControlId {
        self.region
    }

    /// The registry field sets are looked up in.
    #[must_use]
    pub const fn registry(&self) -> &FieldRegistry<O> {
        &self.registry
    }
}
