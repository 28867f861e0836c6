//! The recurrence form: composition root of the form core.

use crate::surface::{
    ControlId, ControlKind, ControlSpec, ControlSurface, Event, EventKind, SubscriptionId,
};

use super::aggregate::{self, RecurrenceDescriptor};
use super::catalog;
use super::{EndCondition, FormError, FormSettings, Frequency, PrimaryOption, Switchboard};

/// A recurrence form mounted on a control surface.
///
/// Owns the surface, one switchboard for the frequency and one for the end
/// condition, and an aggregation subscription on the form region. All
/// interaction goes through [`dispatch`](Self::dispatch) or the
/// user-interaction helpers, and runs to completion before returning.
///
/// # Examples
///
/// ```
/// use rrule_form::form::{FormSettings, Frequency, RecurrenceForm};
/// use rrule_form::surface::HeadlessSurface;
///
/// let mut form = RecurrenceForm::new(HeadlessSurface::new(), &FormSettings::default()).unwrap();
/// let descriptor = form.select_frequency(Frequency::Daily).unwrap().unwrap();
///
/// assert_eq!(descriptor.get("FREQ"), Some("DAILY"));
/// assert_eq!(descriptor.get("INTERVAL"), Some("1"));
/// ```
#[derive(Debug)]
pub struct RecurrenceForm<S: ControlSurface> {
    surface: S,
    region: ControlId,
    subscription: SubscriptionId,
    frequency: Switchboard<Frequency>,
    end: Switchboard<EndCondition>,
}

impl<S: ControlSurface> RecurrenceForm<S> {
    /// Builds the registries, renders the form under the surface root and
    /// enters the initial frequency and end condition.
    ///
    /// # Errors
    ///
    /// Returns an error if a registry is malformed for `settings` or the
    /// surface rejects an operation.
    pub fn new(mut surface: S, settings: &FormSettings) -> Result<Self, FormError> {
        let frequencies = catalog::frequency_registry(settings)?;
        let ends = catalog::end_registry(settings)?;

        let root = surface.root();
        let region = surface.create(root, ControlSpec::region().with_label("recurrence"))?;
        let frequency_area = surface.create(region, ControlSpec::region())?;
        let end_area = surface.create(region, ControlSpec::region())?;

        let frequency =
            Switchboard::mount(&mut surface, frequency_area, frequencies, settings.frequency)?;
        let end = Switchboard::mount(&mut surface, end_area, ends, settings.end)?;
        let subscription = surface.subscribe(region, EventKind::Change)?;

        tracing::info!(
            "Recurrence form ready (frequency: {}, end: {})",
            settings.frequency,
            settings.end
        );
        Ok(Self {
            surface,
            region,
            subscription,
            frequency,
            end,
        })
    }

    /// Delivers `event` to every live subscription in bubbling order.
    ///
    /// Subscriptions released by an earlier handler of the same event are
    /// skipped. Returns the freshly collected descriptor if the event was a
    /// change that bubbled out of the form.
    ///
    /// # Errors
    ///
    /// Returns an error if a handler's surface write fails.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<RecurrenceDescriptor>, FormError> {
        let mut descriptor = None;

        for subscription in self.surface.listeners(&event) {
            if !self.surface.is_subscribed(subscription) {
                continue;
            }
            if subscription == self.subscription {
                descriptor = Some(self.collect());
                continue;
            }
            if !self.frequency.handle(&mut self.surface, subscription, &event)? {
                self.end.handle(&mut self.surface, subscription, &event)?;
            }
        }
        Ok(descriptor)
    }

    /// Aggregates the current form state.
    #[must_use]
    pub fn collect(&self) -> RecurrenceDescriptor {
        aggregate::collect(&self.surface, self.region)
    }

    /// Types `value` into a control, as a user would.
    ///
    /// Fires an input event, then a change event. Disabled controls ignore
    /// the interaction and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is unknown or rejects the value.
    pub fn set_value(
        &mut self,
        control: ControlId,
        value: &str,
    ) -> Result<Option<RecurrenceDescriptor>, FormError> {
        if !self.is_interactive(control)? {
            return Ok(None);
        }

        self.surface.set_value(control, value)?;
        self.dispatch(Event::input(control))?;
        self.dispatch(Event::change(control))
    }

    /// Checks or unchecks a checkbox, as a user would.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is unknown or not checkable.
    pub fn set_checked(
        &mut self,
        control: ControlId,
        checked: bool,
    ) -> Result<Option<RecurrenceDescriptor>, FormError> {
        if !self.is_interactive(control)? {
            return Ok(None);
        }

        self.surface.set_checked(control, checked)?;
        self.dispatch(Event::change(control))
    }

    /// Clicks a case control, as a user would.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is unknown or not a case control.
    pub fn choose_case(
        &mut self,
        case: ControlId,
    ) -> Result<Option<RecurrenceDescriptor>, FormError> {
        self.set_checked(case, true)
    }

    /// Picks a frequency in the frequency selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition fails.
    pub fn select_frequency(
        &mut self,
        frequency: Frequency,
    ) -> Result<Option<RecurrenceDescriptor>, FormError> {
        self.set_value(self.frequency.selector(), frequency.value())
    }

    /// Picks an end condition in the end selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition fails.
    pub fn select_end(
        &mut self,
        end: EndCondition,
    ) -> Result<Option<RecurrenceDescriptor>, FormError> {
        self.set_value(self.end.selector(), end.value())
    }

    fn is_interactive(&self, control: ControlId) -> Result<bool, FormError> {
        let state = self.surface.require(control)?;
        if !state.enabled {
            tracing::warn!("Ignoring interaction with disabled control {control}");
        }
        Ok(state.enabled)
    }

    /// First enabled control carrying `name`.
    #[must_use]
    pub fn control_named(&self, name: &str) -> Option<ControlId> {
        self.controls_named(name).into_iter().find(|&id| {
            self.surface
                .control(id)
                .is_some_and(|c| c.enabled && !c.kind.is_checkable())
        })
    }

    /// Every control carrying `name`, enabled or not, in document order.
    #[must_use]
    pub fn controls_named(&self, name: &str) -> Vec<ControlId> {
        self.surface
            .descendants(self.region)
            .into_iter()
            .filter(|&id| self.surface.control(id).is_some_and(|c| c.is_named(name)))
            .collect()
    }

    /// The checkbox carrying `name` and `value`.
    #[must_use]
    pub fn checkbox(&self, name: &str, value: &str) -> Option<ControlId> {
        self.controls_named(name).into_iter().find(|&id| {
            self.surface
                .control(id)
                .is_some_and(|c| c.kind == ControlKind::Checkbox && c.value == value)
        })
    }

    /// Every rendered case control in document order.
    #[must_use]
    pub fn case_controls(&self) -> Vec<ControlId> {
        self.surface
            .descendants(self.region)
            .into_iter()
            .filter(|&id| {
                self.surface
                    .control(id)
                    .is_some_and(|c| c.kind == ControlKind::Case)
            })
            .collect()
    }

    /// The frequency currently entered.
    #[must_use]
    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency.current()
    }

    /// The end condition currently entered.
    #[must_use]
    pub fn end(&self) -> Option<EndCondition> {
        self.end.current()
    }

    /// The form region holding every control of the form.
    #[must_use]
    pub const fn region(&self) -> ControlId {
        self.region
    }

    /// Read access to the surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Releases every subscription and removes the form, handing the surface back.
    ///
    /// # Errors
    ///
    /// Returns an error if a control was already removed by someone else.
    pub fn dispose(mut self) -> Result<S, FormError> {
        self.surface.unsubscribe(self.subscription);
        self.frequency.dispose(&mut self.surface)?;
        self.end.dispose(&mut self.surface)?;
        self.surface.remove(self.region)?;
        Ok(self.surface)
    }
}
