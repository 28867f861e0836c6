//! Live field set instances.
//!
//! Mounting a [`FieldSet`] renders its controls into a fresh region, guards
//! its numeric inputs and attaches an [`ExclusionController`]. Every
//! subscription taken on the way is owned by the instance and released by
//! [`FieldSetInstance::dispose`] before the region is removed.

use crate::surface::{
    Choice, ControlId, ControlSpec, ControlSurface, Event, EventKind, SubscriptionId,
};

use super::{
    ExclusionBlock, ExclusionController, FieldDescriptor, FieldItem, FieldSet, FormError,
    ValueDomain,
};

/// Keeps a numeric input canonical, resetting it to its default when invalid.
#[derive(Debug)]
struct NumericGuard {
    control: ControlId,
    min: i64,
    fallback: i64,
    subscription: SubscriptionId,
}

impl NumericGuard {
    /// Rewrites the control to its canonical number, or to the fallback when
    /// it holds no valid one. The user never sees a validation error.
    fn correct<S: ControlSurface + ?Sized>(&self, surface: &mut S) -> Result<(), FormError> {
        let raw = surface.require(self.control)?.value.clone();
        let corrected = match raw.trim().parse::<i64>() {
            Ok(n) if n >= self.min => n.to_string(),
            _ => self.fallback.to_string(),
        };

        if corrected != raw {
            tracing::debug!(
                "Correcting numeric control {} from '{raw}' to {corrected}",
                self.control
            );
            surface.set_value(self.control, &corrected)?;
        }
        Ok(())
    }
}

/// A field set bound to live controls.
#[derive(Debug)]
pub struct FieldSetInstance {
    name: String,
    region: ControlId,
    guards: Vec<NumericGuard>,
    exclusion: Option<ExclusionController>,
}

impl FieldSetInstance {
    /// Renders `set` into a new region appended to `parent` and attaches its
    /// behavior. The first block, if any, is active on return.
    ///
    /// On failure everything created so far is released and removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects an operation or the rendered
    /// blocks cannot be resolved ([`FormError::MalformedFieldSet`]).
    pub fn mount<S: ControlSurface + ?Sized>(
        set: &FieldSet,
        surface: &mut S,
        parent: ControlId,
    ) -> Result<Self, FormError> {
        let region = surface.create(parent, ControlSpec::region().with_label(set.name()))?;

        let mut instance = Self {
            name: set.name().to_string(),
            region,
            guards: Vec::new(),
            exclusion: None,
        };

        match instance.populate(set, surface) {
            Ok(()) => Ok(instance),
            Err(e) => {
                if let Err(cleanup) = instance.dispose(surface) {
                    tracing::warn!("Cleanup of field set '{}' failed: {cleanup}", set.name());
                }
                Err(e)
            }
        }
    }

    fn populate<S: ControlSurface + ?Sized>(
        &mut self,
        set: &FieldSet,
        surface: &mut S,
    ) -> Result<(), FormError> {
        for item in set.items() {
            match item {
                FieldItem::Field(field) => self.render_field(surface, self.region, field)?,
                FieldItem::Block(block) => self.render_block(surface, block)?,
            }
        }

        self.exclusion = Some(ExclusionController::attach(
            surface,
            self.region,
            &self.name,
        )?);
        Ok(())
    }

    fn render_block<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        block: &ExclusionBlock,
    ) -> Result<(), FormError> {
        let container = surface.create(self.region, ControlSpec::block())?;
        surface.create(container, ControlSpec::case(&block.label))?;

        for field in &block.fields {
            self.render_field(surface, container, field)?;
        }
        Ok(())
    }

    fn render_field<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        parent: ControlId,
        field: &FieldDescriptor,
    ) -> Result<(), FormError> {
        if let Some(prefix) = &field.prefix {
            surface.create(parent, ControlSpec::label(prefix))?;
        }

        match &field.domain {
            ValueDomain::Numeric { min, default } => {
                let spec = ControlSpec::number(*min, *default).with_name(&field.name);
                let control = surface.create(parent, spec)?;
                let subscription = surface.subscribe(control, EventKind::Input)?;
                self.guards.push(NumericGuard {
                    control,
                    min: *min,
                    fallback: *default,
                    subscription,
                });
            }
            ValueDomain::Choice { choices, .. } => {
                let value = field.default_value().unwrap_or_default();
                surface.create(
                    parent,
                    ControlSpec::select(choices.clone(), value).with_name(&field.name),
                )?;
            }
            ValueDomain::MultiSelect { choices } => {
                render_checkboxes(surface, parent, &field.name, choices)?;
            }
            ValueDomain::Text { default } => {
                surface.create(parent, ControlSpec::text(default).with_name(&field.name))?;
            }
        }

        if let Some(suffix) = &field.suffix {
            surface.create(parent, ControlSpec::label(suffix))?;
        }
        Ok(())
    }

    /// Handles an event delivered to `subscription`.
    ///
    /// Returns true if the subscription belongs to this instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects a write.
    pub fn handle<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        subscription: SubscriptionId,
        event: &Event,
    ) -> Result<bool, FormError> {
        if let Some(guard) = self.guards.iter().find(|g| g.subscription == subscription) {
            guard.correct(surface)?;
            return Ok(true);
        }

        match self.exclusion.as_mut() {
            Some(exclusion) => exclusion.handle(surface, subscription, event),
            None => Ok(false),
        }
    }

    /// Releases every subscription, then removes the instance's controls.
    ///
    /// # Errors
    ///
    /// Returns an error if the region was already removed by someone else.
    pub fn dispose<S: ControlSurface + ?Sized>(self, surface: &mut S) -> Result<(), FormError> {
        for guard in &self.guards {
            surface.unsubscribe(guard.subscription);
        }
        if let Some(exclusion) = self.exclusion {
            exclusion.dispose(surface);
        }

        surface.remove(self.region)?;
        tracing::debug!("Disposed field set instance '{}'", self.name);
        Ok(())
    }

    /// Name of the mounted field set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The region holding every control of this instance.
    #[must_use]
    pub const fn region(&self) -> ControlId {
        self.region
    }

    /// Index of the active block, `None` without blocks.
    #[must_use]
    pub fn active_block(&self) -> Option<usize> {
        self.exclusion.as_ref().and_then(ExclusionController::active_block)
    }

    /// Case controls in declaration order.
    #[must_use]
    pub fn case_controls(&self) -> &[ControlId] {
        self.exclusion
            .as_ref()
            .map_or(&[][..], ExclusionController::case_controls)
    }

    /// Number of live subscriptions held by this instance.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.guards.len()
            + usize::from(
                self.exclusion
                    .as_ref()
                    .is_some_and(|e| e.subscription().is_some()),
            )
    }
}

fn render_checkboxes<S: ControlSurface + ?Sized>(
    surface: &mut S,
    parent: ControlId,
    name: &str,
    choices: &[Choice],
) -> Result<(), FormError> {
    let group = surface.create(parent, ControlSpec::region().with_label(name))?;
    for choice in choices {
        surface.create(
            group,
            ControlSpec::checkbox(&choice.value)
                .with_name(name)
                .with_label(&choice.label),
        )?;
    }
    Ok(())
}
