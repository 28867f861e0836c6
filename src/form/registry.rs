//! Field registry: the option → field set dispatch table.

use std::collections::HashMap;

use super::{FieldSet, FormError, PrimaryOption};

/// Immutable mapping from every option of `O` to its field set.
///
/// Built once before any rendering through [`FieldRegistry::builder`];
/// [`RegistryBuilder::build`] guarantees every enumerated option has a
/// validated field set, so lookups on a built registry cannot miss.
///
/// # Examples
///
/// ```
/// use rrule_form::form::{EndCondition, FieldRegistry, FieldSet, PrimaryOption};
///
/// let registry = EndCondition::all()
///     .iter()
///     .fold(FieldRegistry::<EndCondition>::builder(), |b, &end| {
///         b.register(end, FieldSet::new(end.to_string()))
///     })
///     .build()
///     .unwrap();
///
/// assert!(registry.field_set_for(EndCondition::Never).unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FieldRegistry<O: PrimaryOption> {
    sets: HashMap<O, FieldSet>,
}

impl<O: PrimaryOption> FieldRegistry<O> {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder<O> {
        RegistryBuilder::default()
    }

    /// Returns the field set registered for `option`.
    ///
    /// Pure lookup: the same option always yields the same field set.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownOption`] if the option is not registered.
    pub fn field_set_for(&self, option: O) -> Result<&FieldSet, FormError> {
        self.sets.get(&option).ok_or_else(|| FormError::UnknownOption {
            selector: O::SELECTOR,
            option: option.to_string(),
        })
    }

    /// Returns the number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Collects registrations for a [`FieldRegistry`].
///
/// Registration problems are recorded and reported by [`build`](Self::build)
/// so the builder chains without intermediate `Result`s.
#[derive(Debug)]
pub struct RegistryBuilder<O: PrimaryOption> {
    sets: HashMap<O, FieldSet>,
    duplicate: Option<O>,
}

impl<O: PrimaryOption> Default for RegistryBuilder<O> {
    fn default() -> Self {
        Self {
            sets: HashMap::new(),
            duplicate: None,
        }
    }
}

impl<O: PrimaryOption> RegistryBuilder<O> {
    /// Registers the field set for `option`.
    #[must_use]
    pub fn register(mut self, option: O, set: FieldSet) -> Self {
        if self.sets.insert(option, set).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(option);
        }
        self
    }

    /// Validates the registrations and freezes them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An option was registered twice ([`FormError::DuplicateOption`])
    /// - An enumerated option has no field set ([`FormError::MissingFieldSet`])
    /// - A field set is malformed ([`FormError::MalformedFieldSet`])
    pub fn build(self) -> Result<FieldRegistry<O>, FormError> {
        if let Some(option) = self.duplicate {
            return Err(FormError::DuplicateOption {
                selector: O::SELECTOR,
                option: option.to_string(),
            });
        }

        if let Some(missing) = O::all().iter().find(|o| !self.sets.contains_key(o)) {
            return Err(FormError::MissingFieldSet {
                selector: O::SELECTOR,
                option: missing.to_string(),
            });
        }

        // Validate in selector order so the first reported error is stable.
        for option in O::all() {
            self.sets[option].validate()?;
        }

        tracing::debug!("Registered {} field sets for {}", self.sets.len(), O::SELECTOR);
        Ok(FieldRegistry { sets: self.sets })
    }
}
