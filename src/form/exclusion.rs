//! Exclusion group controller.
//!
//! Keeps the single-active-block invariant inside one field set instance:
//! exactly one case control is checked, the named controls of its block are
//! enabled, and the named controls of every other block are disabled.
//! Controls outside any block are never touched and stay enabled.

use std::collections::HashMap;

use crate::surface::{ControlId, ControlKind, ControlSurface, Event, EventKind, SubscriptionId};

use super::FormError;

/// Block-toggle behavior attached to one field set instance.
///
/// Created by [`attach`](Self::attach), which also activates the first
/// block. Must be released with [`dispose`](Self::dispose) before the
/// instance's controls are removed.
#[derive(Debug)]
pub struct ExclusionController {
    scope: ControlId,
    /// Case controls in declaration order; the index is the block index.
    cases: Vec<ControlId>,
    /// Every named control in scope with its owning block, `None` when unscoped.
    membership: Vec<(ControlId, Option<usize>)>,
    active: Option<usize>,
    subscription: Option<SubscriptionId>,
}

impl ExclusionController {
    /// Discovers blocks, case controls and named controls under `scope`,
    /// subscribes to case changes and activates the first block.
    ///
    /// A scope without blocks is a no-op registration: no subscription is
    /// made and all its controls stay enabled.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedFieldSet`] (naming `field_set`) if a case
    /// control lies outside any block, or a block has zero or several case
    /// controls.
    pub fn attach<S: ControlSurface + ?Sized>(
        surface: &mut S,
        scope: ControlId,
        field_set: &str,
    ) -> Result<Self, FormError> {
        let (cases, membership) = discover(&*surface, scope, field_set)?;

        let mut controller = Self {
            scope,
            cases,
            membership,
            active: None,
            subscription: None,
        };

        if !controller.cases.is_empty() {
            let subscription = surface.subscribe(scope, EventKind::Change)?;
            controller.subscription = Some(subscription);
            if let Err(e) = controller.activate_default(surface) {
                surface.unsubscribe(subscription);
                return Err(e);
            }
        }

        tracing::debug!(
            "Attached exclusion controller to '{field_set}' ({} block(s))",
            controller.cases.len()
        );
        Ok(controller)
    }

    /// Activates the first-declared block. No-op without blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects a write.
    pub fn activate_default<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), FormError> {
        match self.cases.first() {
            Some(&first) => self.select(surface, first),
            None => Ok(()),
        }
    }

    /// Makes the block gated by `case` the active one.
    ///
    /// Checks `case`, unchecks every other case control, then enables exactly
    /// the named controls of that block plus the unscoped ones. Runs to
    /// completion without dispatching events, so no intermediate state is
    /// observable. Unknown case controls are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects a write.
    pub fn select<S: ControlSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        case: ControlId,
    ) -> Result<(), FormError> {
        let Some(index) = self.cases.iter().position(|&c| c == case) else {
            return Ok(());
        };

        for &other in &self.cases {
            surface.set_checked(other, other == case)?;
        }
        for &(control, block) in &self.membership {
            surface.set_enabled(control, block.is_none_or(|b| b == index))?;
        }

        self.active = Some(index);
        tracing::debug!("Activated block {index} of exclusion scope {}", self.scope);
        Ok(())
    }

    /// Handles an event delivered to `subscription`.
    ///
    /// Returns true if the subscription belongs to this controller.
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
        if self.subscription != Some(subscription) {
            return Ok(false);
        }
        if self.cases.contains(&event.target) {
            self.select(surface, event.target)?;
        }
        Ok(true)
    }

    /// Releases the subscription. The controls themselves are left in place.
    pub fn dispose<S: ControlSurface + ?Sized>(self, surface: &mut S) {
        if let Some(subscription) = self.subscription {
            surface.unsubscribe(subscription);
        }
    }

    /// Index of the active block, `None` when the scope has no blocks.
    #[must_use]
    pub const fn active_block(&self) -> Option<usize> {
        self.active
    }

    /// Number of blocks in scope.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.cases.len()
    }

    /// Case controls in declaration order.
    #[must_use]
    pub fn case_controls(&self) -> &[ControlId] {
        &self.cases
    }

    /// Owning block of a named control: `Some(None)` when unscoped,
    /// `None` when the control is not a named control of this scope.
    #[must_use]
    pub fn block_of(&self, control: ControlId) -> Option<Option<usize>> {
        self.membership
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, block)| *block)
    }

    /// The live subscription, if any.
    #[must_use]
    pub const fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }
}

type Membership = Vec<(ControlId, Option<usize>)>;

/// Builds the block membership map of `scope`.
fn discover<S: ControlSurface + ?Sized>(
    surface: &S,
    scope: ControlId,
    field_set: &str,
) -> Result<(Vec<ControlId>, Membership), FormError> {
    let descendants = surface.descendants(scope);

    let blocks: Vec<ControlId> = descendants
        .iter()
        .copied()
        .filter(|&id| surface.control(id).is_some_and(|c| c.kind == ControlKind::Block))
        .collect();

    // Pair every block with its single case control.
    let mut case_of_block: HashMap<ControlId, ControlId> = HashMap::new();
    for &id in &descendants {
        let Some(control) = surface.control(id) else {
            continue;
        };
        if control.kind != ControlKind::Case {
            continue;
        }
        let block = owning_block(surface, scope, id).ok_or_else(|| {
            FormError::malformed(field_set, format!("case control {id} is not inside a block"))
        })?;
        if case_of_block.insert(block, id).is_some() {
            return Err(FormError::malformed(
                field_set,
                format!("block {block} has more than one case control"),
            ));
        }
    }

    let mut cases = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let case = case_of_block.get(block).ok_or_else(|| {
            FormError::malformed(field_set, format!("block {block} has no case control"))
        })?;
        cases.push(*case);
    }

    let membership = descendants
        .iter()
        .copied()
        .filter(|&id| surface.control(id).is_some_and(|c| c.name.is_some()))
        .map(|id| {
            let block = owning_block(surface, scope, id)
                .and_then(|b| blocks.iter().position(|&candidate| candidate == b));
            (id, block)
        })
        .collect();

    Ok((cases, membership))
}

/// Nearest block container enclosing `id` without leaving `scope`.
fn owning_block<S: ControlSurface + ?Sized>(
    surface: &S,
    scope: ControlId,
    id: ControlId,
) -> Option<ControlId> {
    let mut cursor = surface.control(id).and_then(|c| c.parent);
    while let Some(current) = cursor {
        let control = surface.control(current)?;
        if control.kind == ControlKind::Block {
            return Some(current);
        }
        if current == scope {
            return None;
        }
        cursor = control.parent;
    }
    None
}
