//! Core control types shared by every surface implementation.

use std::fmt;

/// Opaque identifier of a control on a surface.
///
/// Identifiers are never reused by [`HeadlessSurface`](super::HeadlessSurface),
/// so a stale id of a removed control cannot alias a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One selectable entry of a select control or checkbox group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The value submitted when this choice is selected.
    pub value: String,
    /// Human-readable label.
    pub label: String,
}

impl Choice {
    /// Creates a choice from a value and its label.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The kind of an interactive or structural control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Plain container grouping other controls.
    Region,
    /// Container holding exactly one exclusion block.
    Block,
    /// Static text; never carries data.
    Label,
    /// Single value chosen among fixed choices.
    Select {
        /// Available choices, in display order.
        choices: Vec<Choice>,
    },
    /// Free numeric text input with a lower bound.
    Number {
        /// Smallest accepted value.
        min: i64,
    },
    /// Free text input.
    Text,
    /// Fixed value contributed only while checked.
    Checkbox,
    /// Radio-style selector gating one exclusion block.
    Case,
}

impl ControlKind {
    /// Returns true if the control can hold other controls.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Region | Self::Block)
    }

    /// Returns true if the control has a checked flag.
    #[must_use]
    pub const fn is_checkable(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Case)
    }

    /// Returns true if the user can type or pick a value directly.
    #[must_use]
    pub const fn is_value_bearing(&self) -> bool {
        matches!(self, Self::Select { .. } | Self::Number { .. } | Self::Text)
    }
}

/// Blueprint for creating a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSpec {
    /// Kind of control to create.
    pub kind: ControlKind,
    /// Name under which the control's value is aggregated.
    pub name: Option<String>,
    /// Initial value.
    pub value: String,
    /// Display label or caption.
    pub label: Option<String>,
    /// Initial checked flag for checkable controls.
    pub checked: bool,
}

impl ControlSpec {
    fn of(kind: ControlKind) -> Self {
        Self {
            kind,
            name: None,
            value: String::new(),
            label: None,
            checked: false,
        }
    }

    /// A plain container.
    #[must_use]
    pub fn region() -> Self {
        Self::of(ControlKind::Region)
    }

    /// A block container.
    #[must_use]
    pub fn block() -> Self {
        Self::of(ControlKind::Block)
    }

    /// A static text label.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::of(ControlKind::Label).with_label(text)
    }

    /// A select control with the given initial value.
    #[must_use]
    pub fn select(choices: Vec<Choice>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::of(ControlKind::Select { choices })
        }
    }

    /// A numeric input with a lower bound.
    #[must_use]
    pub fn number(min: i64, value: i64) -> Self {
        Self {
            value: value.to_string(),
            ..Self::of(ControlKind::Number { min })
        }
    }

    /// A free text input.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::of(ControlKind::Text)
        }
    }

    /// A checkbox contributing `value` while checked.
    #[must_use]
    pub fn checkbox(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::of(ControlKind::Checkbox)
        }
    }

    /// A case control gating a block.
    #[must_use]
    pub fn case(label: impl Into<String>) -> Self {
        Self::of(ControlKind::Case).with_label(label)
    }

    /// Sets the aggregation name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the initial checked flag.
    #[must_use]
    pub const fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Live state of a control on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Identifier of this control.
    pub id: ControlId,
    /// Containing control, `None` only for the root.
    pub parent: Option<ControlId>,
    /// Kind of control.
    pub kind: ControlKind,
    /// Aggregation name.
    pub name: Option<String>,
    /// Current value.
    pub value: String,
    /// Display label or caption.
    pub label: Option<String>,
    /// Whether the control accepts interaction and contributes data.
    pub enabled: bool,
    /// Checked flag (meaningful for checkable controls only).
    pub checked: bool,
}

impl Control {
    /// Materializes a spec under `parent`. New controls start enabled.
    #[must_use]
    pub fn from_spec(id: ControlId, parent: Option<ControlId>, spec: ControlSpec) -> Self {
        Self {
            id,
            parent,
            kind: spec.kind,
            name: spec.name,
            value: spec.value,
            label: spec.label,
            enabled: true,
            checked: spec.checked,
        }
    }

    /// Returns true if the control carries `name`.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Returns the choices of a select control.
    #[must_use]
    pub fn choices(&self) -> Option<&[Choice]> {
        match &self.kind {
            ControlKind::Select { choices } => Some(choices),
            _ => None,
        }
    }
}
