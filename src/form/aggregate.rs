//! Form state aggregation.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::surface::{ControlId, ControlKind, ControlSurface};

/// Aggregated recurrence specification: field names mapped to one or many values.
///
/// Names may repeat (one entry per checked day-of-week box, for example), so
/// entries are kept as an ordered multimap rather than overwritten.
///
/// # Serialization
///
/// Serializes as a map: a name with one value maps to that string, a name
/// with several values maps to an array of them, in document order.
///
/// ```
/// use rrule_form::form::RecurrenceDescriptor;
///
/// let mut descriptor = RecurrenceDescriptor::new();
/// descriptor.push("FREQ", "WEEKLY");
/// descriptor.push("BYDAY", "MO");
/// descriptor.push("BYDAY", "WE");
///
/// assert_eq!(
///     serde_json::to_string(&descriptor).unwrap(),
///     r#"{"FREQ":"WEEKLY","BYDAY":["MO","WE"]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurrenceDescriptor {
    entries: Vec<(String, String)>,
}

impl RecurrenceDescriptor {
    /// Creates an empty descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends one `(name, value)` entry.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value under `name`, in document order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if at least one entry carries `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Distinct names in order of first appearance.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (name, _) in &self.entries {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    /// Iterates over all entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of entries (not distinct names).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for RecurrenceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.names().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let values = self.get_all(name);
            if let [single] = values.as_slice() {
                write!(f, "{name}: {single}")?;
            } else {
                write!(f, "{name}: [{}]", values.join(", "))?;
            }
        }
        write!(f, "}}")
    }
}

impl Serialize for RecurrenceDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut map = serializer.serialize_map(Some(names.len()))?;
        for name in names {
            let values = self.get_all(name);
            if let [single] = values.as_slice() {
                map.serialize_entry(name, single)?;
            } else {
                map.serialize_entry(name, &values)?;
            }
        }
        map.end()
    }
}

/// Reads the current state of every control under `scope`.
///
/// Skips unnamed controls, disabled controls (whatever stale value they hold)
/// and structural controls. Checkboxes and case controls contribute their
/// value only while checked; everything else contributes its current value.
/// Reading has no side effects, so repeated calls without interaction yield
/// identical descriptors.
#[must_use]
pub fn collect<S: ControlSurface + ?Sized>(surface: &S, scope: ControlId) -> RecurrenceDescriptor {
    let mut descriptor = RecurrenceDescriptor::new();

    for id in surface.descendants(scope) {
        let Some(control) = surface.control(id) else {
            continue;
        };
        let Some(name) = control.name.as_deref() else {
            continue;
        };
        if !control.enabled {
            continue;
        }

        let contributes = match control.kind {
            ControlKind::Region | ControlKind::Block | ControlKind::Label => false,
            ControlKind::Checkbox | ControlKind::Case => control.checked,
            ControlKind::Select { .. } | ControlKind::Number { .. } | ControlKind::Text => true,
        };
        if contributes {
            descriptor.push(name, control.value.as_str());
        }
    }

    tracing::debug!("Collected {descriptor}");
    descriptor
}
