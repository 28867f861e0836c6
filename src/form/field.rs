//! Field descriptors and field sets.
//!
//! A [`FieldSet`] is an immutable template: the ordered fields and exclusion
//! blocks shown for one primary option. It is instantiated onto a surface each
//! time its option becomes active.

use crate::surface::Choice;

use super::FormError;

/// The set of values a field accepts, with its initial value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueDomain {
    /// Integer input with a lower bound.
    Numeric {
        /// Smallest accepted value.
        min: i64,
        /// Initial value, also used when the input is cleared or invalid.
        default: i64,
    },
    /// One value among fixed choices.
    Choice {
        /// Available choices.
        choices: Vec<Choice>,
        /// Index of the initially selected choice.
        default: usize,
    },
    /// Any subset of fixed choices, aggregated as one entry per selected value.
    MultiSelect {
        /// Available choices.
        choices: Vec<Choice>,
    },
    /// Free text.
    Text {
        /// Initial value.
        default: String,
    },
}

/// One named field of a field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Key under which the field's value(s) are aggregated.
    pub name: String,
    /// Accepted values.
    pub domain: ValueDomain,
    /// Caption shown before the field.
    pub prefix: Option<String>,
    /// Caption shown after the field.
    pub suffix: Option<String>,
}

impl FieldDescriptor {
    fn new(name: impl Into<String>, domain: ValueDomain) -> Self {
        Self {
            name: name.into(),
            domain,
            prefix: None,
            suffix: None,
        }
    }

    /// A numeric field.
    #[must_use]
    pub fn numeric(name: impl Into<String>, min: i64, default: i64) -> Self {
        Self::new(name, ValueDomain::Numeric { min, default })
    }

    /// A single-choice field defaulting to its first choice.
    #[must_use]
    pub fn choice(name: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self::new(
            name,
            ValueDomain::Choice {
                choices,
                default: 0,
            },
        )
    }

    /// A multi-select field with nothing selected.
    #[must_use]
    pub fn multi_select(name: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self::new(name, ValueDomain::MultiSelect { choices })
    }

    /// A free text field.
    #[must_use]
    pub fn text(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(
            name,
            ValueDomain::Text {
                default: default.into(),
            },
        )
    }

    /// Sets the caption shown before the field.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the caption shown after the field.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Returns the initial value, or `None` for multi-select fields.
    #[must_use]
    pub fn default_value(&self) -> Option<String> {
        match &self.domain {
            ValueDomain::Numeric { default, .. } => Some(default.to_string()),
            ValueDomain::Choice { choices, default } => {
                choices.get(*default).map(|c| c.value.clone())
            }
            ValueDomain::MultiSelect { .. } => None,
            ValueDomain::Text { default } => Some(default.clone()),
        }
    }

    fn validate(&self, field_set: &str) -> Result<(), FormError> {
        let malformed = |reason: String| FormError::malformed(field_set, reason);

        if self.name.trim().is_empty() {
            return Err(malformed("field with an empty name".to_string()));
        }

        match &self.domain {
            ValueDomain::Numeric { min, default } if default < min => Err(malformed(format!(
                "field {}: default {default} is below the minimum {min}",
                self.name
            ))),
            ValueDomain::Choice { choices, .. } | ValueDomain::MultiSelect { choices }
                if choices.is_empty() =>
            {
                Err(malformed(format!("field {} has no choices", self.name)))
            }
            ValueDomain::Choice { choices, default } if *default >= choices.len() => {
                Err(malformed(format!(
                    "field {}: default choice {default} is out of range",
                    self.name
                )))
            }
            _ => Ok(()),
        }
    }
}

/// A mutually exclusive group of fields gated by one case control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionBlock {
    /// Label of the block's case control.
    pub label: String,
    /// Fields enabled only while this block is active.
    pub fields: Vec<FieldDescriptor>,
}

impl ExclusionBlock {
    /// Creates a block with the given case label and fields.
    #[must_use]
    pub fn new(label: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            label: label.into(),
            fields,
        }
    }
}

/// One entry of a field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldItem {
    /// A field that is always enabled.
    Field(FieldDescriptor),
    /// A mutually exclusive block.
    Block(ExclusionBlock),
}

/// The ordered fields and blocks shown for one primary option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    name: String,
    items: Vec<FieldItem>,
}

impl FieldSet {
    /// Creates an empty field set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Appends an always-enabled field.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.items.push(FieldItem::Field(field));
        self
    }

    /// Appends a mutually exclusive block.
    #[must_use]
    pub fn block(mut self, block: ExclusionBlock) -> Self {
        self.items.push(FieldItem::Block(block));
        self
    }

    /// Name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entries in declaration order.
    #[must_use]
    pub fn items(&self) -> &[FieldItem] {
        &self.items
    }

    /// Returns true if the set declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the blocks in declaration order.
    pub fn blocks(&self) -> impl Iterator<Item = &ExclusionBlock> {
        self.items.iter().filter_map(|item| match item {
            FieldItem::Block(block) => Some(block),
            FieldItem::Field(_) => None,
        })
    }

    /// Returns every field, block members included, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.items.iter().flat_map(|item| match item {
            FieldItem::Field(field) => std::slice::from_ref(field).iter(),
            FieldItem::Block(block) => block.fields.iter(),
        })
    }

    /// Checks the set's shape.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedFieldSet`] if a block has no label or no
    /// fields, or a field has an empty name or an impossible default.
    pub fn validate(&self) -> Result<(), FormError> {
        for block in self.blocks() {
            if block.label.trim().is_empty() {
                return Err(FormError::malformed(&self.name, "block without a case label"));
            }
            if block.fields.is_empty() {
                return Err(FormError::malformed(
                    &self.name,
                    format!("block '{}' has no fields", block.label),
                ));
            }
        }

        self.fields().try_for_each(|field| field.validate(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months() -> Vec<Choice> {
        vec![Choice::new("1", "Jan"), Choice::new("2", "Feb")]
    }

    #[test]
    fn choice_defaults_to_first() {
        let field = FieldDescriptor::choice("BYMONTH", months());
        assert_eq!(field.default_value().as_deref(), Some("1"));
    }

    #[test]
    fn multi_select_has_no_default() {
        let field = FieldDescriptor::multi_select("BYDAY", months());
        assert_eq!(field.default_value(), None);
    }

    #[test]
    fn fields_include_block_members_in_order() {
        let set = FieldSet::new("S")
            .field(FieldDescriptor::numeric("INTERVAL", 1, 1))
            .block(ExclusionBlock::new(
                "on",
                vec![FieldDescriptor::choice("BYMONTH", months())],
            ));

        let names: Vec<&str> = set.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["INTERVAL", "BYMONTH"]);
        assert_eq!(set.blocks().count(), 1);
    }

    #[test]
    fn empty_set_is_valid() {
        let set = FieldSet::new("NEVER");
        assert!(set.is_empty());
        assert!(set.validate().is_ok());
    }

    #[test]
    fn numeric_default_below_min_is_malformed() {
        let set = FieldSet::new("S").field(FieldDescriptor::numeric("INTERVAL", 1, 0));
        let err = set.validate().unwrap_err();
        assert!(err.to_string().contains("INTERVAL"));
        assert!(err.to_string().contains('S'));
    }

    #[test]
    fn choice_without_choices_is_malformed() {
        let set = FieldSet::new("S").field(FieldDescriptor::choice("BYMONTH", vec![]));
        assert!(matches!(
            set.validate(),
            Err(FormError::MalformedFieldSet { .. })
        ));
    }

    #[test]
    fn empty_block_is_malformed() {
        let set = FieldSet::new("S").block(ExclusionBlock::new("on", vec![]));
        assert!(set.validate().is_err());
    }

    #[test]
    fn unlabeled_block_is_malformed() {
        let set = FieldSet::new("S").block(ExclusionBlock::new(
            " ",
            vec![FieldDescriptor::text("UNTIL", "")],
        ));
        assert!(set.validate().is_err());
    }
}
