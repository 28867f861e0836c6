//! Primary options: the top-level selections that decide which field set is shown.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A closed enumeration driving a [`Switchboard`](super::Switchboard).
///
/// Exactly one option is selected at a time; selecting another one is the only
/// way to change which field set is visible.
pub trait PrimaryOption: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// Name under which the selector's value is aggregated, if it is aggregated at all.
    const FIELD: Option<&'static str>;

    /// Caption of the selector, used in logs and diagnostics.
    const SELECTOR: &'static str;

    /// Every option, in selector order.
    fn all() -> &'static [Self];

    /// Value written to the selector control.
    fn value(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Resolves a selector value back to its option.
    #[must_use]
    fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.value() == value)
    }
}

/// Recurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Once every N years.
    Yearly,
    /// Once every N months.
    Monthly,
    /// Once every N weeks.
    Weekly,
    /// Once every N days.
    Daily,
    /// Once every N hours.
    Hourly,
}

impl PrimaryOption for Frequency {
    const FIELD: Option<&'static str> = Some(super::key::FREQ);
    const SELECTOR: &'static str = "frequency";

    fn all() -> &'static [Self] {
        &[
            Self::Yearly,
            Self::Monthly,
            Self::Weekly,
            Self::Daily,
            Self::Hourly,
        ]
    }

    fn value(self) -> &'static str {
        match self {
            Self::Yearly => "YEARLY",
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Daily => "DAILY",
            Self::Hourly => "HOURLY",
        }
    }

    fn label(self) -> &'static str {
        self.value()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yearly" | "year" | "y" => Ok(Self::Yearly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "daily" | "day" | "d" => Ok(Self::Daily),
            "hourly" | "hour" | "h" => Ok(Self::Hourly),
            _ => Err(s.to_string()),
        }
    }
}

/// How a recurrence ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndCondition {
    /// Repeats forever.
    Never,
    /// Stops after a number of occurrences.
    After,
    /// Stops on a given date.
    OnDate,
}

impl PrimaryOption for EndCondition {
    const FIELD: Option<&'static str> = None;
    const SELECTOR: &'static str = "end";

    fn all() -> &'static [Self] {
        &[Self::Never, Self::After, Self::OnDate]
    }

    fn value(self) -> &'static str {
        match self {
            Self::Never => "NEVER",
            Self::After => "AFTER",
            Self::OnDate => "ON-DATE",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::After => "After",
            Self::OnDate => "On date",
        }
    }
}

impl fmt::Display for EndCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for EndCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "never" | "none" => Ok(Self::Never),
            "after" | "count" => Ok(Self::After),
            "on-date" | "on date" | "ondate" | "until" => Ok(Self::OnDate),
            _ => Err(s.to_string()),
        }
    }
}
