//! Seeded value domains and field sets for recurrence forms.
//!
//! Fixed data only: day-of-week codes and their composite aliases, month
//! numbers, month-day numbers, set positions, and the field set of every
//! frequency and end condition.

use crate::surface::Choice;

use super::key;
use super::{
    EndCondition, ExclusionBlock, FieldDescriptor, FieldRegistry, FieldSet, FormError,
    FormSettings, Frequency, PrimaryOption,
};

/// Day-of-week codes with their names, Sunday first.
pub const DAYS: [(&str, &str); 7] = [
    ("SU", "Sunday"),
    ("MO", "Monday"),
    ("TU", "Tuesday"),
    ("WE", "Wednesday"),
    ("TH", "Thursday"),
    ("FR", "Friday"),
    ("SA", "Saturday"),
];

/// Composite day aliases offered after the single days.
pub const DAY_ALIASES: [(&str, &str); 3] = [
    ("MO,TU,WE,TH,FR,SU,SA", "Day"),
    ("MO,TU,WE,TH,FR", "Weekday"),
    ("SU,SA", "Weekend day"),
];

/// Month numbers with their abbreviations.
pub const MONTHS: [(u8, &str); 12] = [
    (1, "Jan"),
    (2, "Feb"),
    (3, "Mar"),
    (4, "Apr"),
    (5, "May"),
    (6, "Jun"),
    (7, "Jul"),
    (8, "Aug"),
    (9, "Sep"),
    (10, "Oct"),
    (11, "Nov"),
    (12, "Dec"),
];

/// Set positions with their ordinal labels.
pub const SET_POSITIONS: [(i8, &str); 5] = [
    (1, "First"),
    (2, "Second"),
    (3, "Third"),
    (4, "Fourth"),
    (-1, "Last"),
];

/// Highest day number of a month.
pub const MAX_MONTH_DAY: u8 = 31;

/// Single days as checkbox choices (code as label).
#[must_use]
pub fn weekday_choices() -> Vec<Choice> {
    DAYS.iter().map(|(code, _)| Choice::new(*code, *code)).collect()
}

/// Single days followed by the composite aliases.
#[must_use]
pub fn by_day_choices() -> Vec<Choice> {
    DAYS.iter()
        .chain(DAY_ALIASES.iter())
        .map(|(value, label)| Choice::new(*value, *label))
        .collect()
}

/// Months 1 to 12.
#[must_use]
pub fn month_choices() -> Vec<Choice> {
    MONTHS
        .iter()
        .map(|(n, label)| Choice::new(n.to_string(), *label))
        .collect()
}

/// Month days 1 to 31.
#[must_use]
pub fn month_day_choices() -> Vec<Choice> {
    (1..=MAX_MONTH_DAY)
        .map(|n| Choice::new(n.to_string(), n.to_string()))
        .collect()
}

/// Set positions First to Fourth, then Last.
#[must_use]
pub fn set_position_choices() -> Vec<Choice> {
    SET_POSITIONS
        .iter()
        .map(|(n, label)| Choice::new(n.to_string(), *label))
        .collect()
}

fn interval(settings: &FormSettings, unit: &str) -> FieldDescriptor {
    FieldDescriptor::numeric(key::INTERVAL, 1, i64::from(settings.interval))
        .with_prefix("every")
        .with_suffix(format!("{unit}(s)"))
}

fn by_set_pos() -> FieldDescriptor {
    FieldDescriptor::choice(key::BYSETPOS, set_position_choices())
}

fn by_day() -> FieldDescriptor {
    FieldDescriptor::choice(key::BYDAY, by_day_choices())
}

/// The field set shown for a frequency.
#[must_use]
pub fn frequency_field_set(frequency: Frequency, settings: &FormSettings) -> FieldSet {
    let set = FieldSet::new(frequency.to_string());

    match frequency {
        Frequency::Yearly => set
            .block(ExclusionBlock::new(
                "on day",
                vec![
                    FieldDescriptor::choice(key::BYMONTH, month_choices()),
                    FieldDescriptor::choice(key::BYMONTHDAY, month_day_choices()),
                ],
            ))
            .block(ExclusionBlock::new(
                "on the",
                vec![
                    by_set_pos(),
                    by_day(),
                    FieldDescriptor::choice(key::BYMONTH, month_choices()).with_prefix("of"),
                ],
            )),
        Frequency::Monthly => set
            .field(interval(settings, "month"))
            .block(ExclusionBlock::new(
                "on day",
                vec![FieldDescriptor::choice(key::BYMONTHDAY, month_day_choices())],
            ))
            .block(ExclusionBlock::new("on the", vec![by_set_pos(), by_day()])),
        Frequency::Weekly => set
            .field(interval(settings, "week"))
            .field(FieldDescriptor::multi_select(key::BYDAY, weekday_choices())),
        Frequency::Daily => set.field(interval(settings, "day")),
        Frequency::Hourly => set.field(interval(settings, "hour")),
    }
}

/// The field set shown for an end condition.
#[must_use]
pub fn end_field_set(end: EndCondition, settings: &FormSettings) -> FieldSet {
    let set = FieldSet::new(end.to_string());

    match end {
        EndCondition::Never => set,
        EndCondition::After => set.field(
            FieldDescriptor::numeric(key::COUNT, 1, i64::from(settings.count))
                .with_prefix("after")
                .with_suffix("occurrence(s)"),
        ),
        EndCondition::OnDate => set.field(FieldDescriptor::text(key::UNTIL, "")),
    }
}

/// Builds the registry of frequency field sets.
///
/// # Errors
///
/// Returns an error if a seeded field set is malformed for these settings.
pub fn frequency_registry(settings: &FormSettings) -> Result<FieldRegistry<Frequency>, FormError> {
    Frequency::all()
        .iter()
        .fold(FieldRegistry::<Frequency>::builder(), |builder, &freq| {
            builder.register(freq, frequency_field_set(freq, settings))
        })
        .build()
}

/// Builds the registry of end-condition field sets.
///
/// # Errors
///
/// Returns an error if a seeded field set is malformed for these settings.
pub fn end_registry(settings: &FormSettings) -> Result<FieldRegistry<EndCondition>, FormError> {
    EndCondition::all()
        .iter()
        .fold(FieldRegistry::<EndCondition>::builder(), |builder, &end| {
            builder.register(end, end_field_set(end, settings))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_day_lists_days_then_aliases() {
        let choices = by_day_choices();
        assert_eq!(choices.len(), 10);
        assert_eq!(choices[0], Choice::new("SU", "Sunday"));
        assert_eq!(choices[9], Choice::new("SU,SA", "Weekend day"));
        assert_eq!(choices[7].value, "MO,TU,WE,TH,FR,SU,SA");
    }

    #[test]
    fn month_days_run_from_one_to_thirty_one() {
        let choices = month_day_choices();
        assert_eq!(choices.len(), 31);
        assert_eq!(choices.first().unwrap().value, "1");
        assert_eq!(choices.last().unwrap().value, "31");
    }

    #[test]
    fn set_positions_end_with_last() {
        let values: Vec<String> = set_position_choices().into_iter().map(|c| c.value).collect();
        assert_eq!(values, ["1", "2", "3", "4", "-1"]);
    }

    #[test]
    fn yearly_has_no_interval_and_two_blocks() {
        let set = frequency_field_set(Frequency::Yearly, &FormSettings::default());
        assert_eq!(set.blocks().count(), 2);
        assert!(set.fields().all(|f| f.name != key::INTERVAL));
    }

    #[test]
    fn yearly_and_monthly_share_block_labels() {
        let settings = FormSettings::default();
        for frequency in [Frequency::Yearly, Frequency::Monthly] {
            let set = frequency_field_set(frequency, &settings);
            let labels: Vec<&str> = set.blocks().map(|b| b.label.as_str()).collect();
            assert_eq!(labels, ["on day", "on the"]);
        }
    }

    #[test]
    fn weekly_offers_day_checkboxes() {
        let set = frequency_field_set(Frequency::Weekly, &FormSettings::default());
        assert_eq!(set.blocks().count(), 0);
        let names: Vec<&str> = set.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, [key::INTERVAL, key::BYDAY]);
    }

    #[test]
    fn interval_default_follows_settings() {
        let settings = FormSettings {
            interval: 3,
            ..FormSettings::default()
        };
        let set = frequency_field_set(Frequency::Daily, &settings);
        let interval = set.fields().next().unwrap();
        assert_eq!(interval.default_value().as_deref(), Some("3"));
        assert_eq!(interval.suffix.as_deref(), Some("day(s)"));
    }

    #[test]
    fn never_is_explicitly_empty() {
        assert!(end_field_set(EndCondition::Never, &FormSettings::default()).is_empty());
    }

    #[test]
    fn seeded_registries_build() {
        let settings = FormSettings::default();
        assert!(frequency_registry(&settings).is_ok());
        assert!(end_registry(&settings).is_ok());
    }

    #[test]
    fn zero_interval_makes_registry_malformed() {
        let settings = FormSettings {
            interval: 0,
            ..FormSettings::default()
        };
        assert!(matches!(
            frequency_registry(&settings),
            Err(FormError::MalformedFieldSet { .. })
        ));
    }
}
