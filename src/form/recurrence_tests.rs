//! End-to-end tests for the recurrence form on a headless surface.

use crate::surface::{ControlId, ControlSurface, HeadlessSurface, SurfaceError};

use super::{EndCondition, FormError, FormSettings, Frequency, RecurrenceForm};

// ============================================================================
// Test Fixtures
// ============================================================================

fn form() -> RecurrenceForm<HeadlessSurface> {
    RecurrenceForm::new(HeadlessSurface::new(), &FormSettings::default()).unwrap()
}

fn form_with(settings: FormSettings) -> RecurrenceForm<HeadlessSurface> {
    RecurrenceForm::new(HeadlessSurface::new(), &settings).unwrap()
}

fn value_of(form: &RecurrenceForm<HeadlessSurface>, id: ControlId) -> String {
    form.surface().control(id).unwrap().value.clone()
}

mod initial_state {
    use super::*;

    #[test]
    fn default_form_is_monthly_on_day_one() {
        let form = form();
        let descriptor = form.collect();

        assert_eq!(descriptor.names(), ["FREQ", "INTERVAL", "BYMONTHDAY"]);
        assert_eq!(descriptor.get("FREQ"), Some("MONTHLY"));
        assert_eq!(descriptor.get("INTERVAL"), Some("1"));
        assert_eq!(descriptor.get("BYMONTHDAY"), Some("1"));
        assert!(!descriptor.contains("BYSETPOS"));
        assert!(!descriptor.contains("BYDAY"));
        assert_eq!(form.frequency(), Some(Frequency::Monthly));
        assert_eq!(form.end(), Some(EndCondition::Never));
    }

    #[test]
    fn settings_choose_initial_options() {
        let form = form_with(FormSettings {
            frequency: Frequency::Daily,
            end: EndCondition::After,
            interval: 2,
            count: 10,
        });
        let descriptor = form.collect();

        assert_eq!(descriptor.to_string(), "{FREQ: DAILY, INTERVAL: 2, COUNT: 10}");
    }

    #[test]
    fn collect_is_idempotent() {
        let form = form();
        assert_eq!(form.collect(), form.collect());
    }

    #[test]
    fn subscriptions_are_accounted_for() {
        let form = form();
        // Two selectors, the INTERVAL guard, the MONTHLY blocks, the form.
        assert_eq!(form.surface().listener_count(), 5);
    }
}

mod frequency {
    use super::*;

    #[test]
    fn weekly_with_checked_days() {
        let mut form = form();
        form.select_frequency(Frequency::Weekly).unwrap();

        let monday = form.checkbox("BYDAY", "MO").unwrap();
        let wednesday = form.checkbox("BYDAY", "WE").unwrap();
        form.set_checked(monday, true).unwrap();
        let descriptor = form.set_checked(wednesday, true).unwrap().unwrap();

        assert_eq!(descriptor.get("FREQ"), Some("WEEKLY"));
        assert_eq!(descriptor.get("INTERVAL"), Some("1"));
        assert_eq!(descriptor.get_all("BYDAY"), ["MO", "WE"]);
        assert_eq!(
            serde_json::to_string(&descriptor).unwrap(),
            r#"{"FREQ":"WEEKLY","INTERVAL":"1","BYDAY":["MO","WE"]}"#
        );
    }

    #[test]
    fn unchecking_a_day_removes_it() {
        let mut form = form();
        form.select_frequency(Frequency::Weekly).unwrap();
        let friday = form.checkbox("BYDAY", "FR").unwrap();

        form.set_checked(friday, true).unwrap();
        let descriptor = form.set_checked(friday, false).unwrap().unwrap();

        assert!(!descriptor.contains("BYDAY"));
    }

    #[test]
    fn yearly_second_block_excludes_first() {
        let mut form = form();
        form.select_frequency(Frequency::Yearly).unwrap();

        let cases = form.case_controls();
        assert_eq!(cases.len(), 2);
        form.choose_case(cases[1]).unwrap();

        let set_pos = form.control_named("BYSETPOS").unwrap();
        form.set_value(set_pos, "-1").unwrap();
        let by_day = form.control_named("BYDAY").unwrap();
        form.set_value(by_day, "SU,SA").unwrap();
        let month = form.control_named("BYMONTH").unwrap();
        let descriptor = form.set_value(month, "2").unwrap().unwrap();

        assert_eq!(descriptor.names(), ["FREQ", "BYSETPOS", "BYDAY", "BYMONTH"]);
        assert_eq!(descriptor.get("FREQ"), Some("YEARLY"));
        assert_eq!(descriptor.get("BYSETPOS"), Some("-1"));
        assert_eq!(descriptor.get("BYDAY"), Some("SU,SA"));
        assert_eq!(descriptor.get_all("BYMONTH"), ["2"]);
        assert!(!descriptor.contains("BYMONTHDAY"));
        assert!(!descriptor.contains("INTERVAL"));
    }

    #[test]
    fn switching_back_starts_fresh() {
        let mut form = form();
        let interval = form.control_named("INTERVAL").unwrap();
        form.set_value(interval, "4").unwrap();

        form.select_frequency(Frequency::Hourly).unwrap();
        let descriptor = form.select_frequency(Frequency::Monthly).unwrap().unwrap();

        assert_eq!(descriptor.get("INTERVAL"), Some("1"));
        assert_eq!(descriptor.get("BYMONTHDAY"), Some("1"));
    }

    #[test]
    fn no_listener_leak_across_transitions() {
        let mut form = form();
        let baseline = form.surface().listener_count();

        for _ in 0..10 {
            form.select_frequency(Frequency::Yearly).unwrap();
            form.select_frequency(Frequency::Weekly).unwrap();
            form.select_frequency(Frequency::Monthly).unwrap();
        }

        assert_eq!(form.surface().listener_count(), baseline);
    }
}

mod guards {
    use super::*;

    #[test]
    fn cleared_interval_resets_to_default() {
        let mut form = form();
        let interval = form.control_named("INTERVAL").unwrap();

        let descriptor = form.set_value(interval, "").unwrap().unwrap();

        assert_eq!(descriptor.get("INTERVAL"), Some("1"));
        assert_eq!(value_of(&form, interval), "1");
    }

    #[test]
    fn garbage_and_zero_reset_to_default() {
        let mut form = form_with(FormSettings {
            interval: 3,
            ..FormSettings::default()
        });
        let interval = form.control_named("INTERVAL").unwrap();

        form.set_value(interval, "abc").unwrap();
        assert_eq!(value_of(&form, interval), "3");
        form.set_value(interval, "0").unwrap();
        assert_eq!(value_of(&form, interval), "3");
    }

    #[test]
    fn padded_and_signed_intervals_are_canonicalized() {
        let mut form = form();
        let interval = form.control_named("INTERVAL").unwrap();

        let descriptor = form.set_value(interval, " 5 ").unwrap().unwrap();
        assert_eq!(descriptor.get("INTERVAL"), Some("5"));
        assert_eq!(value_of(&form, interval), "5");

        let descriptor = form.set_value(interval, "+07").unwrap().unwrap();
        assert_eq!(descriptor.get("INTERVAL"), Some("7"));
        assert_eq!(value_of(&form, interval), "7");
    }

    #[test]
    fn valid_interval_is_kept() {
        let mut form = form();
        let interval = form.control_named("INTERVAL").unwrap();

        let descriptor = form.set_value(interval, "12").unwrap().unwrap();
        assert_eq!(descriptor.get("INTERVAL"), Some("12"));
    }
}

mod exclusion {
    use super::*;

    #[test]
    fn disabled_stale_values_are_never_collected() {
        let mut form = form();
        let month_day = form.control_named("BYMONTHDAY").unwrap();
        form.set_value(month_day, "15").unwrap();

        let cases = form.case_controls();
        let descriptor = form.choose_case(cases[1]).unwrap().unwrap();

        assert!(!descriptor.contains("BYMONTHDAY"));
        assert_eq!(descriptor.get("BYSETPOS"), Some("1"));
        assert_eq!(descriptor.get("BYDAY"), Some("SU"));
        assert_eq!(value_of(&form, month_day), "15");
    }

    #[test]
    fn reactivated_block_keeps_its_values() {
        let mut form = form();
        let month_day = form.control_named("BYMONTHDAY").unwrap();
        form.set_value(month_day, "15").unwrap();

        let cases = form.case_controls();
        form.choose_case(cases[1]).unwrap();
        let descriptor = form.choose_case(cases[0]).unwrap().unwrap();

        assert_eq!(descriptor.get("BYMONTHDAY"), Some("15"));
        assert!(!descriptor.contains("BYSETPOS"));
    }

    #[test]
    fn disabled_controls_ignore_interaction() {
        let mut form = form();
        let set_pos = form.controls_named("BYSETPOS")[0];

        assert_eq!(form.set_value(set_pos, "-1").unwrap(), None);
        assert_eq!(value_of(&form, set_pos), "1");
    }

    #[test]
    fn exactly_one_case_checked_after_each_click() {
        let mut form = form();
        let cases = form.case_controls();

        for &case in cases.iter().chain(cases.iter().rev()) {
            form.choose_case(case).unwrap();
            let checked = cases
                .iter()
                .filter(|&&c| form.surface().control(c).unwrap().checked)
                .count();
            assert_eq!(checked, 1);
        }
    }
}

mod end_condition {
    use super::*;

    #[test]
    fn after_adds_count() {
        let mut form = form_with(FormSettings {
            count: 5,
            ..FormSettings::default()
        });

        let descriptor = form.select_end(EndCondition::After).unwrap().unwrap();

        assert_eq!(descriptor.get("COUNT"), Some("5"));
        assert_eq!(form.end(), Some(EndCondition::After));
    }

    #[test]
    fn count_is_guarded() {
        let mut form = form_with(FormSettings {
            count: 5,
            ..FormSettings::default()
        });
        form.select_end(EndCondition::After).unwrap();
        let count = form.control_named("COUNT").unwrap();

        let descriptor = form.set_value(count, "-2").unwrap().unwrap();
        assert_eq!(descriptor.get("COUNT"), Some("5"));
    }

    #[test]
    fn on_date_adds_until() {
        let mut form = form();
        form.select_end(EndCondition::OnDate).unwrap();
        let until = form.control_named("UNTIL").unwrap();

        let descriptor = form.set_value(until, "2026-12-31").unwrap().unwrap();

        assert_eq!(descriptor.get("UNTIL"), Some("2026-12-31"));
        assert!(!descriptor.contains("COUNT"));
    }

    #[test]
    fn never_drops_end_fields() {
        let mut form = form();
        form.select_end(EndCondition::After).unwrap();

        let descriptor = form.select_end(EndCondition::Never).unwrap().unwrap();

        assert!(!descriptor.contains("COUNT"));
        assert!(!descriptor.contains("UNTIL"));
    }

    #[test]
    fn end_and_frequency_are_independent() {
        let mut form = form();
        form.select_end(EndCondition::After).unwrap();

        let descriptor = form.select_frequency(Frequency::Daily).unwrap().unwrap();

        assert_eq!(descriptor.names(), ["FREQ", "INTERVAL", "COUNT"]);
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_control_is_reported() {
        let mut form = form();
        let missing = ControlId::new(9_999);

        assert_eq!(
            form.set_value(missing, "1").unwrap_err(),
            FormError::Surface(SurfaceError::UnknownControl(missing))
        );
    }

    #[test]
    fn value_outside_choices_is_rejected() {
        let mut form = form();
        let month_day = form.control_named("BYMONTHDAY").unwrap();

        assert!(matches!(
            form.set_value(month_day, "32"),
            Err(FormError::Surface(SurfaceError::InvalidChoice { .. }))
        ));
        assert_eq!(value_of(&form, month_day), "1");
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn dispose_returns_a_clean_surface() {
        let mut form = form();
        form.select_frequency(Frequency::Weekly).unwrap();
        form.select_end(EndCondition::After).unwrap();

        let surface = form.dispose().unwrap();

        assert_eq!(surface.listener_count(), 0);
        assert_eq!(surface.len(), 1);
    }
}
