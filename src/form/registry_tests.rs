//! Tests for the field registry.

use super::catalog::{end_registry, frequency_field_set, frequency_registry};
use super::{
    EndCondition, FieldDescriptor, FieldRegistry, FieldSet, FormError, FormSettings, Frequency,
    PrimaryOption,
};

fn all_end_sets() -> super::RegistryBuilder<EndCondition> {
    EndCondition::all()
        .iter()
        .fold(FieldRegistry::<EndCondition>::builder(), |b, &end| {
            b.register(end, FieldSet::new(end.to_string()))
        })
}

mod lookup {
    use super::*;

    #[test]
    fn every_frequency_has_a_field_set() {
        let registry = frequency_registry(&FormSettings::default()).unwrap();
        assert_eq!(registry.len(), Frequency::all().len());

        for &freq in Frequency::all() {
            assert!(registry.field_set_for(freq).is_ok());
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        let settings = FormSettings::default();
        let registry = frequency_registry(&settings).unwrap();

        let first = registry.field_set_for(Frequency::Monthly).unwrap().clone();
        let second = registry.field_set_for(Frequency::Monthly).unwrap();

        assert_eq!(&first, second);
        assert_eq!(first, frequency_field_set(Frequency::Monthly, &settings));
    }

    #[test]
    fn never_is_explicitly_empty() {
        let registry = end_registry(&FormSettings::default()).unwrap();
        assert!(registry.field_set_for(EndCondition::Never).unwrap().is_empty());
        assert!(!registry.field_set_for(EndCondition::After).unwrap().is_empty());
    }
}

mod build {
    use super::*;

    #[test]
    fn missing_option_fails_at_build() {
        let err = FieldRegistry::builder()
            .register(EndCondition::Never, FieldSet::new("NEVER"))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            FormError::MissingFieldSet {
                selector: "end",
                option: "AFTER".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_option_fails_at_build() {
        let err = all_end_sets()
            .register(EndCondition::After, FieldSet::new("again"))
            .build()
            .unwrap_err();

        assert!(matches!(err, FormError::DuplicateOption { .. }));
        assert!(err.to_string().contains("AFTER"));
    }

    #[test]
    fn malformed_set_fails_at_build_naming_it() {
        let broken = FieldSet::new("AFTER").field(FieldDescriptor::numeric("COUNT", 1, -5));
        let err = FieldRegistry::builder()
            .register(EndCondition::Never, FieldSet::new("NEVER"))
            .register(EndCondition::After, broken)
            .register(EndCondition::OnDate, FieldSet::new("ON-DATE"))
            .build()
            .unwrap_err();

        match err {
            FormError::MalformedFieldSet { field_set, reason } => {
                assert_eq!(field_set, "AFTER");
                assert!(reason.contains("COUNT"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_registration_builds() {
        let registry = all_end_sets().build().unwrap();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }
}
