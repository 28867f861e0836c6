//! Tests for configuration loading and defaults.

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, tempdir};

use crate::form::{EndCondition, FormSettings, Frequency};

use super::*;

mod defaults {
    use super::*;

    #[test]
    fn no_arguments_yield_default_settings() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(config.settings, FormSettings::default());
        assert_eq!(config.settings.frequency, Frequency::Monthly);
        assert_eq!(config.settings.end, EndCondition::Never);
        assert_eq!(config.settings.interval, 1);
        assert_eq!(config.settings.count, 1);
        assert!(config.steps.is_empty());
        assert!(!config.pretty);
        assert!(!config.verbose);
    }

    #[test]
    fn display_summarizes_config() {
        let config = ValidatedConfig::from_raw(&cli(&["--freq", "daily", "FREQ=WEEKLY"]), None)
            .unwrap();

        assert_eq!(
            config.to_string(),
            "Config { frequency: DAILY, end: NEVER, interval: 1, count: 1, steps: 1, pretty: false }"
        );
    }
}

mod config_load {
    use super::*;

    #[test]
    fn load_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [form]
            frequency = "yearly"
            end = "on-date"

            [session]
            steps = ["@case=2"]
        "#
        )
        .unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.settings.frequency, Frequency::Yearly);
        assert_eq!(config.settings.end, EndCondition::OnDate);
        assert_eq!(config.steps.len(), 1);
    }

    #[test]
    fn load_without_config_file() {
        let cli = cli(&["--freq", "hourly", "--interval", "6"]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.settings.frequency, Frequency::Hourly);
        assert_eq!(config.settings.interval, 6);
    }

    #[test]
    fn load_nonexistent_config_file_returns_error() {
        let cli = cli(&["--config", "nonexistent_file_12345.toml"]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_malformed_config_file_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[form\nfrequency = ").unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod write_config {
    use super::super::super::validated::write_default_config;
    use super::*;

    #[test]
    fn write_default_config_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test-config.toml");

        write_default_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[form]"));
        assert!(content.contains("[session]"));
    }

    #[test]
    fn written_template_loads_as_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rrule-form.toml");
        write_default_config(&path).unwrap();

        let cli = cli(&["--config", path.to_str().unwrap()]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.settings, FormSettings::default());
    }

    #[test]
    fn write_default_config_to_invalid_path_returns_error() {
        // Directory that doesn't exist
        let path = Path::new("/nonexistent_dir_12345/config.toml");
        let result = write_default_config(path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
