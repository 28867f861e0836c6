//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::form::{EndCondition, FormSettings, Frequency};
use crate::session::Step;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Initial selections and defaults of the form
    pub settings: FormSettings,

    /// Steps applied after the form is rendered
    pub steps: Vec<Step>,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ frequency: {}, end: {}, interval: {}, count: {}, steps: {}, pretty: {} }}",
            self.settings.frequency,
            self.settings.end,
            self.settings.interval,
            self.settings.count,
            self.steps.len(),
            self.pretty,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A frequency or end condition name is unknown
    /// - The interval or count is zero
    /// - A step cannot be parsed
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let settings = FormSettings {
            frequency: Self::resolve_frequency(cli, toml)?,
            end: Self::resolve_end(cli, toml)?,
            interval: Self::resolve_positive(
                field::INTERVAL,
                cli.interval,
                toml.and_then(|t| t.form.interval),
                defaults::INTERVAL,
            )?,
            count: Self::resolve_positive(
                field::COUNT,
                cli.count,
                toml.and_then(|t| t.form.count),
                defaults::COUNT,
            )?,
        };

        let steps = Self::resolve_steps(cli, toml)?;

        // Flags only enable
        let pretty = cli.pretty || toml.is_some_and(|t| t.output.pretty);

        Ok(Self {
            settings,
            steps,
            pretty,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_frequency(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Frequency, ConfigError> {
        // CLI takes precedence
        if let Some(frequency) = cli.frequency {
            return Ok(frequency.into());
        }

        match toml.and_then(|t| t.form.frequency.as_deref()) {
            Some(value) => value
                .parse::<Frequency>()
                .map_err(|value| ConfigError::InvalidFrequency { value }),
            None => Ok(defaults::FREQUENCY),
        }
    }

    fn resolve_end(cli: &Cli, toml: Option<&TomlConfig>) -> Result<EndCondition, ConfigError> {
        // CLI takes precedence
        if let Some(end) = cli.end {
            return Ok(end.into());
        }

        match toml.and_then(|t| t.form.end.as_deref()) {
            Some(value) => value
                .parse::<EndCondition>()
                .map_err(|value| ConfigError::InvalidEndCondition { value }),
            None => Ok(defaults::END),
        }
    }

    fn resolve_positive(
        name: &'static str,
        cli: Option<u32>,
        toml: Option<u32>,
        default: u32,
    ) -> Result<u32, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let value = cli.or(toml).unwrap_or(default);

        if value == 0 {
            return Err(ConfigError::zero(name));
        }

        Ok(value)
    }

    fn resolve_steps(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Vec<Step>, ConfigError> {
        // CLI steps replace TOML steps entirely
        let raw: &[String] = if cli.steps.is_empty() {
            toml.map_or(&[][..], |t| t.session.steps.as_slice())
        } else {
            &cli.steps
        };

        raw.iter()
            .map(|step| {
                step.parse::<Step>().map_err(|source| ConfigError::InvalidStep {
                    step: step.clone(),
                    source,
                })
            })
            .collect()
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
