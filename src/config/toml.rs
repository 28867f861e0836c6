//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Initial form state
    #[serde(default)]
    pub form: FormSection,

    /// Scripted interaction
    #[serde(default)]
    pub session: SessionSection,

    /// Output formatting
    #[serde(default)]
    pub output: OutputSection,
}

/// Initial form state section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSection {
    /// Frequency selected on first render: "yearly", "monthly", "weekly", "daily" or "hourly"
    pub frequency: Option<String>,

    /// End condition selected on first render: "never", "after" or "on-date"
    pub end: Option<String>,

    /// Default repeat interval
    pub interval: Option<u32>,

    /// Default occurrence count
    pub count: Option<u32>,
}

/// Scripted interaction section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
    /// Steps applied in order
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Output formatting section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Pretty-print the JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# rrule-form Configuration File

[form]
# Frequency selected on first render (default: monthly)
# Accepted values: "yearly", "monthly", "weekly", "daily", "hourly"
frequency = "monthly"

# End condition selected on first render (default: never)
# Accepted values: "never", "after", "on-date"
end = "never"

# Default repeat interval, also used when the interval is cleared (default: 1)
# interval = 1

# Default occurrence count for the "after" end condition (default: 1)
# count = 1

[session]
# Steps applied in order after the form is rendered
# Note: CLI steps REPLACE these entirely (not merged)
#   NAME=VALUE     type VALUE into the first enabled control NAME
#   +NAME=VALUE    check the checkbox NAME with VALUE
#   -NAME=VALUE    uncheck the checkbox NAME with VALUE
#   @case=N        choose the N-th case control (1-based)
#   @end=VALUE     choose the end condition
# steps = ["FREQ=WEEKLY", "+BYDAY=MO", "+BYDAY=WE"]

[output]
# Pretty-print the JSON output
# pretty = false
"#
    .to_string()
}
