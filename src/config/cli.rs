//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::form::{EndCondition, Frequency};

/// rrule-form: Recurrence Form Driver
///
/// Builds a recurrence form in memory, applies the given steps the way a
/// user would, and prints the resulting recurrence descriptor as JSON.
///
/// Steps are `NAME=VALUE`, `+NAME=VALUE` (check), `-NAME=VALUE` (uncheck),
/// `@case=N` and `@end=VALUE`. Put steps starting with '-' after `--`.
#[derive(Debug, Parser)]
#[command(name = "rrule-form")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Frequency selected on first render
    #[arg(long = "freq", value_enum)]
    pub frequency: Option<FrequencyArg>,

    /// End condition selected on first render
    #[arg(long, value_enum)]
    pub end: Option<EndArg>,

    /// Default repeat interval
    #[arg(long)]
    pub interval: Option<u32>,

    /// Default occurrence count for the "after" end condition
    #[arg(long)]
    pub count: Option<u32>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Steps to apply in order (replace the config file's steps)
    #[arg(value_name = "STEP")]
    pub steps: Vec<String>,
}

/// Subcommands for rrule-form
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "rrule-form.toml")]
        output: PathBuf,
    },
}

/// Frequency argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrequencyArg {
    /// Every N years
    Yearly,
    /// Every N months
    Monthly,
    /// Every N weeks
    Weekly,
    /// Every N days
    Daily,
    /// Every N hours
    Hourly,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Yearly => Self::Yearly,
            FrequencyArg::Monthly => Self::Monthly,
            FrequencyArg::Weekly => Self::Weekly,
            FrequencyArg::Daily => Self::Daily,
            FrequencyArg::Hourly => Self::Hourly,
        }
    }
}

/// End condition argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EndArg {
    /// Repeat forever
    Never,
    /// Stop after a number of occurrences
    After,
    /// Stop on a given date
    #[value(name = "on-date")]
    OnDate,
}

impl From<EndArg> for EndCondition {
    fn from(arg: EndArg) -> Self {
        match arg {
            EndArg::Never => Self::Never,
            EndArg::After => Self::After,
            EndArg::OnDate => Self::OnDate,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
