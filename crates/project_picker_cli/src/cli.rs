//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Project picker: browse the demo project table and draw a random match.
#[derive(Parser, Debug)]
#[command(name = "project_picker", version, about)]
pub struct CliArgs {
    /// JSON store configuration (cardinality, category_registration, description).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long = "log-dir", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every entry as a table.
    List,
    /// Filter entries and print one random match.
    Pick {
        /// Acceptable money levels, e.g. `--money 1,2`.
        #[arg(long, value_delimiter = ',')]
        money: Vec<String>,
        /// Acceptable time levels.
        #[arg(long, value_delimiter = ',')]
        time: Vec<String>,
        /// Entry must carry at least one of these categories.
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Print the category vocabulary with usage counts.
    Categories,
}

impl CliArgs {
    /// Resolves the log level: `--log-level` flag, then the build default.
    pub fn resolve_log_level(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| project_picker_core::default_log_level().to_string())
    }
}
