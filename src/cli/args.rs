//! CLI argument definitions for `credit-bridge`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use credit_bridge::config::ConfigOverrides;
use credit_bridge::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `requirement`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a previously taken course to the session.
    ///
    /// The grade may be a numeric percentage (e.g., 87.5) or a letter grade
    /// (e.g., B+). Accepted letter grades: A+, A, B+, B, C+, C.
    Add {
        /// Course name
        #[arg(value_name = "NAME")]
        name: String,

        /// Credit hours (1-6)
        #[arg(value_name = "CREDITS")]
        credits: u32,

        /// Grade: numeric percentage or letter grade
        #[arg(value_name = "GRADE")]
        grade: String,
    },
    /// Remove a course from the session by id.
    Remove {
        /// Course id (shown by `course list`)
        #[arg(value_name = "ID")]
        id: u64,
    },
    /// List the courses in the session.
    List,
    /// Remove all courses from the session (requires confirmation).
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the session's course list.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Calculate equivalency results and the study plan for the session.
    Calc,
    /// Export an equivalency report.
    ///
    /// Prints to stdout unless an output file is given; with `--save` the
    /// report is written under the configured reports directory.
    Report {
        /// Report format: text (txt) or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Output file path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write to the configured reports directory with a dated filename
        #[arg(long)]
        save: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "creditbridge",
    about = "credit-bridge command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the total credit-hour requirement for this run
    #[arg(long, value_name = "CREDITS")]
    pub requirement: Option<u32>,

    /// Override the tuition cost per credit for this run
    #[arg(long = "cost-per-credit", value_name = "AMOUNT")]
    pub cost_per_credit: Option<f64>,

    /// Override the maximum credits per semester for this run
    #[arg(long = "max-semester-credits", value_name = "CREDITS")]
    pub max_semester_credits: Option<u32>,

    /// Override the session file path
    #[arg(long = "session-file", value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Override the reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration for this run only.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            requirement: self.requirement,
            cost_per_credit: self.cost_per_credit,
            max_semester_credits: self.max_semester_credits,
            session_file: self
                .session_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
