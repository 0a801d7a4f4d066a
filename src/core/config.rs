//! Configuration module for `credit-bridge`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

fn default_requirement() -> u32 {
    crate::core::plan::DEFAULT_REQUIREMENT
}

fn default_cost_per_credit() -> f64 {
    crate::core::plan::DEFAULT_COST_PER_CREDIT
}

fn default_max_semester_credits() -> u32 {
    crate::core::plan::DEFAULT_MAX_SEMESTER_CREDITS
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Program parameters used to seed new sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Total credit hours needed by the program
    #[serde(default = "default_requirement")]
    pub requirement: u32,
    /// Tuition cost per credit hour
    #[serde(default = "default_cost_per_credit")]
    pub cost_per_credit: f64,
    /// Maximum credits allocated to one semester in the study plan
    #[serde(default = "default_max_semester_credits")]
    pub max_semester_credits: u32,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            requirement: default_requirement(),
            cost_per_credit: default_cost_per_credit(),
            max_semester_credits: default_max_semester_credits(),
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path of the persisted session JSON document
    #[serde(default)]
    pub session_file: String,
    /// Directory for exported report files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Program parameters
    #[serde(default)]
    pub program: ProgramConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override program requirement
    pub requirement: Option<u32>,
    /// Override cost per credit
    pub cost_per_credit: Option<f64>,
    /// Override max credits per semester
    pub max_semester_credits: Option<u32>,
    /// Override session file path
    pub session_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$CREDIT_BRIDGE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/creditbridge`
    /// - macOS: `~/Library/Application Support/creditbridge`
    /// - Windows: `%APPDATA%\creditbridge`
    #[must_use]
    pub fn get_creditbridge_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("creditbridge")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty in the current config and non-empty
    /// in defaults are updated; numeric program fields already fall back via
    /// serde defaults.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.session_file.is_empty() && !defaults.paths.session_file.is_empty() {
            self.paths
                .session_file
                .clone_from(&defaults.paths.session_file);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the configuration file
    /// on disk is not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(requirement) = overrides.requirement {
            self.program.requirement = requirement;
        }
        if let Some(cost) = overrides.cost_per_credit {
            self.program.cost_per_credit = cost;
        }
        if let Some(max) = overrides.max_semester_credits {
            self.program.max_semester_credits = max;
        }

        if let Some(session_file) = &overrides.session_file {
            self.paths.session_file.clone_from(session_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_creditbridge_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CREDIT_BRIDGE` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CREDIT_BRIDGE") {
            let dir = Self::get_creditbridge_dir();
            value.replace("$CREDIT_BRIDGE", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$CREDIT_BRIDGE` in path-valued fields. Missing fields use
    /// their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.session_file = Self::expand_variables(&config.paths.session_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// On first run the config directory and file are created from defaults.
    /// When the file exists, missing fields are merged in from defaults and
    /// the updated config is saved back, so upgrades pick up new fields
    /// without losing user settings.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the config
    /// directory cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `requirement`,
    /// `cost_per_credit`, `max_semester_credits`, `session_file`,
    /// `reports_dir`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "requirement" => Some(self.program.requirement.to_string()),
            "cost_per_credit" | "cost-per-credit" => {
                Some(self.program.cost_per_credit.to_string())
            }
            "max_semester_credits" | "max-semester-credits" => {
                Some(self.program.max_semester_credits.to_string())
            }
            "session_file" | "session-file" => Some(self.paths.session_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed into the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "requirement" => {
                self.program.requirement = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid credit count for 'requirement': '{value}'"))?;
            }
            "cost_per_credit" | "cost-per-credit" => {
                self.program.cost_per_credit = value.parse::<f64>().map_err(|_| {
                    format!("Invalid amount for 'cost_per_credit': '{value}'")
                })?;
            }
            "max_semester_credits" | "max-semester-credits" => {
                let parsed = value.parse::<u32>().map_err(|_| {
                    format!("Invalid credit count for 'max_semester_credits': '{value}'")
                })?;
                if parsed == 0 {
                    return Err("'max_semester_credits' must be at least 1".to_string());
                }
                self.program.max_semester_credits = parsed;
            }
            "session_file" | "session-file" => self.paths.session_file = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "requirement" => self.program.requirement = defaults.program.requirement,
            "cost_per_credit" | "cost-per-credit" => {
                self.program.cost_per_credit = defaults.program.cost_per_credit;
            }
            "max_semester_credits" | "max-semester-credits" => {
                self.program.max_semester_credits = defaults.program.max_semester_credits;
            }
            "session_file" | "session-file" => self
                .paths
                .session_file
                .clone_from(&defaults.paths.session_file),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[program]")?;
        writeln!(f, "  requirement = {}", self.program.requirement)?;
        writeln!(f, "  cost_per_credit = {}", self.program.cost_per_credit)?;
        writeln!(
            f,
            "  max_semester_credits = {}",
            self.program.max_semester_credits
        )?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  session_file = \"{}\"", self.paths.session_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
