//! Configuration module
//!
//! A `Config` value is built once at startup and handed to whatever needs
//! paths or logging settings. There is no global instance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the application directory
const DIR_VARIABLE: &str = "$CAMPUS_RECORDS";

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
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

/// Paths configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding application data files
    #[serde(default)]
    pub data_dir: String,
    /// Directory receiving timestamped backups of `data_dir`
    #[serde(default)]
    pub backup_dir: String,
    /// Directory for exported transcripts
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
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
    /// Override data directory
    pub data_dir: Option<String>,
    /// Override backup directory
    pub backup_dir: Option<String>,
    /// Override reports directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the application directory
    ///
    /// Returns:
    /// - Linux: `~/.config/campus-records`
    /// - macOS: `~/Library/Application Support/campus-records`
    /// - Windows: `%APPDATA%\campus-records`
    #[must_use]
    pub fn app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campus-records")
    }

    /// Get the user config file path (`config.toml`, or `dconfig.toml` in debug builds)
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        Self::app_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so upgrades pick up new settings without clobbering user edits.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let pairs = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.data_dir, &defaults.paths.data_dir),
            (&mut self.paths.backup_dir, &defaults.paths.backup_dir),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ];

        let mut changed = false;
        for (value, default) in pairs {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides for this run only
    ///
    /// Only `Some` values replace config values; the file on disk is untouched.
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
        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(backup_dir) = &overrides.backup_dir {
            self.paths.backup_dir.clone_from(backup_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Replace `$CAMPUS_RECORDS` with the application directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields fall back to empty values. `$CAMPUS_RECORDS`
    /// is expanded in every string field.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.backup_dir = Self::expand_variables(&config.paths.backup_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is not valid TOML. The
    /// file ships with the binary, so this only fires on a broken build.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it on first run
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_file_path())
    }

    /// Load configuration from `path`, creating it from defaults if missing
    ///
    /// Existing files get missing fields merged in from defaults and are saved
    /// back when anything changed.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !path.exists() {
            let _ = defaults.save_to(path);
            return defaults;
        }

        let Ok(content) = fs::read_to_string(path) else {
            return defaults;
        };
        let Ok(mut config) = Self::from_toml(&content) else {
            return defaults;
        };
        if config.merge_defaults(&defaults) {
            let _ = config.save_to(path);
        }
        config
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::config_file_path())
    }

    /// Save configuration to `path` as pretty TOML
    ///
    /// # Errors
    /// See [`save`](Self::save).
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`, `backup_dir`,
    /// `reports_dir` (dashes accepted for the path keys).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "backup_dir" | "backup-dir" => Some(self.paths.backup_dir.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key (in memory; call [`save`](Self::save) to persist)
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the level is not a valid log
    /// level, or `verbose` is not a boolean.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                if crate::logger::Level::parse(value).is_none() {
                    return Err(format!("Invalid log level: '{value}'"));
                }
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "backup_dir" | "backup-dir" => self.paths.backup_dir = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single value to the one in `defaults`
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "backup_dir" | "backup-dir" => {
                self.paths.backup_dir.clone_from(&defaults.paths.backup_dir);
            }
            "reports_dir" | "reports-dir" => {
                self.paths.reports_dir.clone_from(&defaults.paths.reports_dir);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file; the next [`load`](Self::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        Self::reset_at(&Self::config_file_path())
    }

    /// Delete the config file at `path` if present
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset_at(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
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

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  backup_dir = \"{}\"", self.paths.backup_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
