use crate::constants::{LOG_FILE_NAME, env, files};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
///
/// Input and output file naming is fixed and has no setting here.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists the defaults are used; nothing is written.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `NAME_ABBREV_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file could not be read, parsed or validated
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Same as [`Config::load`], reading the config file at `path`.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = Self::load_from_path_or_default(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads the config for an abbreviation run.
    ///
    /// A config file that cannot be read, parsed or validated never stops a
    /// run: the defaults are used and the error is handed back so the caller
    /// can log it once logging is up.
    pub async fn load_or_default() -> (Self, Option<AppError>) {
        Self::load_or_default_from(&get_config_path()).await
    }

    /// Same as [`Config::load_or_default`], reading the config file at `path`.
    pub async fn load_or_default_from(path: &str) -> (Self, Option<AppError>) {
        match Self::load_with_overrides(path).await {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Overrides settings from environment variables, if present.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_file_path)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Full path of the log file, custom or default.
    pub fn log_file(&self) -> PathBuf {
        match &self.log_file_path {
            Some(custom_path) => PathBuf::from(custom_path),
            None => Path::new(&get_log_dir_path()).join(LOG_FILE_NAME),
        }
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Shows defaults when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Output File Name:");
        println!(
            "{}<input>{}.{}",
            files::OUTPUT_PREFIX,
            files::OUTPUT_SUFFIX,
            files::EXTENSION
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        println!("{}", config.log_file().display());
        if config.log_file_path.is_none() {
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Config::load_from_path`], but a missing file gives the defaults.
    ///
    /// Any other failure (unreadable file, broken TOML) is returned as is.
    pub async fn load_from_path_or_default(path: &str) -> Result<Self, AppError> {
        match Self::load_from_path(path).await {
            Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            other => other,
        }
    }
}
