//! Config command implementation.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/scaffold/config.toml`
//! - macOS: `~/Library/Application Support/scaffold/config.toml`
//! - Windows: `%APPDATA%\scaffold\config.toml`
//!
//! `SCAFFOLD_CONFIG` points at a different file.

use crate::cli::ConfigAction;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use scaffold_core::cli::{ExitCode, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "SCAFFOLD_CONFIG";

const VALID_FORMATS: [&str; 3] = ["json", "text", "pretty"];
const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration.
///
/// # Examples
///
/// ```toml
/// [general]
/// default_format = "pretty"
/// log_level = "warn"
///
/// [templates]
/// dir = "/home/me/.scaffold/templates"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Template settings
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format (json, text, pretty)
    pub default_format: String,

    /// Logging level used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: "pretty".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

/// Template settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TemplatesConfig {
    /// Trusted template root replacing the bundled templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the format or log level is not a known value.
    pub fn validate(&self) -> Result<()> {
        if !VALID_FORMATS.contains(&self.general.default_format.as_str()) {
            anyhow::bail!(
                "invalid default_format '{}', must be one of: {}",
                self.general.default_format,
                VALID_FORMATS.join(", ")
            );
        }

        if !VALID_LEVELS.contains(&self.general.log_level.as_str()) {
            anyhow::bail!(
                "invalid log_level '{}', must be one of: {}",
                self.general.log_level,
                VALID_LEVELS.join(", ")
            );
        }

        Ok(())
    }
}

/// Returns the configuration file path.
///
/// # Errors
///
/// Returns an error if no config directory exists for this platform.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir().context("failed to determine config directory")?;
    Ok(config_dir.join("scaffold").join("config.toml"))
}

/// Loads configuration from `path`, or defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config.validate()?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Loads configuration from the default location.
///
/// # Errors
///
/// Returns an error if the file exists but is invalid.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

fn save_config(config: &Config, path: &Path) -> Result<()> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }

    let toml_str = toml::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(path, toml_str).context("failed to write config file")?;

    debug!(path = %path.display(), "saved config");
    Ok(())
}

/// Initialization result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitResult {
    /// Whether a new file was written
    pub created: bool,
    /// Status message
    pub message: String,
    /// Config file location
    pub path: PathBuf,
}

/// Config file location.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathResult {
    /// Config file location
    pub path: PathBuf,
    /// Whether the file exists
    pub exists: bool,
}

/// Runs the config command.
///
/// `init` never overwrites an existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn run(action: ConfigAction, output_format: OutputFormat) -> Result<ExitCode> {
    let path = config_path()?;

    let output = match action {
        ConfigAction::Init => {
            let result = if path.exists() {
                InitResult {
                    created: false,
                    message: "config file already exists".to_string(),
                    path,
                }
            } else {
                save_config(&Config::default(), &path)?;
                InitResult {
                    created: true,
                    message: "created config file with defaults".to_string(),
                    path,
                }
            };
            format_output(&result, output_format)?
        }
        ConfigAction::Show => format_output(&load_config_from(&path)?, output_format)?,
        ConfigAction::Path => {
            let exists = path.exists();
            format_output(&PathResult { path, exists }, output_format)?
        }
    };

    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_format, "pretty");
        assert_eq!(config.general.log_level, "warn");
        assert!(config.templates.dir.is_none());
    }

    #[test]
    fn test_validate_rejects_unknown_values() {
        let mut config = Config::default();
        config.general.default_format = "yaml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_format"));

        let mut config = Config::default();
        config.general.log_level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config_from(&temp.path().join("none.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[templates]\ndir = \"/srv/templates\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.templates.dir, Some(PathBuf::from("/srv/templates")));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[general]\ndefault_format = \"xml\"\n").unwrap();

        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        let mut config = Config::default();
        config.general.default_format = "json".to_string();
        config.templates.dir = Some(PathBuf::from("/srv/templates"));
        save_config(&config, &path).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let mut config = Config::default();
        config.general.log_level = "verbose".to_string();

        assert!(save_config(&config, &path).is_err());
        assert!(!path.exists());
    }
}
