use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::channel::DEFAULT_CHANNEL_NAME;

/// Log levels accepted in the config file
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Method channel settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChannelConfig {
    /// Name the service registers under
    #[serde(default = "default_channel_name")]
    pub name: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: default_channel_name(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_channel_name() -> String {
    DEFAULT_CHANNEL_NAME.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An empty file is a valid "all defaults" config
    let config: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
    };

    validate_config(&config)?;

    Ok(config)
}

/// Resolve the configuration to use
///
/// An explicit path must exist. Otherwise the per-user config file is used
/// when present, and built-in defaults when it is not.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Using config file: {}", path.display());
            load_config(&path)
        }
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Per-user config file location (e.g. ~/.config/task-manager/config.yaml)
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "task-manager").map(|dirs| {
        let mut path = dirs.config_dir().to_path_buf();
        path.push("config.yaml");
        path
    })
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_channel_name(&config.channel.name).context("Invalid channel configuration")?;

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        anyhow::bail!(
            "Invalid log level '{}': expected one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        );
    }

    Ok(())
}

/// Channel names must be non-empty and free of whitespace
fn validate_channel_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("Channel name must not be empty");
    }

    if name.chars().any(char::is_whitespace) {
        anyhow::bail!("Channel name '{}' must not contain whitespace", name);
    }

    Ok(())
}

/// Example configuration file with comprehensive documentation
///
/// The content is loaded from example-config.yaml at compile time
pub const EXAMPLE_CONFIG: &str = include_str!("../example-config.yaml");
