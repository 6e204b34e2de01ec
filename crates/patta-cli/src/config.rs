//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use patta_dss::EngineConfig;
use patta_lifecycle::LifecycleConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Data file locations
    #[serde(default)]
    pub data: DataPaths,

    /// Claim lifecycle settings
    #[serde(default)]
    pub lifecycle: LifecycleConfig,

    /// Recommendation engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Where claims and villages are read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataPaths {
    /// Claims snapshot (defaults to ~/.patta/claims.json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<PathBuf>,

    /// Village gazetteer (defaults to ~/.patta/villages.json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub villages: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding the config file and default data files.
    pub fn home() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".patta"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::home()?.join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.lifecycle.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Claims snapshot path: explicit override, then config, then default.
    pub fn claims_path(&self, cli_override: Option<&str>) -> Result<PathBuf> {
        resolve_path(cli_override, self.data.claims.as_ref(), "claims.json")
    }

    /// Gazetteer path: explicit override, then config, then default.
    pub fn villages_path(&self, cli_override: Option<&str>) -> Result<PathBuf> {
        resolve_path(cli_override, self.data.villages.as_ref(), "villages.json")
    }
}

fn resolve_path(
    cli_override: Option<&str>,
    configured: Option<&PathBuf>,
    default_name: &str,
) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = configured {
        return Ok(path.clone());
    }
    Ok(Config::home()?.join(default_name))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
