//! Configuration management for depot-productivity
//!
//! Config stored at: ~/.config/depot-productivity/config.json

use depot_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the database path
pub const DB_PATH_ENV: &str = "DEPOT_PRODUCTIVITY_DB";

const APP_DIR: &str = "depot-productivity";

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file override (optional)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// How long a write waits on a locked database
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Create the summary table on first use
    #[serde(default = "default_true")]
    pub create_table: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: default_busy_timeout_ms(),
            create_table: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Resolve the database file: environment, then config, then data dir
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(DB_PATH_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        if let Some(ref path) = self.database.path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_local_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir.join("productivity.db"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Depot Productivity Configuration")?;
        writeln!(f, "================================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Database:       {}",
            self.database_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Busy timeout:   {} ms", self.database.busy_timeout_ms)?;
        writeln!(f, "Create table:   {}", self.database.create_table)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
