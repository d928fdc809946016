//! Configuration management for fdd-checker
//!
//! Config stored at: ~/.config/fdd-checker/config.json

use std::path::{Path, PathBuf};

use fdd_domain::model::CalibrationConstants;
use fdd_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Calibration constants used when a run does not override them
    #[serde(default)]
    pub calibration: CalibrationConstants,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fdd-checker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the user config file, or defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the user config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = &self.calibration;
        writeln!(f, "FDD Checker Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(f, "Sand bulk density (γs):  {} g/cc", c.sand_bulk_density)?;
        writeln!(f, "Cone sand weight (Wc):   {} g", c.cone_sand_weight)?;
        writeln!(f, "Specific gravity (Gs):   {}", c.specific_gravity)?;
        writeln!(f, "Max dry density (MDD):   {} g/cc", c.max_dry_density)?;
        writeln!(f, "Compaction requirement:  {}", c.compaction_threshold)?;
        writeln!(f, "Output format:           {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:             {}", path.display())?;
        }

        Ok(())
    }
}
