//! Configuration loading for roupeiro
//!
//! Resolution priority per setting: environment variable → TOML config file →
//! compiled default. The TOML path itself comes from `ROUPEIRO_CONFIG`
//! (default `roupeiro.toml` in the working directory); a missing file is not
//! an error, a malformed one is.

use crate::{Error, Result};
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    /// SQLite database file backing the document store
    pub database_path: PathBuf,
    /// Low-stock report threshold (entries with count <= threshold alert)
    pub low_stock_limit: u32,
    /// Lower bound of the numeric shoe-size band (inclusive)
    pub shoe_size_min: u32,
    /// Upper bound of the numeric shoe-size band (inclusive)
    pub shoe_size_max: u32,
    /// Highest valid lot id (lots are numbered 1..=max_lots)
    pub max_lots: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5830,
            database_path: PathBuf::from("roupeiro.db"),
            low_stock_limit: 4,
            shoe_size_min: 16,
            shoe_size_max: 59,
            max_lots: 400,
        }
    }
}

impl Config {
    /// Load configuration: TOML file first, then environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var("ROUPEIRO_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("roupeiro.toml"));

        let mut config = if path.exists() {
            let config = Self::from_file(&path)?;
            info!("Configuration loaded from {}", path.display());
            config
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    fn apply_env_overrides(&mut self) {
        if let Some(port) = env_u32("ROUPEIRO_PORT") {
            self.port = port as u16;
        }
        if let Ok(path) = std::env::var("ROUPEIRO_DATABASE_PATH") {
            self.database_path = PathBuf::from(path);
        }
        if let Some(limit) = env_u32("ROUPEIRO_LOW_STOCK_LIMIT") {
            self.low_stock_limit = limit;
        }
        if let Some(max) = env_u32("ROUPEIRO_MAX_LOTS") {
            self.max_lots = max;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_lots == 0 {
            return Err(Error::Config("max_lots must be at least 1".to_string()));
        }
        if self.shoe_size_min > self.shoe_size_max {
            return Err(Error::Config(format!(
                "Shoe size band is empty: {}..{}",
                self.shoe_size_min, self.shoe_size_max
            )));
        }
        Ok(())
    }

    /// Numeric band treated as a shoe size by the age classifier
    pub fn shoe_band(&self) -> RangeInclusive<u32> {
        self.shoe_size_min..=self.shoe_size_max
    }
}

/// Parse an environment variable as u32, warning on garbage instead of failing
fn env_u32(name: &str) -> Option<u32> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: not a number ({})", name, raw);
            None
        }
    }
}
