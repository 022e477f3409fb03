use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::shopping::constants::DEFAULT_CURRENCY;
use crate::shopping::{PriceEstimator, PriceTable};

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "meal_planner.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency label used in price explanations.
    pub currency: String,
    /// Directory holding the persisted planner state.
    pub state_dir: PathBuf,
    /// Optional price table overriding the built-in one.
    pub price_table: Option<PathBuf>,
    /// Log filter used when neither `RUST_LOG` nor `-v` is given.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            state_dir: PathBuf::from(".meal_planner"),
            price_table: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from a file, falling back to defaults.
    ///
    /// A missing file yields defaults; a corrupt one is moved aside to
    /// `*.json.corrupt` and defaults are used.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("config file {} is invalid, using defaults: {}", path.display(), e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Log filter directives: `RUST_LOG` wins, then `-v`, then the configured level.
    pub fn log_directives(&self, verbose: bool, rust_log: Option<&str>) -> String {
        match rust_log {
            Some(directives) => directives.to_string(),
            None if verbose => "debug".to_string(),
            None => self.log_level.clone(),
        }
    }

    /// Build the price estimator this config describes.
    ///
    /// An override file without entries falls back to the built-in table.
    pub fn price_estimator(&self) -> Result<PriceEstimator> {
        let table = match &self.price_table {
            Some(path) => {
                let table = PriceTable::from_path(path)?;
                if table.is_empty() {
                    warn!("price table {} is empty, using built-in prices", path.display());
                    PriceTable::default()
                } else {
                    debug!("loaded {} prices from {}", table.len(), path.display());
                    table
                }
            }
            None => PriceTable::default(),
        };
        Ok(PriceEstimator::new(table, self.currency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.currency, "MXN");
        assert!(config.price_table.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"currency": "EUR"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_corrupt_file_moved_aside() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not valid json").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_price_table_override() {
        let dir = TempDir::new().unwrap();
        let table_path = dir.path().join("prices.json");
        fs::write(&table_path, r#"[{"name": "Canela", "price": 300.0, "unit": "kg"}]"#).unwrap();

        let config = Config {
            price_table: Some(table_path),
            ..Default::default()
        };
        let estimator = config.price_estimator().unwrap();
        assert_eq!(estimator.currency(), "MXN");

        let config_path = dir.path().join("config.json");
        fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(Config::load(&config_path).unwrap(), config);
    }

    #[test]
    fn test_empty_price_table_falls_back() {
        let dir = TempDir::new().unwrap();
        let table_path = dir.path().join("prices.json");
        fs::write(&table_path, "[]").unwrap();

        let config = Config {
            price_table: Some(table_path),
            ..Default::default()
        };
        assert_eq!(PriceTable::default().len(), config.price_estimator().unwrap().table().len());
    }

    #[test]
    fn test_log_directives_precedence() {
        let config = Config {
            log_level: "info".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_directives(false, None), "info");
        assert_eq!(config.log_directives(true, None), "debug");
        assert_eq!(config.log_directives(true, Some("meal_planner_rs=trace")), "meal_planner_rs=trace");
    }
}
