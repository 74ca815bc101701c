//! Runtime configuration
//!
//! Settings come from an optional TOML file. Every field has a default, so an
//! absent file or a partial file is fine; a file that does not parse is not.

use crate::tracker::{BudgetChecker, DEFAULT_BUDGET_LIMIT, DEFAULT_CURRENCY_SYMBOL};
use anyhow::{Context, Result, bail};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the data directory when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "goal-tracker.toml";

/// Default report file name
pub const DEFAULT_REPORT_FILE: &str = "goal-tracker-report.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Weekly food budget limit
    pub budget_limit: f64,
    /// Currency symbol shown in budget messages
    pub currency_symbol: String,
    /// Report output path; relative paths resolve against the data directory
    pub report_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget_limit: DEFAULT_BUDGET_LIMIT,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "event=config_load status=default reason=missing path={}",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        info!("event=config_load status=ok path={}", path.display());
        Ok(config)
    }

    /// Load the explicit config file, or `goal-tracker.toml` from the data directory
    pub fn discover(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file {} does not exist", path.display());
                }
                Self::load(path)
            }
            None => Self::load(&data_dir.join(DEFAULT_CONFIG_FILE)),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.budget_limit.is_finite() || self.budget_limit <= 0.0 {
            bail!(
                "budget_limit must be a positive number, got {}",
                self.budget_limit
            );
        }
        Ok(())
    }

    /// Budget checker using the configured limit and currency
    pub fn budget_checker(&self) -> BudgetChecker {
        BudgetChecker::new(self.budget_limit, self.currency_symbol.clone())
    }

    /// Report path, resolved against `data_dir` when relative
    pub fn report_path(&self, data_dir: &Path) -> PathBuf {
        if self.report_file.is_absolute() {
            self.report_file.clone()
        } else {
            data_dir.join(&self.report_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.budget_limit, 18000.0);
        assert_eq!(config.currency_symbol, "₦");
        assert_eq!(
            config.report_path(Path::new("/data")),
            PathBuf::from("/data/goal-tracker-report.txt")
        );
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml("budget_limit = 25000.0\n").unwrap();
        assert_eq!(config.budget_limit, 25000.0);
        assert_eq!(config.currency_symbol, "₦");
    }

    #[test]
    fn test_rejects_non_positive_limit() {
        assert!(Config::from_toml("budget_limit = 0.0\n").is_err());
        assert!(Config::from_toml("budget_limit = -5.0\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_file() {
        assert!(Config::from_toml("budget_limit = \"lots\"").is_err());
    }

    #[test]
    fn test_discover_in_data_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "currency_symbol = \"$\"\nreport_file = \"reports/weekly.txt\"\n",
        )
        .unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(
            config.report_path(dir.path()),
            dir.path().join("reports/weekly.txt")
        );
    }

    #[test]
    fn test_discover_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(Config::discover(Some(&dir.path().join("nope.toml")), dir.path()).is_err());
    }
}
