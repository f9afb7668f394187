//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate card
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{ClientsConfig, EngineConfig, EngineSettings};

/// Loads rate card configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/travel_nurse/
/// ├── engine.yaml   # Constants, gauge target and currency format
/// └── clients.yaml  # Client to fee fraction table
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_package_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/travel_nurse")?;
/// println!("Loaded {} clients", config.fees().len());
/// # Ok::<(), pay_package_engine::error::EngineError>(())
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns the validated [`EngineConfig`], or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - A client fee lies outside `[0, 1)` or a constant is unusable
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<EngineConfig> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let clients = Self::load_yaml::<ClientsConfig>(&path.join("clients.yaml"))?;

        let config = EngineConfig::new(settings, clients.clients);
        config.validate()?;

        debug!(
            rate_card = %config.metadata().name,
            version = %config.metadata().version,
            clients = config.fees().len(),
            "Loaded rate card"
        );

        Ok(config)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/travel_nurse"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.metadata().name, "Travel Nurse Pay Package");
        assert_eq!(config.metadata().version, "2025-01-01");
    }

    #[test]
    fn test_loaded_configuration_matches_builtin_sample() {
        let config = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(config, EngineConfig::sample());
    }

    #[test]
    fn test_simplifi_fee_loaded() {
        let config = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(config.fees().fee_for("SimpliFI"), Some(dec("0.06")));
        assert_eq!(config.fees().len(), 12);
    }

    #[test]
    fn test_constants_loaded() {
        let config = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(config.constants().burden_multiplier, dec("1.23"));
        assert_eq!(config.constants().non_billable_orientation_rate, dec("16.5"));
        assert_eq!(config.gauge().target_margin, dec("10.00"));
        assert_eq!(config.currency().symbol, "$");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
