//! Rate card configuration for the pay package engine.
//!
//! This module loads the client fee table and the formula constants from
//! YAML files, and provides the same rate card built in via
//! [`EngineConfig::sample`].
//!
//! # Example
//!
//! ```no_run
//! use pay_package_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/travel_nurse").unwrap();
//! println!("Loaded rate card: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ClientsConfig, CurrencyFormat, EngineConfig, EngineConstants, EngineSettings, FeeSchedule,
    GaugeConfig, MAX_CONSTANT, RateCardMetadata,
};
