//! Error types for the pay package engine.
//!
//! The calculation itself is total and never fails; these errors cover
//! loading and validating the rate card the engine is configured with.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the pay package engine.
///
/// # Example
///
/// ```
/// use pay_package_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A client fee was outside the `[0, 1)` range.
    #[error("Invalid fee {fee} for client '{client}': fee must be in [0, 1)")]
    InvalidFeeRate {
        /// The client whose fee was rejected.
        client: String,
        /// The rejected fee fraction.
        fee: Decimal,
    },

    /// An engine constant had a value the formulas cannot work with.
    #[error("Invalid constant '{name}': {message}")]
    InvalidConstant {
        /// The name of the constant.
        name: String,
        /// A description of why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
