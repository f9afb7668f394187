//! Response types for the pay package API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PackageInput, PackageResult};

/// Response body for the calculate endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Version of the rate card the result was priced with.
    pub rate_card_version: String,
    /// The client the package was priced for.
    pub client: String,
    /// The full engine result.
    pub result: PackageResult,
    /// Display strings keyed by output field name.
    pub display: BTreeMap<String, String>,
    /// Time spent evaluating, in microseconds.
    pub duration_us: u64,
}

/// One entry of the client selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEntry {
    /// Client name as it must be sent back in `client`.
    pub name: String,
    /// Fee fraction retained by the client.
    pub fee: Decimal,
}

/// Response body for `GET /clients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientsResponse {
    /// Clients sorted by name.
    pub clients: Vec<ClientEntry>,
}

/// Response body for `GET /defaults`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsResponse {
    /// The input a reset form holds.
    pub input: PackageInput,
    /// The result of evaluating that input.
    pub result: PackageResult,
    /// Display strings for that result.
    pub display: BTreeMap<String, String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response for a request body that could not be read.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (message, details) = match &error {
            EngineError::ConfigNotFound { path } => (
                "Configuration error",
                format!("Configuration file not found: {}", path),
            ),
            EngineError::ConfigParseError { path, message } => (
                "Configuration parse error",
                format!("Failed to parse {}: {}", path, message),
            ),
            EngineError::InvalidFeeRate { .. } => ("Invalid client fee", error.to_string()),
            EngineError::InvalidConstant { .. } => {
                ("Invalid rate card constant", error.to_string())
            }
        };
        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::with_details("CONFIG_ERROR", message, details),
        }
    }
}
