//! HTTP API module for the pay package engine.
//!
//! This module provides the REST endpoints a calculator form drives:
//! evaluating a package (typed or from raw form fields), populating the
//! client selector and resetting to defaults.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::FormRequest;
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, ClientEntry, ClientsResponse,
    DefaultsResponse,
};
pub use state::AppState;
