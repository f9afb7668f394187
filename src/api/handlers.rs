//! HTTP request handlers for the pay package API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute;
use crate::models::PackageInput;
use crate::presentation::display_fields;

use super::request::FormRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, ClientEntry, ClientsResponse,
    DefaultsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/form", post(calculate_form_handler))
        .route("/clients", get(clients_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Accepts a package input and returns the evaluated package. Field
/// content is read leniently (see [`PackageInput`]); only a body that is
/// not a JSON object is rejected.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PackageInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    match payload {
        Ok(Json(input)) => json_ok(evaluate(&state, &input, correlation_id)),
        Err(rejection) => rejection_response(rejection, correlation_id),
    }
}

/// Handler for POST /calculate/form.
///
/// Accepts raw form field values. Field content is never rejected: values
/// that do not parse are treated as zero. `auto_sick_calc` turns accrual
/// off only when sent with a false value; see
/// [`FormFields::to_input`](crate::models::FormFields::to_input).
async fn calculate_form_handler(
    State(state): State<AppState>,
    payload: Result<Json<FormRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing form calculation request");

    match payload {
        Ok(Json(form)) => {
            let input = form.into_fields().to_input();
            json_ok(evaluate(&state, &input, correlation_id))
        }
        Err(rejection) => rejection_response(rejection, correlation_id),
    }
}

/// Handler for GET /clients.
///
/// Lists the clients of the fee schedule, sorted by name, for populating
/// the client selector.
async fn clients_handler(State(state): State<AppState>) -> Response {
    let clients = state
        .config()
        .fees()
        .clients()
        .map(|(name, fee)| ClientEntry {
            name: name.to_string(),
            fee,
        })
        .collect();

    json_ok(ClientsResponse { clients })
}

/// Handler for GET /defaults.
///
/// Returns what a reset form holds and shows.
async fn defaults_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    let input = PackageInput {
        schedule_days: Some(config.constants().default_schedule_days),
        ..PackageInput::default()
    };
    let result = compute(&input, config);
    let display = display_fields(&result, config.currency());

    json_ok(DefaultsResponse {
        input,
        result,
        display,
    })
}

/// Evaluates an input and wraps the result for the response.
fn evaluate(state: &AppState, input: &PackageInput, correlation_id: Uuid) -> CalculationResponse {
    let config = state.config();

    let start_time = Instant::now();
    let result = compute(input, config);
    let duration_us = start_time.elapsed().as_micros() as u64;

    for warning in &result.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            severity = %warning.severity,
            "{}",
            warning.message
        );
    }

    info!(
        correlation_id = %correlation_id,
        client = %input.client,
        margin_hourly = %result.breakdown.margin.hourly.round_dp(2),
        duration_us,
        "Calculation completed successfully"
    );

    let display = display_fields(&result, config.currency());
    CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rate_card_version: config.metadata().version.clone(),
        client: input.client.clone(),
        result,
        display,
        duration_us,
    }
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    let response = ApiErrorResponse::bad_request(error);
    (
        response.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response.error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, EngineConfig};
    use crate::models::OrientationType;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/travel_nurse").expect("Failed to load config");
        AppState::new(config)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn simplifi_request() -> String {
        serde_json::json!({
            "client": "SimpliFI",
            "bill_regular": "50",
            "pay_regular": "30",
            "hours_regular": "36",
            "contract_weeks": "13",
            "house_daily": "20",
            "meals_daily": "15",
            "orientation_type": "non_billable",
            "orientation_hours": "8",
            "schedule_days": "5",
            "sick_hours": {"mode": "auto"}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", simplifi_request()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body: CalculationResponse = body_json(response).await;
        assert_eq!(body.client, "SimpliFI");
        assert_eq!(body.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.rate_card_version, "2025-01-01");
        assert_eq!(body.result.breakdown.margin.hourly.round_dp(2), dec("1.72"));
        assert_eq!(body.result.write_back.pay_ot, dec("45"));
        assert_eq!(body.display["margin_contract"], "$803.80");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "{invalid json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_unparsable_fields_evaluate_as_zero() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/calculate",
                r#"{
                    "client": "SimpliFI",
                    "bill_regular": "fifty",
                    "hours_regular": "36 hrs",
                    "pay_regular": "30",
                    "contract_weeks": [13],
                    "orientation_type": "sometimes"
                }"#
                .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: CalculationResponse = body_json(response).await;
        let b = &body.result.breakdown;
        assert_eq!(b.rates.hourly_after_fee, Decimal::ZERO);
        assert_eq!(b.hours.contract_regular, Decimal::ZERO);
        assert_eq!(b.package.weekly_on_w2_taxable, dec("1080"));
        assert_eq!(b.orientation.orientation_type, OrientationType::NonBillable);
    }

    #[tokio::test]
    async fn test_non_object_body_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "42".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .body(Body::from(simplifi_request()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_empty_object_evaluates() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "{}".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: CalculationResponse = body_json(response).await;
        assert_eq!(body.result.breakdown.margin.hourly, Decimal::ZERO);
        assert_eq!(body.display["margin_hourly"], "$0.00");
    }

    #[tokio::test]
    async fn test_form_tolerates_garbage_fields() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "client": "SimpliFI",
            "bill_regular": "$50.00",
            "pay_regular": 30,
            "hours_regular": "36",
            "contract_weeks": "13",
            "house_daily": "20",
            "meals_daily": "fifteen",
            "pay_ot": "999",
            "auto_sick_calc": "on"
        })
        .to_string();

        let response = router
            .oneshot(post_json("/calculate/form", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: CalculationResponse = body_json(response).await;
        let breakdown = &body.result.breakdown;
        assert_eq!(breakdown.rates.hourly_after_fee, dec("47"));
        assert_eq!(breakdown.stipend.weekly_non_taxable, dec("140"));
        assert_eq!(body.result.write_back.pay_ot, dec("45"));
        assert_eq!(body.result.write_back.sick_hours, Some(dec("15.6")));
    }

    #[tokio::test]
    async fn test_clients_are_sorted_with_fees() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/clients")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ClientsResponse = body_json(response).await;
        assert_eq!(body.clients.len(), 12);

        let names: Vec<&str> = body.clients.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let simplifi = body.clients.iter().find(|c| c.name == "SimpliFI").unwrap();
        assert_eq!(simplifi.fee, dec("0.06"));
    }

    #[tokio::test]
    async fn test_defaults_are_an_empty_form() {
        let router = create_router(AppState::new(EngineConfig::sample()));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/defaults")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: DefaultsResponse = body_json(response).await;
        assert_eq!(body.input.schedule_days, Some(dec("5")));
        assert_eq!(body.input.bill_regular, Decimal::ZERO);
        assert_eq!(body.display["margin_hourly"], "$0.00");
        assert_eq!(body.result.gauge.value_text, "$0.00/hr");
    }
}
