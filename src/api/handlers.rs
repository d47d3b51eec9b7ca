//! HTTP request handlers for the shift calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{Datelike, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{blank_month, compute_month, group_by_week, summarize};
use crate::error::{EngineError, EngineResult};
use crate::models::DayEntry;
use crate::registry::ShiftRegistry;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, MonthCalculation, WeekView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a month of day entries and returns the computed week groups and
/// monthly summary.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(&request, state.registry()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                month = request.month,
                entered_days = request.days.len(),
                total_hours = %result.summary.total_hours,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the month calculation for a request.
///
/// Builds the blank month, overlays the supplied entries by date, computes
/// every day against the registry, groups by ISO week and summarizes.
fn perform_calculation(
    request: &CalculationRequest,
    registry: &ShiftRegistry,
) -> EngineResult<MonthCalculation> {
    let mut entries = blank_month(request.year, request.month)?;

    for day in &request.days {
        if day.date.year() != request.year || day.date.month() != request.month {
            return Err(EngineError::InvalidEntry {
                date: day.date,
                message: "outside the requested month".to_string(),
            });
        }
        let entry: DayEntry = day.clone().into();
        entries[day.date.day0() as usize] = entry;
    }

    let results = compute_month(&entries, registry)?;
    let weeks = group_by_week(&results);
    let summary = summarize(&results);

    Ok(MonthCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year: request.year,
        month: request.month,
        weeks: weeks.iter().map(WeekView::from).collect(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let registry = RegistryLoader::load("./config/skc").expect("Failed to load registry");
        AppState::new(registry)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn post_calculate(body: String) -> (StatusCode, Vec<u8>) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = json!({
            "year": 2025,
            "month": 6,
            "days": [
                { "date": "2025-06-02", "codes": "d", "supplemental_hours": "0", "overtime_minutes": 0 }
            ]
        });

        let (status, bytes) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let result: MonthCalculation = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.year, 2025);
        assert_eq!(result.month, 6);
        assert_eq!(result.summary.total_hours, dec("8.00"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, bytes) = post_calculate("{invalid json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_month_field_returns_validation_error() {
        let (status, bytes) = post_calculate(r#"{ "year": 2025 }"#.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_entry_outside_month_returns_400() {
        let body = json!({
            "year": 2025,
            "month": 6,
            "days": [{ "date": "2025-07-01", "codes": "d" }]
        });

        let (status, bytes) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_ENTRY");
    }

    #[tokio::test]
    async fn test_negative_supplemental_returns_invalid_input() {
        let body = json!({
            "year": 2025,
            "month": 6,
            "days": [{ "date": "2025-06-02", "supplemental_hours": "-1.0" }]
        });

        let (status, bytes) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_month_covers_all_calendar_days() {
        let body = json!({ "year": 2025, "month": 6 });
        let (status, bytes) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let result: MonthCalculation = serde_json::from_slice(&bytes).unwrap();
        let day_count: usize = result.weeks.iter().map(|w| w.days.len()).sum();
        assert_eq!(day_count, 30);
    }
}
