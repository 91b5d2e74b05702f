//! HTTP request handlers for the allocation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run_settlement;
use crate::config::SettlementPolicy;
use crate::models::SettlementSnapshot;

use super::request::SettlementRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/settle", post(settle_handler))
        .with_state(state)
}

/// Handler for POST /settle endpoint.
///
/// Accepts a snapshot of the organization's data and returns the full
/// settlement run: per-project settlements, reward distributions, and the
/// aggregates over settled projects.
async fn settle_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking.
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    // Handle JSON parsing errors.
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde.
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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

    // Apply the per-request minutes mode override, if any.
    let config = state.config();
    let policy = match request.minutes_mode {
        Some(mode) => SettlementPolicy {
            minutes_mode: mode,
            ..config.policy().clone()
        },
        None => config.policy().clone(),
    };

    let snapshot: SettlementSnapshot = request.into();
    if let Err(err) = snapshot.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Snapshot validation failed");
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let run = run_settlement(&snapshot, config.work_hours(), config.holidays(), &policy);
    info!(
        correlation_id = %correlation_id,
        run_id = %run.run_id,
        projects = run.settlements.len(),
        settled = run.organization.settled_project_count,
        duration_us = run.duration_us,
        "Settlement run completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(run),
    )
        .into_response()
}
