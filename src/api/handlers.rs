//! HTTP request handlers for the Payroll Simulation Engine API.
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
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::simulate_gross_to_net;
use crate::config::RuleSet;

use super::request::SimulationRequestBody;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/simulation/brut-to-net", post(simulate_handler))
        .route("/api/simulation/countries", get(countries_handler))
        .with_state(state)
}

/// Handler for GET / liveness checks.
async fn root_handler() -> &'static str {
    "Payroll simulation engine is running"
}

/// Handler for GET /api/simulation/countries.
///
/// Lists every rule set the engine can apply, ordered by country code.
async fn countries_handler(State(state): State<AppState>) -> Response {
    let countries: Vec<&RuleSet> = state.registry().countries().collect();
    json_response(StatusCode::OK, &countries)
}

/// Handler for POST /api/simulation/brut-to-net.
///
/// Accepts a simulation request and returns the gross-to-net breakdown.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequestBody>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
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
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let start_time = Instant::now();
    let outcome = body
        .into_simulation_request()
        .and_then(|request| simulate_gross_to_net(&request, state.registry()));

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                country = %result.country_code,
                gross = %result.total_gross_with_allowances,
                net = %result.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Simulation completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            if err.is_caller_error() {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Simulation request rejected"
                );
            } else {
                error!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Simulation failed"
                );
            }
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
