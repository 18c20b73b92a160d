//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{CalculationMethod, PayMonth};

use super::request::{BatchSalaryRequest, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse, BatchEntryResponse, BatchSalaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary/standard", post(standard_salary_handler))
        .route("/salary/worked-days", post(worked_days_salary_handler))
        .route("/salary/batch", post(batch_salary_handler))
        .with_state(state)
}

/// Handler for POST /salary/standard.
async fn standard_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    run_salary_calculation(state, payload, CalculationMethod::Standard).await
}

/// Handler for POST /salary/worked-days.
async fn worked_days_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    run_salary_calculation(state, payload, CalculationMethod::WorkedDays).await
}

/// Shared body of the two single-employee endpoints.
async fn run_salary_calculation(
    state: AppState,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
    method: CalculationMethod,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        method = %method,
        "Processing salary calculation request"
    );

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match state
        .engine()
        .compute_salary(&request.employee_id, request.month, request.year, method)
        .await
    {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %breakdown.employee_id,
                net_salary = %breakdown.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Salary calculation request completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdown),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Salary calculation request failed"
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

/// Handler for POST /salary/batch.
async fn batch_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch salary request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Reject an out-of-range month before spawning any per-employee work.
    if let Err(err) = PayMonth::new(request.year, request.month) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Batch salary request rejected"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let start_time = Instant::now();
    let outcomes = state
        .engine()
        .compute_batch(
            &request.employee_ids,
            request.month,
            request.year,
            request.method,
        )
        .await;

    let mut failed = 0usize;
    let mut results = Vec::with_capacity(outcomes.len());
    for (employee_id, outcome) in outcomes {
        match outcome {
            Ok(breakdown) => results.push(BatchEntryResponse {
                employee_id,
                result: Some(breakdown),
                error: None,
            }),
            Err(err) => {
                failed += 1;
                let api_error: ApiErrorResponse = err.into();
                results.push(BatchEntryResponse {
                    employee_id,
                    result: None,
                    error: Some(api_error.error),
                });
            }
        }
    }

    info!(
        correlation_id = %correlation_id,
        employees = results.len(),
        failed = failed,
        duration_us = start_time.elapsed().as_micros(),
        "Batch salary request completed"
    );

    let response = BatchSalaryResponse {
        month: request.month,
        year: request.year,
        results,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Maps a JSON extraction failure to the API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
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
    }
}
