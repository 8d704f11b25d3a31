//! Health check endpoint handlers.
//!
//! Provides simple health check endpoints for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fundation_search::SearchEngine;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Asks the search engine for its health.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - The engine is reachable and healthy
/// - `503 Service Unavailable` - The engine is unreachable or unhealthy
pub async fn health_handler<E>(State(state): State<AppState<E>>) -> RestResult<Response>
where
    E: SearchEngine + 'static,
{
    debug!("Processing health check request");

    let engine = state.search().engine();

    if let Err(err) = engine.health_check().await {
        warn!(engine = engine.engine_name(), error = %err, "Health check failed");
        return Err(RestError::ServiceUnavailable {
            message: err.to_string(),
        });
    }

    let health_response = serde_json::json!({
        "status": "healthy",
        "engine": engine.engine_name(),
        "model": state.search().name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
