//! Error types for the search plugin's HTTP layer.
//!
//! The search page itself never surfaces model errors: it renders the empty
//! fallback view instead. [`RestError`] covers everything else that can fail
//! while answering a request (view rendering, health checks) and for hosts
//! that call the model from their own handlers.
//!
//! # Error Mapping
//!
//! | Model Error | HTTP Status |
//! |-------------|-------------|
//! | Validation | 400 |
//! | Engine | 502 |
//! | Config | 500 |
//!
//! Every error is answered with a JSON body:
//!
//! ```json
//! { "error": { "status": 400, "message": "missing required parameter 'index'" } }
//! ```

use std::path::Path;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fundation_search::SearchError;
use serde_json::json;
use thiserror::Error;

/// The primary error type for the plugin's HTTP layer.
#[derive(Debug, Error)]
pub enum RestError {
    /// Bad request - invalid search parameters (HTTP 400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The search engine failed (HTTP 502).
    #[error("Search engine error: {message}")]
    BadGateway {
        /// Error message.
        message: String,
    },

    /// The search engine is unhealthy (HTTP 503).
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// A view could not be rendered (HTTP 500).
    #[error("Failed to render view {view}: {message}")]
    View {
        /// The view being rendered.
        view: String,
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    #[error("Internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Creates a rendering error for `view`.
    pub fn view(view: &Path, message: impl std::fmt::Display) -> Self {
        RestError::View {
            view: view.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::View { .. } | RestError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<SearchError> for RestError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Validation(e) => RestError::BadRequest {
                message: e.to_string(),
            },
            SearchError::Engine(e) => RestError::BadGateway {
                message: e.to_string(),
            },
            SearchError::Config(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = json!({
            "error": {
                "status": status.as_u16(),
                "message": self.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for HTTP handlers.
pub type RestResult<T> = Result<T, RestError>;
