//! Crate-wide error type.
//!
//! Every remote failure carries the offending URL, the response status and
//! the response body text for diagnostics.  Nothing is retried.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API token configured; the message explains how to create one
    #[error("no api token: {0}")]
    NoToken(String),

    /// The API answered 401; carries the response body text
    #[error("authentication error 401 calling api: {0}")]
    AuthenticationFailed(String),

    /// Any unexpected status code from the API
    #[error("{url} failed with status {status}: {body}")]
    Api {
        /// URL of the failed request
        url: String,
        /// HTTP status code returned
        status: u16,
        /// Response body text
        body: String,
    },

    /// Creating a website whose domain already exists
    #[error("domain already exists")]
    DomainAlreadyExists,

    /// Pre-flight check failed before any state was changed
    #[error("sanity check failed: {0}")]
    Sanity(String),

    /// Caller-supplied value the client refuses to send
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Contact form field(s) out of bounds; one message per failed field
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// HTTP transport error
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Database error from the contact store
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": messages })),
            )
                .into_response(),
            other => {
                error!("request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
