//! Resource clients, one per API family.
//!
//! Each client holds a shared [`crate::client::ApiClient`] plus base URLs
//! computed lazily in its constructor from the injected configuration.
//! Clients map one expected status code per operation to a success value and
//! turn everything else into [`crate::error::ApiError::Api`].

use crate::error::ApiError;
use reqwest::Response;
use tracing::error;

/// File storage and sharing
pub mod files;
/// Scheduled tasks
pub mod schedule;
/// Teacher/student relationships
pub mod students;
/// Legacy web apps
pub mod webapp;
/// Websites (v1 API)
pub mod website;

/// Consumes an unexpected response into the generic API error, keeping the
/// URL, status and body text for diagnostics.
pub(crate) async fn unexpected_response(url: &str, response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!("{} failed with status {}: {}", url, status, body);
    ApiError::Api {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    }
}
