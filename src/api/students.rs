//! Students client.

use crate::api::unexpected_response;
use crate::client::ApiClient;
use crate::endpoints::Flavor;
use crate::error::ApiError;
use crate::model::StudentList;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::info;

/// Client for the students API (list and remove only)
pub struct Students {
    client: Arc<ApiClient>,
    base_url: String,
}

impl Students {
    /// Creates a new students client
    pub fn new(client: Arc<ApiClient>) -> Self {
        let base_url = client.config().api_endpoint(Flavor::Students);
        Self { client, base_url }
    }

    /// Lists students related to this account; expects 200
    pub async fn list(&self) -> Result<StudentList, ApiError> {
        let response = self.client.get(&self.base_url).await?;
        if response.status() == StatusCode::OK {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&self.base_url, response).await)
    }

    /// Removes a student by username; 204 yields the status code
    pub async fn delete(&self, student_username: &str) -> Result<u16, ApiError> {
        let url = format!("{}{}", self.base_url, student_username);
        info!("Removing student {}", student_username);
        let response = self.client.delete(&url).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(response.status().as_u16());
        }
        Err(unexpected_response(&url, response).await)
    }
}
