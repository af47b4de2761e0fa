//! Scheduled tasks client.

use crate::api::unexpected_response;
use crate::client::ApiClient;
use crate::endpoints::Flavor;
use crate::error::ApiError;
use crate::model::{Task, TaskParams};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the scheduled tasks API
///
/// Supported operations: list, get by id, create, update (PATCH), delete.
/// Task identity is server-assigned.
pub struct Schedule {
    client: Arc<ApiClient>,
    base_url: String,
}

impl Schedule {
    /// Creates a new scheduled tasks client
    pub fn new(client: Arc<ApiClient>) -> Self {
        let base_url = client.config().api_endpoint(Flavor::Schedule);
        Self { client, base_url }
    }

    fn task_url(&self, task_id: u64) -> String {
        format!("{}{}/", self.base_url, task_id)
    }

    /// Creates a new scheduled task; expects 201
    pub async fn create(&self, params: &TaskParams) -> Result<Task, ApiError> {
        info!("Creating scheduled task");
        let response = self.client.post_json(&self.base_url, params).await?;
        if response.status() == StatusCode::CREATED {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&self.base_url, response).await)
    }

    /// Lists all scheduled tasks; expects 200
    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        debug!("Listing scheduled tasks");
        let response = self.client.get(&self.base_url).await?;
        if response.status() == StatusCode::OK {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&self.base_url, response).await)
    }

    /// Gets one task by id; expects 200
    pub async fn get(&self, task_id: u64) -> Result<Task, ApiError> {
        let url = self.task_url(task_id);
        let response = self.client.get(&url).await?;
        if response.status() == StatusCode::OK {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Updates an existing task; expects 200.
    ///
    /// To keep an hourly task hourly, leave `hour` unset; switching a task
    /// from hourly to daily requires it.
    pub async fn update(&self, task_id: u64, params: &TaskParams) -> Result<Task, ApiError> {
        let url = self.task_url(task_id);
        info!("Updating scheduled task {}", task_id);
        let response = self.client.patch_json(&url, params).await?;
        if response.status() == StatusCode::OK {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Deletes a task by id; 204 yields `true`
    pub async fn delete(&self, task_id: u64) -> Result<bool, ApiError> {
        let url = self.task_url(task_id);
        info!("Deleting scheduled task {}", task_id);
        let response = self.client.delete(&url).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(true);
        }
        Err(unexpected_response(&url, response).await)
    }
}
