//! Files client.
//!
//! Covers the path endpoint (get/upload/delete), the sharing endpoint and
//! the tree endpoint.  Paths are absolute path strings; contents are opaque
//! bytes or a directory listing, always fetched fresh.

use crate::client::ApiClient;
use crate::endpoints::Flavor;
use crate::error::ApiError;
use crate::model::{PathContents, SharingStatus};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info};

fn is_json_response(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Builds the generic API error for a failed files call.  When the failure
/// body is JSON, the `detail`/`message`/`error` field replaces the raw text.
/// TODO: error responses should be unified at the API side.
async fn unexpected_files_response(url: &str, response: Response) -> ApiError {
    let status = response.status();
    let json = is_json_response(&response);
    let body = response.text().await.unwrap_or_default();
    let body = if json {
        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                ["detail", "message", "error"].iter().find_map(|key| {
                    v.get(key)
                        .and_then(|d| d.as_str())
                        .map(|s| s.to_string())
                })
            })
            .unwrap_or(body)
    } else {
        body
    };
    error!("{} failed with status {}: {}", url, status, body);
    ApiError::Api {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    }
}

/// Client for the files API
pub struct Files {
    client: Arc<ApiClient>,
    base_url: String,
    path_endpoint: String,
    sharing_endpoint: String,
    tree_endpoint: String,
}

impl Files {
    /// Creates a new files client
    pub fn new(client: Arc<ApiClient>) -> Self {
        let base_url = client.config().api_endpoint(Flavor::Files);
        let path_endpoint = format!("{base_url}path");
        let sharing_endpoint = format!("{base_url}sharing/");
        let tree_endpoint = format!("{base_url}tree/");
        Self {
            client,
            base_url,
            path_endpoint,
            sharing_endpoint,
            tree_endpoint,
        }
    }

    /// Joins a sharing URL suffix onto the site root (everything before
    /// `/api/` in the base URL).
    fn make_sharing_url(&self, suffix: &str) -> String {
        let root = self
            .base_url
            .split("/api/")
            .next()
            .unwrap_or_default();
        format!("{root}{suffix}")
    }

    /// Fetches the contents behind an absolute `path`: a directory listing
    /// (JSON) or raw file bytes, distinguished by response content type.
    pub async fn path_get(&self, path: &str) -> Result<PathContents, ApiError> {
        let url = format!("{}{}", self.path_endpoint, path);
        let response = self.client.get(&url).await?;
        if response.status() == StatusCode::OK {
            if is_json_response(&response) {
                return Ok(PathContents::Directory(response.json().await?));
            }
            return Ok(PathContents::File(response.bytes().await?.to_vec()));
        }
        Err(unexpected_files_response(&url, response).await)
    }

    /// Uploads `content` to `dest_path`, creating missing directories.
    ///
    /// Returns 200 when an existing file was updated, 201 when the file was
    /// created.
    pub async fn path_post(&self, dest_path: &str, content: Vec<u8>) -> Result<u16, ApiError> {
        let url = format!("{}{}", self.path_endpoint, dest_path);
        info!("Uploading {} bytes to {}", content.len(), dest_path);
        let response = self.client.post_file(&url, content).await?;
        if response.status().is_success() {
            return Ok(response.status().as_u16());
        }
        Err(unexpected_files_response(&url, response).await)
    }

    /// Deletes the file or directory at `path`; 204 expected
    pub async fn path_delete(&self, path: &str) -> Result<u16, ApiError> {
        let url = format!("{}{}", self.path_endpoint, path);
        info!("Deleting {}", path);
        let response = self.client.delete(&url).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(response.status().as_u16());
        }
        Err(unexpected_files_response(&url, response).await)
    }

    /// Starts sharing the file at `path`.
    ///
    /// Returns the sharing status (201 just shared, 200 already shared) and
    /// the full sharing link.
    pub async fn sharing_post(&self, path: &str) -> Result<(SharingStatus, String), ApiError> {
        let response = self
            .client
            .post_json(&self.sharing_endpoint, &json!({ "path": path }))
            .await?;
        let status = match response.status() {
            StatusCode::OK => SharingStatus::AlreadyShared,
            StatusCode::CREATED => SharingStatus::SuccessfullyShared,
            _ => return Err(unexpected_files_response(&self.sharing_endpoint, response).await),
        };
        let body: Value = response.json().await?;
        let suffix = body["url"].as_str().unwrap_or_default();
        Ok((status, self.make_sharing_url(suffix)))
    }

    /// Returns the sharing link for `path`, or `None` when not shared
    pub async fn sharing_get(&self, path: &str) -> Result<Option<String>, ApiError> {
        let url = format!("{}?path={}", self.sharing_endpoint, path);
        let response = self.client.get(&url).await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let body: Value = response.json().await?;
        let suffix = body["url"].as_str().unwrap_or_default();
        Ok(Some(self.make_sharing_url(suffix)))
    }

    /// Stops sharing the file at `path`; returns the status code as-is
    /// (204 on successful unshare).
    pub async fn sharing_delete(&self, path: &str) -> Result<u16, ApiError> {
        let url = format!("{}?path={}", self.sharing_endpoint, path);
        let response = self.client.delete(&url).await?;
        Ok(response.status().as_u16())
    }

    /// Lists absolute paths of regular files and subdirectories of the
    /// directory at `path`.  The server caps the result at 1000 entries.
    pub async fn tree_get(&self, path: &str) -> Result<Vec<Value>, ApiError> {
        let url = format!("{}?path={}", self.tree_endpoint, path);
        let response = self.client.get(&url).await?;
        if response.status().is_success() {
            return Ok(response.json().await?);
        }
        Err(unexpected_files_response(&url, response).await)
    }
}
