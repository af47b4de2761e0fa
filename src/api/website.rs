//! Websites client (v1 family).
//!
//! SSL operations go through the `domains` family, which shares the v1
//! prefix with `websites`.

use crate::api::unexpected_response;
use crate::client::ApiClient;
use crate::constants::DUPLICATE_DOMAIN_PHRASE;
use crate::endpoints::Flavor;
use crate::error::ApiError;
use crate::model::{CreateWebsiteRequest, SslInfo, Website, WebsiteWebapp};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

/// Whether a 400 body reports a duplicate-domain conflict.
///
/// The API signals this only through its error message, so the string match
/// lives behind this one predicate; swap it for a structured code check if
/// the API ever grows one.
pub fn is_duplicate_domain(body: &str) -> bool {
    body.contains(DUPLICATE_DOMAIN_PHRASE)
}

/// Client for the websites API
pub struct Websites {
    client: Arc<ApiClient>,
    websites_base_url: String,
    domains_base_url: String,
}

impl Websites {
    /// Creates a new websites client
    pub fn new(client: Arc<ApiClient>) -> Self {
        let websites_base_url = client.config().api_endpoint(Flavor::Websites);
        let domains_base_url = client.config().api_endpoint(Flavor::Domains);
        Self {
            client,
            websites_base_url,
            domains_base_url,
        }
    }

    /// Creates a new website serving `domain_name` with `command`.
    ///
    /// A 400 reporting a duplicate domain becomes
    /// [`ApiError::DomainAlreadyExists`]; any other unexpected status is the
    /// generic API error.
    pub async fn create(&self, domain_name: &str, command: &str) -> Result<Website, ApiError> {
        info!("Creating website for {}", domain_name);
        let request = CreateWebsiteRequest {
            domain_name: domain_name.to_string(),
            enabled: true,
            webapp: WebsiteWebapp {
                command: command.to_string(),
            },
        };
        let response = self
            .client
            .post_json(&self.websites_base_url, &request)
            .await?;
        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            if is_duplicate_domain(&body) {
                return Err(ApiError::DomainAlreadyExists);
            }
            return Err(ApiError::Api {
                url: self.websites_base_url.clone(),
                status: status.as_u16(),
                body,
            });
        }
        if !status.is_success() {
            return Err(unexpected_response(&self.websites_base_url, response).await);
        }
        Ok(response.json().await?)
    }

    /// Gets info for one website; expects 200
    pub async fn get(&self, domain_name: &str) -> Result<Website, ApiError> {
        let url = format!("{}{}/", self.websites_base_url, domain_name);
        let response = self.client.get(&url).await?;
        if response.status() == StatusCode::OK {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Lists all websites; expects 200
    pub async fn list(&self) -> Result<Vec<Website>, ApiError> {
        let response = self.client.get(&self.websites_base_url).await?;
        if response.status() == StatusCode::OK {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&self.websites_base_url, response).await)
    }

    /// Reloads the website
    pub async fn reload(&self, domain_name: &str) -> Result<Value, ApiError> {
        info!("Reloading {}", domain_name);
        let url = format!("{}{}/reload/", self.websites_base_url, domain_name);
        let response = self.client.post_empty(&url).await?;
        if response.status().is_success() {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Creates and applies a Let's Encrypt certificate for `domain_name`
    pub async fn auto_ssl(&self, domain_name: &str) -> Result<Value, ApiError> {
        info!("Requesting auto-renewed certificate for {}", domain_name);
        let url = format!("{}{}/ssl/", self.domains_base_url, domain_name);
        let response = self
            .client
            .post_json(&url, &json!({ "cert_type": "letsencrypt-auto-renew" }))
            .await?;
        if response.status().is_success() {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Gets SSL certificate info for `domain_name`
    pub async fn get_ssl_info(&self, domain_name: &str) -> Result<SslInfo, ApiError> {
        let url = format!("{}{}/ssl/", self.domains_base_url, domain_name);
        let response = self.client.get(&url).await?;
        if response.status().is_success() {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Deletes the website for `domain_name`.
    ///
    /// Returns empty success regardless of response body; only transport and
    /// authentication failures surface.
    pub async fn delete(&self, domain_name: &str) -> Result<(), ApiError> {
        info!("Deleting website for {}", domain_name);
        let url = format!("{}{}/", self.websites_base_url, domain_name);
        self.client.delete(&url).await?;
        Ok(())
    }
}
