//! Token-authenticated request sender.
//!
//! [`ApiClient`] owns the HTTP transport and is the only place that attaches
//! credentials.  It fails early when no token is configured, maps 401 to an
//! authentication error, and otherwise hands the raw response back to the
//! resource clients, which interpret status codes per operation.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::ApiError;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

/// Remediation message for a missing API token.  The wording differs
/// depending on whether the process runs on the platform (where a fresh
/// console picks up the token) or externally (where the user has to export
/// the environment variable themselves).
pub fn helpful_token_error_message(on_site: bool) -> String {
    if on_site {
        "Oops, you don't seem to have an API token.  \
         Please go to the 'Account' page on PythonAnywhere, then to the 'API Token' \
         tab.  Click the 'Create a new API token' button to create the token, then \
         start a new console and try running me again."
            .to_string()
    } else {
        "Oops, you don't seem to have an API_TOKEN environment variable set.  \
         Please go to the 'Account' page on PythonAnywhere, then to the 'API Token' \
         tab.  Click the 'Create a new API token' button to create the token, then \
         use it to set API_TOKEN environmental variable and try running me again."
            .to_string()
    }
}

/// HTTP client for the PythonAnywhere API
///
/// One synchronous-feeling call per invocation: no retries, no pooling
/// policy beyond what reqwest provides, no shared mutable state.
pub struct ApiClient {
    http: HttpClient,
    config: Arc<Config>,
}

impl ApiClient {
    /// Creates a new client from an injected configuration
    ///
    /// TLS certificate verification is disabled only when the config's
    /// explicit insecure flag is set.
    pub fn new(config: Arc<Config>) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if config.insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request
    pub async fn get(&self, url: &str) -> Result<Response, ApiError> {
        self.send(Method::GET, url, self.http.get(url)).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<Response, ApiError> {
        self.send(Method::POST, url, self.http.post(url).json(body))
            .await
    }

    /// Makes a POST request with a form-encoded body
    pub async fn post_form<B: Serialize>(&self, url: &str, body: &B) -> Result<Response, ApiError> {
        self.send(Method::POST, url, self.http.post(url).form(body))
            .await
    }

    /// Makes a POST request without a body
    pub async fn post_empty(&self, url: &str) -> Result<Response, ApiError> {
        self.send(Method::POST, url, self.http.post(url)).await
    }

    /// Makes a POST request uploading `content` as a multipart file field
    pub async fn post_file(&self, url: &str, content: Vec<u8>) -> Result<Response, ApiError> {
        let form = Form::new().part("content", Part::bytes(content));
        self.send(Method::POST, url, self.http.post(url).multipart(form))
            .await
    }

    /// Makes a PATCH request with a form-encoded body
    pub async fn patch_form<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.send(Method::PATCH, url, self.http.patch(url).form(body))
            .await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.send(Method::PATCH, url, self.http.patch(url).json(body))
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, url: &str) -> Result<Response, ApiError> {
        self.send(Method::DELETE, url, self.http.delete(url)).await
    }

    /// Attaches the token and sends the request.
    ///
    /// Callers interpret status codes; only 401 is handled here, because it
    /// means the credentials themselves are bad no matter the operation.
    async fn send(
        &self,
        method: Method,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let token = self
            .config
            .token
            .as_deref()
            .ok_or_else(|| ApiError::NoToken(helpful_token_error_message(self.config.on_site)))?;

        debug!("{} {}", method, url);
        let response = request
            .header("Authorization", format!("Token {token}"))
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            error!("Authentication failed calling {}: {}", url, body);
            return Err(ApiError::AuthenticationFailed(body));
        }

        Ok(response)
    }
}
