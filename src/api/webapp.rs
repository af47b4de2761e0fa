//! Web apps client (legacy v0 family).
//!
//! A [`Webapp`] is bound to one domain; the domain is the webapp's identity.
//! Log files live under `/var/log/` and follow the fixed naming convention
//! `<domain>.<type>.log[.N[.gz]]` with type one of access/error/server.

use crate::api::unexpected_response;
use crate::client::ApiClient;
use crate::endpoints::Flavor;
use crate::error::ApiError;
use crate::model::{LogInfo, LogType, SslInfo};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};

/// Client for the webapps API, scoped to a single domain
pub struct Webapp {
    client: Arc<ApiClient>,
    domain: String,
    files_url: String,
    webapps_url: String,
    domain_url: String,
}

impl Webapp {
    /// Creates a new webapp client for `domain`
    pub fn new(client: Arc<ApiClient>, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let files_url = client.config().api_endpoint(Flavor::Files);
        let webapps_url = client.config().api_endpoint(Flavor::Webapps);
        let domain_url = format!("{webapps_url}{domain}/");
        Self {
            client,
            domain,
            files_url,
            webapps_url,
            domain_url,
        }
    }

    /// The domain this client is bound to
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Checks that a token is configured and that no webapp exists yet for
    /// this domain (unless `nuke` replaces it anyway).
    pub async fn sanity_checks(&self, nuke: bool) -> Result<(), ApiError> {
        info!("Running API sanity checks for {}", self.domain);
        if self.client.config().token.is_none() {
            return Err(ApiError::Sanity(
                "Could not find your API token.\n\
                 You may need to create it on the Accounts page?\n\
                 You will also need to close this console and open a new one once you've done that."
                    .to_string(),
            ));
        }
        if nuke {
            return Ok(());
        }
        let response = self.client.get(&self.domain_url).await?;
        if response.status() == StatusCode::OK {
            return Err(ApiError::Sanity(format!(
                "You already have a webapp for {}.\n\nUse the --nuke option if you want to replace it.",
                self.domain
            )));
        }
        Ok(())
    }

    /// Creates a webapp for this domain with the given python version,
    /// virtualenv and source directory.  With `nuke`, any existing webapp
    /// for the domain is deleted first.
    pub async fn create(
        &self,
        python_version: &str,
        virtualenv_path: &str,
        project_path: &str,
        nuke: bool,
    ) -> Result<(), ApiError> {
        info!("Creating web app for {} via API", self.domain);
        let slug = crate::constants::python_version_slug(python_version).ok_or_else(|| {
            ApiError::InvalidInput(format!("unsupported python version: {python_version}"))
        })?;

        if nuke {
            self.client.delete(&self.domain_url).await?;
        }

        let response = self
            .client
            .post_form(
                &self.webapps_url,
                &[("domain_name", self.domain.as_str()), ("python_version", slug)],
            )
            .await?;
        if !response.status().is_success() {
            return Err(unexpected_response(&self.webapps_url, response).await);
        }
        let status = response.status().as_u16();
        let body: Value = response.json().await?;
        if body["status"].as_str() == Some("ERROR") {
            return Err(ApiError::Api {
                url: self.webapps_url.clone(),
                status,
                body: body.to_string(),
            });
        }

        let response = self
            .client
            .patch_form(
                &self.domain_url,
                &[
                    ("virtualenv_path", virtualenv_path),
                    ("source_directory", project_path),
                ],
            )
            .await?;
        if !response.status().is_success() {
            return Err(unexpected_response(&self.domain_url, response).await);
        }
        Ok(())
    }

    /// Adds the default static files mappings for `/static/` and `/media/`
    pub async fn add_default_static_files_mappings(
        &self,
        project_path: &str,
    ) -> Result<(), ApiError> {
        info!("Adding static files mappings for /static/ and /media/");
        let url = format!("{}static_files/", self.domain_url);
        self.client
            .post_json(
                &url,
                &json!({ "url": "/static/", "path": format!("{project_path}/static") }),
            )
            .await?;
        self.client
            .post_json(
                &url,
                &json!({ "url": "/media/", "path": format!("{project_path}/media") }),
            )
            .await?;
        Ok(())
    }

    /// Reloads the webapp.
    ///
    /// A 409 whose body reports `cname_error` is tolerated with a warning:
    /// domains pointed at the platform through an A record or a CDN have no
    /// CNAME the platform can see, and still reload fine.
    pub async fn reload(&self) -> Result<(), ApiError> {
        info!("Reloading {} via API", self.domain);
        let url = format!("{}reload/", self.domain_url);
        let response = self.client.post_empty(&url).await?;
        if response.status().is_success() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::CONFLICT {
            let kind = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v["error"].as_str().map(|s| s.to_string()));
            if kind.as_deref() == Some("cname_error") {
                warn!(
                    "Could not find a CNAME for {}; if the domain points here via an A record or a CDN that is fine, otherwise double-check the DNS setup",
                    self.domain
                );
                return Ok(());
            }
        }
        Err(ApiError::Api {
            url,
            status: status.as_u16(),
            body,
        })
    }

    /// Sets the SSL certificate and private key for the webapp
    pub async fn set_ssl(&self, certificate: &str, private_key: &str) -> Result<(), ApiError> {
        info!("Setting up SSL for {} via API", self.domain);
        let url = format!("{}ssl/", self.domain_url);
        let response = self
            .client
            .post_json(&url, &json!({ "cert": certificate, "private_key": private_key }))
            .await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Gets SSL certificate info, including the parsed expiry
    pub async fn get_ssl_info(&self) -> Result<SslInfo, ApiError> {
        let url = format!("{}ssl/", self.domain_url);
        let response = self.client.get(&url).await?;
        if response.status().is_success() {
            return Ok(response.json().await?);
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Deletes one log file: index 0 is the current log, 1 the previous
    /// (`.log.1`), higher indexes the compressed archives (`.log.N.gz`).
    pub async fn delete_log(&self, log_type: LogType, index: u32) -> Result<(), ApiError> {
        if index > 0 {
            info!(
                "Deleting old (archive number {}) {} log file for {} via API",
                index,
                log_type.as_str(),
                self.domain
            );
        } else {
            info!(
                "Deleting current {} log file for {} via API",
                log_type.as_str(),
                self.domain
            );
        }
        let suffix = match index {
            0 => String::new(),
            1 => ".1".to_string(),
            n => format!(".{n}.gz"),
        };
        let url = format!(
            "{}path/var/log/{}.{}.log{}/",
            self.files_url,
            self.domain,
            log_type.as_str(),
            suffix
        );
        let response = self.client.delete(&url).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(unexpected_response(&url, response).await)
    }

    /// Lists `/var/log/` and derives which rotation indexes exist per log
    /// category for this domain
    pub async fn get_log_info(&self) -> Result<LogInfo, ApiError> {
        let url = format!("{}tree/?path=/var/log/", self.files_url);
        let response = self.client.get(&url).await?;
        if !response.status().is_success() {
            return Err(unexpected_response(&url, response).await);
        }
        let file_list: Vec<Value> = response.json().await?;
        Ok(parse_log_info(
            &self.domain,
            file_list.iter().filter_map(|v| v.as_str()),
        ))
    }
}

/// Parses `/var/log/` filenames into per-category rotation index lists.
///
/// Filenames that don't belong to `domain`, name an unknown category, or
/// carry an unrecognised suffix are skipped.
pub fn parse_log_info<'a>(
    domain: &str,
    file_names: impl IntoIterator<Item = &'a str>,
) -> LogInfo {
    let mut logs = LogInfo::default();
    let prefix = format!("/var/log/{domain}.");
    for name in file_names {
        let Some(rest) = name.strip_prefix(prefix.as_str()) else {
            continue;
        };
        let parts: Vec<&str> = rest.split('.').collect();
        let Some(log_type) = LogType::from_str_opt(parts[0]) else {
            continue;
        };
        let index = match *parts.last().unwrap_or(&"") {
            "log" => 0,
            "1" => 1,
            "gz" => {
                match parts
                    .len()
                    .checked_sub(2)
                    .and_then(|i| parts[i].parse::<u32>().ok())
                {
                    Some(n) => n,
                    None => continue,
                }
            }
            _ => continue,
        };
        match log_type {
            LogType::Access => logs.access.push(index),
            LogType::Error => logs.error.push(index),
            LogType::Server => logs.server.push(index),
        }
    }
    logs
}
