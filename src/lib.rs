//! Client for the PythonAnywhere API
//!
//! This crate provides typed access to the PythonAnywhere REST API: files,
//! scheduled tasks, students, web apps and websites.  All requests are
//! authenticated with a static API token and issued through a single
//! [`client::ApiClient`].  Configuration is read once from the environment
//! into a [`config::Config`] and injected into every client, so nothing in
//! the request path touches ambient process state.
//!
//! It also ships a small contact-form service (axum + sqlx) under
//! [`contact`], used by the project's public site.
//!
//! # Example
//! ```ignore
//! use pythonanywhere_client::config::Config;
//! use pythonanywhere_client::client::ApiClient;
//! use pythonanywhere_client::api::schedule::Schedule;
//! use std::sync::Arc;
//!
//! let config = Arc::new(Config::from_env());
//! let client = Arc::new(ApiClient::new(config)?);
//! let schedule = Schedule::new(client);
//! let tasks = schedule.list().await?;
//! ```

/// Resource clients, one per API family
pub mod api;
/// Token-authenticated HTTP request sender
pub mod client;
/// Environment-driven configuration
pub mod config;
/// Fixed platform constants (python versions, default domain)
pub mod constants;
/// Contact form route and store
pub mod contact;
/// API endpoint resolution per resource family
pub mod endpoints;
/// Crate-wide error type
pub mod error;
/// Request and response payload types
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Env and logging helpers
pub mod utils;

/// Library version, taken from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
