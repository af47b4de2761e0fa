//! # Prelude
//!
//! Convenient single import for the types most callers need.
//!
//! ```ignore
//! use pythonanywhere_client::prelude::*;
//!
//! let config = Arc::new(Config::from_env());
//! let client = Arc::new(ApiClient::new(config)?);
//! let websites = Websites::new(client);
//! ```

// Configuration and setup
pub use crate::config::{Config, DatabaseConfig};
pub use crate::{VERSION, version};

// Error handling
pub use crate::error::ApiError;

// Transport and endpoints
pub use crate::client::ApiClient;
pub use crate::endpoints::{Flavor, api_endpoint};

// Resource clients
pub use crate::api::files::Files;
pub use crate::api::schedule::Schedule;
pub use crate::api::students::Students;
pub use crate::api::webapp::Webapp;
pub use crate::api::website::Websites;

// Payload models
pub use crate::model::{
    Interval, LogInfo, LogType, PathContents, SharingStatus, SslInfo, Student, StudentList, Task,
    TaskParams, Website,
};

// Contact form service
pub use crate::contact::{Contact, ContactForm, ContactStore, PgContactStore};

// Utilities
pub use crate::utils::logger::setup_logger;

// Re-exports from external crates
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
