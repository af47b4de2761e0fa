//! Request and response payload types.
//!
//! All entities are remote; these types only model transient payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scheduled task interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// Runs once per hour; `hour` is omitted
    Hourly,
    /// Runs once per day at `hour:minute`
    Daily,
}

/// A scheduled task as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identity
    pub id: u64,
    /// Shell command the task runs
    pub command: String,
    /// Whether the task is active
    pub enabled: bool,
    /// Hourly or daily
    pub interval: Interval,
    /// Hour of day (24h); present for daily tasks only
    pub hour: Option<u8>,
    /// Minute of the hour
    pub minute: u8,
}

/// Parameters for creating or updating a scheduled task.
///
/// The remote API enforces which fields are required for which operation
/// (create wants command, enabled, interval and minute; update takes any
/// subset; hourly tasks omit `hour`), so every field is optional here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskParams {
    /// Shell command the task runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Whether the task is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Hourly or daily
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    /// Hour of day (24h), daily tasks only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<u8>,
    /// Minute of the hour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<u8>,
}

/// A student account linked to this (teacher) account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Student username
    pub username: String,
}

/// Response of the students list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentList {
    /// Students related to this account
    pub students: Vec<Student>,
}

/// One entry in a directory listing from the files path endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// "file" or "directory"
    #[serde(rename = "type")]
    pub kind: String,
    /// API URL of the entry
    pub url: String,
}

/// Contents behind a files path: a directory listing or raw file bytes
#[derive(Debug, Clone, PartialEq)]
pub enum PathContents {
    /// Directory listing, name to metadata
    Directory(HashMap<String, DirectoryEntry>),
    /// Raw file contents
    File(Vec<u8>),
}

/// Outcome of a sharing request for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingStatus {
    /// The file was already shared (200)
    AlreadyShared,
    /// Sharing was just enabled (201)
    SuccessfullyShared,
}

impl SharingStatus {
    /// Human-readable form used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            SharingStatus::AlreadyShared => "was already shared",
            SharingStatus::SuccessfullyShared => "successfully shared",
        }
    }
}

/// Webapp block inside a website payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteWebapp {
    /// Command serving the website
    pub command: String,
}

/// A website as returned by the v1 API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    /// Domain name; this is the website's identity
    pub domain_name: String,
    /// Whether the website is enabled
    pub enabled: bool,
    /// Serving configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webapp: Option<WebsiteWebapp>,
}

/// Body for creating a website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWebsiteRequest {
    /// Domain name for the new website
    pub domain_name: String,
    /// Created enabled
    pub enabled: bool,
    /// Serving configuration
    pub webapp: WebsiteWebapp,
}

/// SSL certificate information for a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslInfo {
    /// Certificate expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after: Option<DateTime<Utc>>,
    /// Certificate issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    /// Certificate subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    /// Certificate type, e.g. "letsencrypt-auto-renew"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_type: Option<String>,
}

/// Web app and website log categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    /// HTTP access log
    Access,
    /// Application error log
    Error,
    /// Server process log
    Server,
}

impl LogType {
    /// Log filename component ("access", "error", "server")
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Access => "access",
            LogType::Error => "error",
            LogType::Server => "server",
        }
    }

    /// Parses a filename component into a log type
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "access" => Some(LogType::Access),
            "error" => Some(LogType::Error),
            "server" => Some(LogType::Server),
            _ => None,
        }
    }
}

/// Rotation indexes present per log category.
///
/// Index 0 is the current log, 1 the previous one, N the `.N.gz` archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogInfo {
    /// Access log rotation indexes
    pub access: Vec<u32>,
    /// Error log rotation indexes
    pub error: Vec<u32>,
    /// Server log rotation indexes
    pub server: Vec<u32>,
}
