//! Contact record persistence.

use crate::contact::ContactForm;
use crate::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A persisted contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    /// Auto-generated identifier
    pub id: i64,
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub content: String,
    /// Sender phone number
    pub number: String,
}

/// Storage seam for contact messages; lets the handler be tested without a
/// live database
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Inserts a validated submission, returning the new record's id
    async fn insert(&self, form: &ContactForm) -> Result<i64, ApiError>;
}

/// Postgres-backed contact store
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    /// Creates a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(&self, form: &ContactForm) -> Result<i64, ApiError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO contacts (name, email, content, number) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.content)
        .bind(&form.number)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }
}
