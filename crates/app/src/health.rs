//! Readiness checks

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::database::Db;

#[derive(Debug, Error)]
pub enum ReadinessError {
    #[error("database unavailable")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct PgReadinessService {
    db: Db,
}

impl PgReadinessService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadinessService for PgReadinessService {
    async fn check(&self) -> Result<(), ReadinessError> {
        self.db.ping().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ReadinessService: Send + Sync {
    /// Succeeds when the store answers a trivial query.
    async fn check(&self) -> Result<(), ReadinessError>;
}
