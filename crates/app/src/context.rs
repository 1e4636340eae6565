//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, DatabaseError, DatabaseOptions, Db},
    domain::{
        apps::{AppsService, PgAppsService},
        events::{EventsService, PgEventsService},
    },
    health::{PgReadinessService, ReadinessService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to initialise database")]
    Database(#[from] DatabaseError),
}

#[derive(Clone)]
pub struct AppContext {
    pub apps: Arc<dyn AppsService>,
    pub events: Arc<dyn EventsService>,
    pub readiness: Arc<dyn ReadinessService>,
}

impl AppContext {
    /// Connect to the store, apply migrations when asked to, and wire the services.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection cannot be established within the configured
    /// attempts or when migrations fail.
    pub async fn from_database_options(options: &DatabaseOptions) -> Result<Self, AppInitError> {
        let pool = database::connect_with_retry(options).await?;

        if options.run_migrations {
            info!("applying database migrations");

            database::migrate(&pool).await?;
        }

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            apps: Arc::new(PgAppsService::new(db.clone())),
            events: Arc::new(PgEventsService::new(db.clone())),
            readiness: Arc::new(PgReadinessService::new(db)),
        }
    }
}
