//! Apps service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        apps::{
            data::{AppFilter, AppUpdate, NewApp},
            errors::AppsServiceError,
            records::{AppRecord, AppUuid},
            repository::PgAppsRepository,
        },
        events::repository::PgEventsRepository,
        lifecycle,
    },
    timestamps,
};

#[derive(Debug, Clone)]
pub struct PgAppsService {
    db: Db,
    apps_repository: PgAppsRepository,
    events_repository: PgEventsRepository,
}

impl PgAppsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            apps_repository: PgAppsRepository::new(),
            events_repository: PgEventsRepository::new(),
        }
    }
}

#[async_trait]
impl AppsService for PgAppsService {
    async fn create_app(&self, app: NewApp) -> Result<AppRecord, AppsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .apps_repository
            .create_app(&mut tx, AppUuid::new(), &app.name, timestamps::now_truncated())
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_app(&self, app: AppUuid) -> Result<AppRecord, AppsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let app = self.apps_repository.get_app(&mut tx, app).await?;

        tx.commit().await?;

        Ok(app)
    }

    async fn list_apps(&self, filter: AppFilter) -> Result<Vec<AppRecord>, AppsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let apps = self.apps_repository.list_apps(&mut tx, &filter).await?;

        tx.commit().await?;

        if filter.is_filtered() && apps.is_empty() {
            return Err(AppsServiceError::NotFound);
        }

        Ok(apps)
    }

    async fn update_app(
        &self,
        app: AppUuid,
        update: AppUpdate,
    ) -> Result<AppRecord, AppsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .apps_repository
            .update_app(&mut tx, app, &update)
            .await?
            .ok_or(AppsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_app(&self, app: AppUuid) -> Result<AppRecord, AppsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let locked = self.apps_repository.lock_app_for_update(&mut tx, app).await?;
        let has_events = self.events_repository.app_has_events(&mut tx, app).await?;

        lifecycle::ensure_deletable(locked.as_ref(), has_events)?;

        let deleted = self
            .apps_repository
            .delete_app(&mut tx, app)
            .await?
            .ok_or(AppsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait AppsService: Send + Sync {
    /// Registers a new, active app.
    async fn create_app(&self, app: NewApp) -> Result<AppRecord, AppsServiceError>;

    /// Retrieve a single app.
    async fn get_app(&self, app: AppUuid) -> Result<AppRecord, AppsServiceError>;

    /// Lists apps matching every supplied criterion.
    ///
    /// Filtered queries without matches fail with `NotFound`; an unfiltered query
    /// over an empty table returns an empty list.
    async fn list_apps(&self, filter: AppFilter) -> Result<Vec<AppRecord>, AppsServiceError>;

    /// Renames and/or (de)activates an app.
    async fn update_app(&self, app: AppUuid, update: AppUpdate)
    -> Result<AppRecord, AppsServiceError>;

    /// Deletes an app that no longer owns events, returning its last state.
    async fn delete_app(&self, app: AppUuid) -> Result<AppRecord, AppsServiceError>;
}
