//! Events service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        apps::{records::AppUuid, repository::PgAppsRepository},
        events::{
            data::{EventFilter, NewEvent},
            errors::EventsServiceError,
            records::{EventRecord, EventUuid},
            repository::PgEventsRepository,
        },
        lifecycle,
    },
    timestamps,
};

#[derive(Debug, Clone)]
pub struct PgEventsService {
    db: Db,
    apps_repository: PgAppsRepository,
    events_repository: PgEventsRepository,
}

impl PgEventsService {
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
impl EventsService for PgEventsService {
    async fn create_event(&self, event: NewEvent) -> Result<EventRecord, EventsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let app = self
            .apps_repository
            .lock_app_for_share(&mut tx, event.app_uuid)
            .await?;

        lifecycle::ensure_accepts_events(app.as_ref())?;

        let record = EventRecord {
            uuid: EventUuid::new(),
            app_uuid: event.app_uuid,
            url_host: event.url_host,
            url_path: event.url_path,
            url_query: event.url_query,
            event_name: event.event_name,
            created_at: timestamps::now_truncated(),
        };

        let created = self.events_repository.create_event(&mut tx, &record).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_events(&self, filter: EventFilter) -> Result<Vec<EventRecord>, EventsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let events = self.events_repository.list_events(&mut tx, &filter).await?;

        tx.commit().await?;

        if filter.is_filtered() && events.is_empty() {
            return Err(EventsServiceError::NotFound);
        }

        Ok(events)
    }

    async fn delete_app_events(
        &self,
        app: AppUuid,
    ) -> Result<Vec<EventRecord>, EventsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let locked = self.apps_repository.lock_app_for_update(&mut tx, app).await?;

        lifecycle::ensure_events_clearable(locked.as_ref())?;

        let deleted = self.events_repository.delete_app_events(&mut tx, app).await?;

        if deleted.is_empty() {
            return Err(EventsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait EventsService: Send + Sync {
    /// Records an event against an existing, active app.
    async fn create_event(&self, event: NewEvent) -> Result<EventRecord, EventsServiceError>;

    /// Lists events matching every supplied criterion.
    ///
    /// Filtered queries without matches fail with `NotFound`; an unfiltered query
    /// over an empty table returns an empty list.
    async fn list_events(&self, filter: EventFilter) -> Result<Vec<EventRecord>, EventsServiceError>;

    /// Deletes every event of a deactivated app, returning the deleted events.
    async fn delete_app_events(&self, app: AppUuid)
    -> Result<Vec<EventRecord>, EventsServiceError>;
}
