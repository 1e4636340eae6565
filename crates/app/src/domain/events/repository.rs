//! Events Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    apps::records::AppUuid,
    events::{
        data::EventFilter,
        records::{EventRecord, EventUuid},
    },
};

const CREATE_EVENT_SQL: &str = include_str!("sql/create_event.sql");
const LIST_EVENTS_SQL: &str = include_str!("sql/list_events.sql");
const APP_HAS_EVENTS_SQL: &str = include_str!("sql/app_has_events.sql");
const DELETE_APP_EVENTS_SQL: &str = include_str!("sql/delete_app_events.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEventsRepository;

impl PgEventsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: &EventRecord,
    ) -> Result<EventRecord, sqlx::Error> {
        query_as::<Postgres, EventRecord>(CREATE_EVENT_SQL)
            .bind(event.uuid.into_uuid())
            .bind(event.app_uuid.into_uuid())
            .bind(&event.url_host)
            .bind(&event.url_path)
            .bind(&event.url_query)
            .bind(&event.event_name)
            .bind(SqlxTimestamp::from(event.created_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_events(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &EventFilter,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        query_as::<Postgres, EventRecord>(LIST_EVENTS_SQL)
            .bind(filter.app.map(AppUuid::into_uuid))
            .bind(filter.url_host.as_deref())
            .bind(filter.url_path.as_deref())
            .bind(filter.url_query.as_deref())
            .bind(filter.event_name.as_deref())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn app_has_events(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        app: AppUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(APP_HAS_EVENTS_SQL)
            .bind(app.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_app_events(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        app: AppUuid,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        let mut deleted = query_as::<Postgres, EventRecord>(DELETE_APP_EVENTS_SQL)
            .bind(app.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        // RETURNING carries no ordering guarantee.
        deleted.sort_by_key(|event| (event.created_at, event.uuid.into_uuid()));

        Ok(deleted)
    }
}

impl<'r> FromRow<'r, PgRow> for EventRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: EventUuid::from_uuid(row.try_get::<Uuid, _>("event_id")?),
            app_uuid: AppUuid::from_uuid(row.try_get::<Uuid, _>("app_id")?),
            url_host: row.try_get("url_host")?,
            url_path: row.try_get("url_path")?,
            url_query: row.try_get("url_query")?,
            event_name: row.try_get("event_name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
