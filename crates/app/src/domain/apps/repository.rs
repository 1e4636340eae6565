//! Apps Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::apps::{
    data::{AppFilter, AppUpdate},
    records::{AppRecord, AppUuid},
};

const CREATE_APP_SQL: &str = include_str!("sql/create_app.sql");
const GET_APP_SQL: &str = include_str!("sql/get_app.sql");
const LOCK_APP_FOR_SHARE_SQL: &str = include_str!("sql/lock_app_for_share.sql");
const LOCK_APP_FOR_UPDATE_SQL: &str = include_str!("sql/lock_app_for_update.sql");
const LIST_APPS_SQL: &str = include_str!("sql/list_apps.sql");
const UPDATE_APP_SQL: &str = include_str!("sql/update_app.sql");
const DELETE_APP_SQL: &str = include_str!("sql/delete_app.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAppsRepository;

impl PgAppsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_app(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        app: AppUuid,
        name: &str,
        created_at: Timestamp,
    ) -> Result<AppRecord, sqlx::Error> {
        query_as::<Postgres, AppRecord>(CREATE_APP_SQL)
            .bind(app.into_uuid())
            .bind(name)
            .bind(SqlxTimestamp::from(created_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_app(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        app: AppUuid,
    ) -> Result<AppRecord, sqlx::Error> {
        query_as::<Postgres, AppRecord>(GET_APP_SQL)
            .bind(app.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Read the app row and hold a share lock on it until the transaction ends.
    ///
    /// Concurrent share lockers proceed; updates and deletes of the row wait.
    pub(crate) async fn lock_app_for_share(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        app: AppUuid,
    ) -> Result<Option<AppRecord>, sqlx::Error> {
        query_as::<Postgres, AppRecord>(LOCK_APP_FOR_SHARE_SQL)
            .bind(app.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Read the app row and hold an exclusive row lock on it until the transaction ends.
    pub(crate) async fn lock_app_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        app: AppUuid,
    ) -> Result<Option<AppRecord>, sqlx::Error> {
        query_as::<Postgres, AppRecord>(LOCK_APP_FOR_UPDATE_SQL)
            .bind(app.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_apps(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &AppFilter,
    ) -> Result<Vec<AppRecord>, sqlx::Error> {
        query_as::<Postgres, AppRecord>(LIST_APPS_SQL)
            .bind(filter.app.map(AppUuid::into_uuid))
            .bind(filter.name.as_deref())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_app(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        app: AppUuid,
        update: &AppUpdate,
    ) -> Result<Option<AppRecord>, sqlx::Error> {
        query_as::<Postgres, AppRecord>(UPDATE_APP_SQL)
            .bind(app.into_uuid())
            .bind(update.name.as_deref())
            .bind(update.is_active)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_app(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        app: AppUuid,
    ) -> Result<Option<AppRecord>, sqlx::Error> {
        query_as::<Postgres, AppRecord>(DELETE_APP_SQL)
            .bind(app.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AppRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AppUuid::from_uuid(row.try_get::<Uuid, _>("app_id")?),
            name: row.try_get("app_name")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
