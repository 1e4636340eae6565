//! App Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use beacon_app::domain::apps::records::AppRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AppResponse {
    /// The unique identifier of the app
    pub app_id: Uuid,

    /// Display name
    pub app_name: String,

    /// Whether the app currently accepts events
    pub is_active: bool,

    /// When the app was registered (RFC 3339, whole seconds)
    pub created_at: String,
}

impl From<AppRecord> for AppResponse {
    fn from(app: AppRecord) -> Self {
        AppResponse {
            app_id: app.uuid.into(),
            app_name: app.name,
            is_active: app.is_active,
            created_at: app.created_at.to_string(),
        }
    }
}
