//! Event Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use beacon_app::domain::events::records::EventRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EventResponse {
    pub event_id: Uuid,
    pub app_id: Uuid,
    pub url_host: String,
    pub url_path: String,
    pub url_query: String,
    pub event_name: String,

    /// When the event was recorded (RFC 3339, whole seconds)
    pub created_at: String,
}

impl From<EventRecord> for EventResponse {
    fn from(event: EventRecord) -> Self {
        EventResponse {
            event_id: event.uuid.into(),
            app_id: event.app_uuid.into(),
            url_host: event.url_host,
            url_path: event.url_path,
            url_query: event.url_query,
            event_name: event.event_name,
            created_at: event.created_at.to_string(),
        }
    }
}
