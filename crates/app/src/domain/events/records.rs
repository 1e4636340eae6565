//! Event Records

use jiff::Timestamp;

use crate::{domain::apps::records::AppUuid, uuids::TypedUuid};

/// Event UUID
pub type EventUuid = TypedUuid<EventRecord>;

/// Event Record
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub uuid: EventUuid,
    pub app_uuid: AppUuid,
    pub url_host: String,
    pub url_path: String,
    pub url_query: String,
    pub event_name: String,
    pub created_at: Timestamp,
}
