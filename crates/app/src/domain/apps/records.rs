//! App Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// App UUID
pub type AppUuid = TypedUuid<AppRecord>;

/// App Record
#[derive(Debug, Clone, PartialEq)]
pub struct AppRecord {
    /// Unique app identifier.
    pub uuid: AppUuid,

    /// Human-readable app name.
    pub name: String,

    /// Whether the app accepts new events.
    pub is_active: bool,

    /// Registration timestamp, truncated to the second.
    pub created_at: Timestamp,
}
