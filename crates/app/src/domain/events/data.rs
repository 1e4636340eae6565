//! Event Data

use crate::domain::{
    apps::records::AppUuid,
    validation::{ValidationError, identifier, required, supplied},
};

/// Unvalidated event payload as sent by a client application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventInput {
    pub app_id: Option<String>,
    pub url_host: Option<String>,
    pub url_path: Option<String>,
    pub url_query: Option<String>,
    pub event_name: Option<String>,
}

/// New Event Data
///
/// Text fields may be empty; only their presence is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub app_uuid: AppUuid,
    pub url_host: String,
    pub url_path: String,
    pub url_query: String,
    pub event_name: String,
}

impl TryFrom<EventInput> for NewEvent {
    type Error = ValidationError;

    fn try_from(input: EventInput) -> Result<Self, Self::Error> {
        let app_id = required("app_id", input.app_id)?;

        Ok(Self {
            app_uuid: identifier("app_id", &app_id)?,
            url_host: required("url_host", input.url_host)?,
            url_path: required("url_path", input.url_path)?,
            url_query: required("url_query", input.url_query)?,
            event_name: required("event_name", input.event_name)?,
        })
    }
}

/// Unvalidated event list criteria, as received from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilterInput {
    pub app_id: Option<String>,
    pub url_host: Option<String>,
    pub url_path: Option<String>,
    pub url_query: Option<String>,
    pub event_name: Option<String>,
}

/// Event list criteria, combined with AND.
///
/// `app` matches exactly; the text criteria match case-sensitive substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub app: Option<AppUuid>,
    pub url_host: Option<String>,
    pub url_path: Option<String>,
    pub url_query: Option<String>,
    pub event_name: Option<String>,
}

impl EventFilter {
    /// Criteria selecting every event of one app.
    #[must_use]
    pub fn for_app(app: AppUuid) -> Self {
        Self {
            app: Some(app),
            ..Self::default()
        }
    }

    /// Whether any criterion narrows the result set.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.app.is_some()
            || self.url_host.is_some()
            || self.url_path.is_some()
            || self.url_query.is_some()
            || self.event_name.is_some()
    }
}

impl TryFrom<EventFilterInput> for EventFilter {
    type Error = ValidationError;

    fn try_from(input: EventFilterInput) -> Result<Self, Self::Error> {
        let app = supplied(input.app_id)
            .map(|value| identifier::<AppUuid>("app_id", &value))
            .transpose()?;

        Ok(Self {
            app,
            url_host: supplied(input.url_host),
            url_path: supplied(input.url_path),
            url_query: supplied(input.url_query),
            event_name: supplied(input.event_name),
        })
    }
}
