//! Send Event Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use beacon_app::domain::events::data::{EventInput, NewEvent};

use crate::{
    events::{errors::into_status_error, models::EventResponse},
    extensions::*,
};

/// Send Event Request
///
/// Every field is required; the text fields may be empty strings.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct SendEventRequest {
    pub app_id: Option<String>,
    pub url_host: Option<String>,
    pub url_path: Option<String>,
    pub url_query: Option<String>,
    pub event_name: Option<String>,
}

impl From<SendEventRequest> for EventInput {
    fn from(request: SendEventRequest) -> Self {
        EventInput {
            app_id: request.app_id,
            url_host: request.url_host,
            url_path: request.url_path,
            url_query: request.url_query,
            event_name: request.event_name,
        }
    }
}

/// Send Event Handler
///
/// Records an event for an active app.
#[endpoint(
    tags("events"),
    summary = "Send Event",
    responses(
        (status_code = StatusCode::OK, description = "Event recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "App inactive"),
        (status_code = StatusCode::NOT_FOUND, description = "App not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid event payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SendEventRequest>,
    depot: &mut Depot,
) -> Result<Json<EventResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let event = NewEvent::try_from(EventInput::from(json.into_inner())).or_422()?;

    let event = state
        .app
        .events
        .create_event(event)
        .await
        .map_err(into_status_error)?;

    debug!(event_id = %event.uuid, app_id = %event.app_uuid, "event recorded");

    Ok(Json(event.into()))
}
