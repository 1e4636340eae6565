//! App Events Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use beacon_app::domain::events::data::EventFilter;

use crate::{
    events::{errors::into_status_error, models::EventResponse},
    extensions::*,
};

/// App Events Handler
///
/// Lists the events recorded for one app; 404 when there are none.
#[endpoint(tags("apps", "events"), summary = "List App Events")]
pub(crate) async fn handler(
    app_id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<EventResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let events = state
        .app
        .events
        .list_events(EventFilter::for_app(app_id.into_inner().into()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(events.into_iter().map(Into::into).collect()))
}
