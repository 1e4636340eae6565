//! Delete App Events Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::{
    events::{errors::into_status_error, models::EventResponse},
    extensions::*,
};

/// Delete App Events Handler
///
/// Deletes every event of a deactivated app and returns the deleted events.
#[endpoint(
    tags("events"),
    summary = "Delete App Events",
    responses(
        (status_code = StatusCode::OK, description = "Events deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "App must be deactivated first"),
        (status_code = StatusCode::NOT_FOUND, description = "App or events not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    app_id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<EventResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let app = app_id.into_inner();

    let deleted = state
        .app
        .events
        .delete_app_events(app.into())
        .await
        .map_err(into_status_error)?;

    info!(app_id = %app, deleted = deleted.len(), "app events deleted");

    Ok(Json(deleted.into_iter().map(Into::into).collect()))
}
