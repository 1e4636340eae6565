//! Delete App Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::{
    apps::{errors::into_status_error, models::AppResponse},
    extensions::*,
};

/// Delete App Handler
///
/// Removes an app that owns no events and returns its last state.
#[endpoint(
    tags("apps"),
    summary = "Delete App",
    responses(
        (status_code = StatusCode::OK, description = "App deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Events exist"),
        (status_code = StatusCode::NOT_FOUND, description = "App not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    app_id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AppResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let app = state
        .app
        .apps
        .delete_app(app_id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(app_id = %app.uuid, "app deleted");

    Ok(Json(app.into()))
}
