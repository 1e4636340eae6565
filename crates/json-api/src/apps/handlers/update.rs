//! Update App Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use beacon_app::domain::apps::data::{AppChanges, AppUpdate};

use crate::{
    apps::{errors::into_status_error, models::AppResponse},
    extensions::*,
};

/// Update App Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateAppRequest {
    /// New display name
    pub app_name: Option<String>,

    /// `false` deactivates the app, which stops event intake
    pub is_active: Option<bool>,
}

impl From<UpdateAppRequest> for AppChanges {
    fn from(request: UpdateAppRequest) -> Self {
        AppChanges {
            app_name: request.app_name,
            is_active: request.is_active,
        }
    }
}

/// Update App Handler
#[endpoint(
    tags("apps"),
    summary = "Update App",
    responses(
        (status_code = StatusCode::OK, description = "App updated"),
        (status_code = StatusCode::NOT_FOUND, description = "App not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid app payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    app_id: PathParam<Uuid>,
    json: JsonBody<UpdateAppRequest>,
    depot: &mut Depot,
) -> Result<Json<AppResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let update = AppUpdate::try_from(AppChanges::from(json.into_inner())).or_422()?;

    let app = state
        .app
        .apps
        .update_app(app_id.into_inner().into(), update)
        .await
        .map_err(into_status_error)?;

    info!(app_id = %app.uuid, is_active = app.is_active, "app updated");

    Ok(Json(app.into()))
}
