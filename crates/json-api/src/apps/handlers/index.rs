//! App Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use beacon_app::domain::apps::data::{AppFilter, AppFilterInput};

use crate::{
    apps::{errors::into_status_error, models::AppResponse},
    extensions::*,
};

/// App Index Handler
///
/// Lists apps, optionally narrowed by exact `app_id` and/or an `app_name` substring.
/// A filter without matches is a 404; an unfiltered request always returns a list.
#[endpoint(tags("apps"), summary = "List Apps")]
pub(crate) async fn handler(
    app_id: QueryParam<String, false>,
    app_name: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<AppResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let filter = AppFilter::try_from(AppFilterInput {
        app_id: app_id.into_inner(),
        app_name: app_name.into_inner(),
    })
    .or_422()?;

    let apps = state
        .app
        .apps
        .list_apps(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(apps.into_iter().map(Into::into).collect()))
}
