//! Get App Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    apps::{errors::into_status_error, models::AppResponse},
    extensions::*,
};

/// Get App Handler
///
/// Returns an app.
#[endpoint(tags("apps"), summary = "Get App")]
pub(crate) async fn handler(
    app_id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AppResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let app = state
        .app
        .apps
        .get_app(app_id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(app.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use beacon_app::domain::apps::{AppsServiceError, MockAppsService, records::AppUuid};

    use crate::test_helpers::{apps_service, make_app};

    use super::*;

    fn make_service(apps: MockAppsService) -> Service {
        apps_service(apps, Router::with_path("api/apps/{app_id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut apps = MockAppsService::new();
        let uuid = AppUuid::new();
        let app = make_app(uuid);

        apps.expect_get_app()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(app));

        let mut res = TestClient::get(format!("http://example.com/api/apps/{uuid}"))
            .send(&make_service(apps))
            .await;

        let body: AppResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.app_id, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_app_returns_404() {
        let mut apps = MockAppsService::new();
        let uuid = AppUuid::new();

        apps.expect_get_app()
            .once()
            .return_once(|_| Err(AppsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/api/apps/{uuid}"))
            .send(&make_service(apps))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_malformed_uuid_returns_400() {
        let mut apps = MockAppsService::new();

        apps.expect_get_app().never();

        let res = TestClient::get("http://example.com/api/apps/not-a-uuid")
            .send(&make_service(apps))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
