//! Create App Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use beacon_app::domain::apps::data::{AppInput, NewApp};

use crate::{
    apps::{errors::into_status_error, models::AppResponse},
    extensions::*,
};

/// Create App Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAppRequest {
    /// Display name; must not be blank
    pub app_name: Option<String>,
}

impl From<CreateAppRequest> for AppInput {
    fn from(request: CreateAppRequest) -> Self {
        AppInput {
            app_name: request.app_name,
        }
    }
}

/// Create App Handler
///
/// Registers an app. New apps are active.
#[endpoint(
    tags("apps"),
    summary = "Create App",
    responses(
        (status_code = StatusCode::OK, description = "App created"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid app payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAppRequest>,
    depot: &mut Depot,
) -> Result<Json<AppResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let app = NewApp::try_from(AppInput::from(json.into_inner())).or_422()?;

    let app = state
        .app
        .apps
        .create_app(app)
        .await
        .map_err(into_status_error)?;

    info!(app_id = %app.uuid, "app created");

    Ok(Json(app.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use beacon_app::domain::apps::{AppsServiceError, MockAppsService, records::AppUuid};

    use crate::test_helpers::{apps_service, make_app};

    use super::*;

    fn make_service(apps: MockAppsService) -> Service {
        apps_service(apps, Router::with_path("api/apps").post(handler))
    }

    #[tokio::test]
    async fn test_create_app_success() -> TestResult {
        let uuid = AppUuid::new();
        let app = make_app(uuid);

        let mut apps = MockAppsService::new();

        apps.expect_create_app()
            .once()
            .withf(|new| new.name == "Shop")
            .return_once(move |_| Ok(app));

        let mut res = TestClient::post("http://example.com/api/apps")
            .json(&json!({ "app_name": "Shop" }))
            .send(&make_service(apps))
            .await;

        let body: AppResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.app_id, uuid.into_uuid());
        assert_eq!(body.app_name, "Shop");
        assert!(body.is_active);
        assert_eq!(body.created_at, "2026-01-01T00:00:00Z");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_app_missing_name_returns_422() {
        let mut apps = MockAppsService::new();

        apps.expect_create_app().never();

        let res = TestClient::post("http://example.com/api/apps")
            .json(&json!({}))
            .send(&make_service(apps))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_create_app_blank_name_returns_422() {
        let mut apps = MockAppsService::new();

        apps.expect_create_app().never();

        let res = TestClient::post("http://example.com/api/apps")
            .json(&json!({ "app_name": "   " }))
            .send(&make_service(apps))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_create_app_malformed_json_returns_400() {
        let mut apps = MockAppsService::new();

        apps.expect_create_app().never();

        let res = TestClient::post("http://example.com/api/apps")
            .raw_json("{\"app_name\": ")
            .send(&make_service(apps))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_create_app_store_failure_returns_500() {
        let mut apps = MockAppsService::new();

        apps.expect_create_app()
            .once()
            .return_once(|_| Err(AppsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::post("http://example.com/api/apps")
            .json(&json!({ "app_name": "Shop" }))
            .send(&make_service(apps))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
