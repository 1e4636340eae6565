//! API Router

use salvo::Router;

use crate::{apps, events, health};

/// Routes under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("isalive").get(health::isalive))
        .push(Router::with_path("isready").get(health::isready))
        .push(
            Router::with_path("apps")
                .get(apps::index::handler)
                .post(apps::create::handler)
                .push(
                    Router::with_path("{app_id}")
                        .get(apps::get::handler)
                        .patch(apps::update::handler)
                        .delete(apps::delete::handler)
                        .push(Router::with_path("events").get(apps::events::handler)),
                ),
        )
        .push(Router::with_path("send").post(events::send::handler))
        .push(
            Router::with_path("events")
                .get(events::index::handler)
                .push(Router::with_path("{app_id}").delete(events::delete::handler)),
        )
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use beacon_app::{
        domain::{
            apps::{
                AppsServiceError, MockAppsService,
                data::AppUpdate,
                records::{AppRecord, AppUuid},
            },
            events::{EventsServiceError, MockEventsService, records::EventUuid},
        },
        health::MockReadinessService,
    };

    use crate::{
        apps::models::AppResponse,
        events::models::EventResponse,
        test_helpers::{make_app, make_event, service, state},
    };

    use super::*;

    #[tokio::test]
    async fn probes_are_routed() {
        let service = service(
            state(
                MockAppsService::new(),
                MockEventsService::new(),
                MockReadinessService::new(),
            ),
            api_router(),
        );

        let res = TestClient::get("http://example.com/api/isalive")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn unknown_routes_return_404() {
        let service = service(
            state(
                MockAppsService::new(),
                MockEventsService::new(),
                MockReadinessService::new(),
            ),
            api_router(),
        );

        let res = TestClient::delete("http://example.com/api/events")
            .send(&service)
            .await;

        assert!(matches!(
            res.status_code,
            Some(StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED)
        ));
    }

    #[tokio::test]
    async fn app_shutdown_sequence() -> TestResult {
        let app_uuid = AppUuid::new();
        let active = make_app(app_uuid);
        let inactive = AppRecord {
            is_active: false,
            ..make_app(app_uuid)
        };
        let event = make_event(EventUuid::new(), app_uuid);

        let mut seq = Sequence::new();
        let mut apps = MockAppsService::new();
        let mut events = MockEventsService::new();

        apps.expect_create_app()
            .once()
            .in_sequence(&mut seq)
            .return_once({
                let active = active.clone();
                move |_| Ok(active)
            });

        events
            .expect_create_event()
            .once()
            .in_sequence(&mut seq)
            .withf(move |new| new.app_uuid == app_uuid && new.event_name == "page_view")
            .return_once({
                let event = event.clone();
                move |_| Ok(event)
            });

        apps.expect_delete_app()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_| Err(AppsServiceError::EventsExist));

        events
            .expect_delete_app_events()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_| Err(EventsServiceError::AppStillActive));

        apps.expect_update_app()
            .once()
            .in_sequence(&mut seq)
            .withf(|_, update| *update == AppUpdate::deactivate())
            .return_once({
                let inactive = inactive.clone();
                move |_, _| Ok(inactive)
            });

        events
            .expect_delete_app_events()
            .once()
            .in_sequence(&mut seq)
            .return_once(move |_| Ok(vec![event]));

        apps.expect_delete_app()
            .once()
            .in_sequence(&mut seq)
            .return_once(move |_| Ok(inactive));

        let service = service(
            state(apps, events, MockReadinessService::new()),
            api_router(),
        );

        let mut res = TestClient::post("http://example.com/api/apps")
            .json(&json!({ "app_name": "Shop" }))
            .send(&service)
            .await;
        let created: AppResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(created.is_active);

        let app_id = created.app_id;

        let mut res = TestClient::post("http://example.com/api/send")
            .json(&json!({
                "app_id": app_id.to_string(),
                "url_host": "shop.example",
                "url_path": "/",
                "url_query": "",
                "event_name": "page_view",
            }))
            .send(&service)
            .await;
        let sent: EventResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(sent.app_id, app_id);

        let res = TestClient::delete(format!("http://example.com/api/apps/{app_id}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let res = TestClient::delete(format!("http://example.com/api/events/{app_id}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let res = TestClient::patch(format!("http://example.com/api/apps/{app_id}"))
            .json(&json!({ "is_active": false }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let mut res = TestClient::delete(format!("http://example.com/api/events/{app_id}"))
            .send(&service)
            .await;
        let deleted: Vec<EventResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(deleted.len(), 1);

        let res = TestClient::delete(format!("http://example.com/api/apps/{app_id}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
