//! Event Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use beacon_app::domain::events::data::{EventFilter, EventFilterInput};

use crate::{
    events::{errors::into_status_error, models::EventResponse},
    extensions::*,
};

/// Event Index Handler
///
/// Lists events. `app_id` matches exactly; the other criteria match case-sensitive
/// substrings. All supplied criteria must hold. A filter without matches is a 404.
#[endpoint(tags("events"), summary = "List Events")]
pub(crate) async fn handler(
    app_id: QueryParam<String, false>,
    url_host: QueryParam<String, false>,
    url_path: QueryParam<String, false>,
    url_query: QueryParam<String, false>,
    event_name: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<EventResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let filter = EventFilter::try_from(EventFilterInput {
        app_id: app_id.into_inner(),
        url_host: url_host.into_inner(),
        url_path: url_path.into_inner(),
        url_query: url_query.into_inner(),
        event_name: event_name.into_inner(),
    })
    .or_422()?;

    let events = state
        .app
        .events
        .list_events(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(events.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use beacon_app::domain::{
        apps::records::AppUuid,
        events::{EventsServiceError, MockEventsService, records::EventUuid},
    };

    use crate::test_helpers::{events_service, make_event};

    use super::*;

    fn make_service(events: MockEventsService) -> Service {
        events_service(events, Router::with_path("api/events").get(handler))
    }

    #[tokio::test]
    async fn test_index_without_filters_returns_all() -> TestResult {
        let mut events = MockEventsService::new();
        let app = AppUuid::new();
        let listed = vec![
            make_event(EventUuid::new(), app),
            make_event(EventUuid::new(), app),
        ];

        events
            .expect_list_events()
            .once()
            .withf(|filter| *filter == EventFilter::default())
            .return_once(move |_| Ok(listed));

        let mut res = TestClient::get("http://example.com/api/events")
            .send(&make_service(events))
            .await;

        let body: Vec<EventResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_every_criterion() {
        let mut events = MockEventsService::new();
        let app = AppUuid::new();

        events
            .expect_list_events()
            .once()
            .withf(move |filter| {
                *filter
                    == EventFilter {
                        app: Some(app),
                        url_host: Some("shop".to_string()),
                        url_path: Some("/checkout".to_string()),
                        url_query: Some("step".to_string()),
                        event_name: Some("view".to_string()),
                    }
            })
            .return_once(move |_| Ok(vec![make_event(EventUuid::new(), app)]));

        let res = TestClient::get(format!(
            "http://example.com/api/events?app_id={app}&url_host=shop&url_path=/checkout&url_query=step&event_name=view"
        ))
        .send(&make_service(events))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_index_filtered_without_match_returns_404() {
        let mut events = MockEventsService::new();

        events
            .expect_list_events()
            .once()
            .return_once(|_| Err(EventsServiceError::NotFound));

        let res = TestClient::get("http://example.com/api/events?event_name=purchase")
            .send(&make_service(events))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_index_invalid_app_id_returns_422() {
        let mut events = MockEventsService::new();

        events.expect_list_events().never();

        let res = TestClient::get("http://example.com/api/events?app_id=shop")
            .send(&make_service(events))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }
}
