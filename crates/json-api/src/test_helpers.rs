//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use beacon_app::{
    context::AppContext,
    domain::{
        apps::{
            MockAppsService,
            records::{AppRecord, AppUuid},
        },
        events::{
            MockEventsService,
            records::{EventRecord, EventUuid},
        },
    },
    health::MockReadinessService,
};

use crate::state::State;

/// 2026-01-01T00:00:00Z
pub(crate) const CREATED_AT_SECOND: i64 = 1_767_225_600;

pub(crate) fn created_at() -> Timestamp {
    Timestamp::from_second(CREATED_AT_SECOND).unwrap_or(Timestamp::UNIX_EPOCH)
}

pub(crate) fn make_app(uuid: AppUuid) -> AppRecord {
    AppRecord {
        uuid,
        name: "Shop".to_string(),
        is_active: true,
        created_at: created_at(),
    }
}

pub(crate) fn make_event(uuid: EventUuid, app: AppUuid) -> EventRecord {
    EventRecord {
        uuid,
        app_uuid: app,
        url_host: "shop.example".to_string(),
        url_path: "/checkout/confirm".to_string(),
        url_query: "step=2".to_string(),
        event_name: "page_view".to_string(),
        created_at: created_at(),
    }
}

pub(crate) fn state(
    apps: MockAppsService,
    events: MockEventsService,
    readiness: MockReadinessService,
) -> Arc<State> {
    State::new(AppContext {
        apps: Arc::new(apps),
        events: Arc::new(events),
        readiness: Arc::new(readiness),
    })
}

pub(crate) fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn apps_service(apps: MockAppsService, route: Router) -> Service {
    service(
        state(apps, MockEventsService::new(), MockReadinessService::new()),
        route,
    )
}

pub(crate) fn events_service(events: MockEventsService, route: Router) -> Service {
    service(
        state(MockAppsService::new(), events, MockReadinessService::new()),
        route,
    )
}

pub(crate) fn readiness_service(readiness: MockReadinessService, route: Router) -> Service {
    service(
        state(MockAppsService::new(), MockEventsService::new(), readiness),
        route,
    )
}
