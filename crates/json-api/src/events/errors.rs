//! Event Errors

use salvo::http::StatusError;
use tracing::error;

use beacon_app::domain::events::EventsServiceError;

pub(crate) fn into_status_error(error: EventsServiceError) -> StatusError {
    match error {
        EventsServiceError::AppNotFound => StatusError::not_found().brief("app not found"),
        EventsServiceError::AppInactive => StatusError::bad_request().brief("app inactive"),
        EventsServiceError::AppStillActive => {
            StatusError::bad_request().brief("app must be deactivated first")
        }
        EventsServiceError::NotFound => StatusError::not_found().brief("events not found"),
        EventsServiceError::AlreadyExists => StatusError::conflict().brief("event already exists"),
        EventsServiceError::InvalidData => {
            StatusError::bad_request().brief("invalid event payload")
        }
        EventsServiceError::Sql(source) => {
            error!("event store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn gate_failures_are_bad_requests() {
        for (error, brief) in [
            (EventsServiceError::AppInactive, "app inactive"),
            (
                EventsServiceError::AppStillActive,
                "app must be deactivated first",
            ),
        ] {
            let status = into_status_error(error);

            assert_eq!(status.code, StatusCode::BAD_REQUEST);
            assert_eq!(status.brief, brief);
        }
    }

    #[test]
    fn missing_app_and_missing_events_are_distinguishable() {
        let app = into_status_error(EventsServiceError::AppNotFound);
        let events = into_status_error(EventsServiceError::NotFound);

        assert_eq!(app.code, StatusCode::NOT_FOUND);
        assert_eq!(events.code, StatusCode::NOT_FOUND);
        assert_ne!(app.brief, events.brief);
    }
}
