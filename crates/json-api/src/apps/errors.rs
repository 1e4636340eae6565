//! App Errors

use salvo::http::StatusError;
use tracing::error;

use beacon_app::domain::apps::AppsServiceError;

pub(crate) fn into_status_error(error: AppsServiceError) -> StatusError {
    match error {
        AppsServiceError::NotFound => StatusError::not_found().brief("app not found"),
        AppsServiceError::EventsExist => StatusError::bad_request().brief("events exist"),
        AppsServiceError::AlreadyExists => StatusError::conflict().brief("app already exists"),
        AppsServiceError::InvalidData => StatusError::bad_request().brief("invalid app payload"),
        AppsServiceError::Sql(source) => {
            error!("app store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn lifecycle_errors_map_to_client_errors() {
        let events_exist = into_status_error(AppsServiceError::EventsExist);
        let not_found = into_status_error(AppsServiceError::NotFound);

        assert_eq!(events_exist.code, StatusCode::BAD_REQUEST);
        assert_eq!(events_exist.brief, "events exist");
        assert_eq!(not_found.code, StatusCode::NOT_FOUND);
        assert_eq!(not_found.brief, "app not found");
    }

    #[test]
    fn storage_errors_hide_driver_details() {
        let error = into_status_error(AppsServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.brief.contains("pool"));
    }
}
