//! App lifecycle gates.
//!
//! An app is shut down strictly in order: deactivate, clear its events, delete it.
//! Each gate inspects the app row as locked by the calling transaction.

use crate::domain::{
    apps::{AppsServiceError, records::AppRecord},
    events::EventsServiceError,
};

/// Events may only be recorded against an existing, active app.
pub(crate) fn ensure_accepts_events(
    app: Option<&AppRecord>,
) -> Result<&AppRecord, EventsServiceError> {
    let app = app.ok_or(EventsServiceError::AppNotFound)?;

    if !app.is_active {
        return Err(EventsServiceError::AppInactive);
    }

    Ok(app)
}

/// Apps with events are never deleted, whatever their active flag.
///
/// The events guard runs before the existence check.
pub(crate) fn ensure_deletable(
    app: Option<&AppRecord>,
    has_events: bool,
) -> Result<&AppRecord, AppsServiceError> {
    if has_events {
        return Err(AppsServiceError::EventsExist);
    }

    app.ok_or(AppsServiceError::NotFound)
}

/// Bulk event deletion requires the app to be deactivated first.
pub(crate) fn ensure_events_clearable(
    app: Option<&AppRecord>,
) -> Result<&AppRecord, EventsServiceError> {
    let app = app.ok_or(EventsServiceError::AppNotFound)?;

    if app.is_active {
        return Err(EventsServiceError::AppStillActive);
    }

    Ok(app)
}
