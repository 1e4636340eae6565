//! Apps service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppsServiceError {
    #[error("app not found")]
    NotFound,

    #[error("events exist")]
    EventsExist,

    #[error("app already exists")]
    AlreadyExists,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AppsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            // An event was attached between the guard and the delete.
            Some(ErrorKind::ForeignKeyViolation) => Self::EventsExist,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            AppsServiceError::from(Error::RowNotFound),
            AppsServiceError::NotFound
        ));
    }

    #[test]
    fn pool_errors_stay_opaque() {
        assert!(matches!(
            AppsServiceError::from(Error::PoolTimedOut),
            AppsServiceError::Sql(_)
        ));
    }
}
