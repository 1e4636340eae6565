//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::warn;

/// Map handler-local failures onto HTTP errors.
pub(crate) trait ResultExt<T> {
    /// Rejected client input; the error message becomes the brief.
    fn or_422(self) -> Result<T, StatusError>;

    /// A dependency is unavailable; logs `context` and replies with `brief`.
    fn or_503(self, context: &str, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_422(self) -> Result<T, StatusError> {
        self.map_err(|error| StatusError::unprocessable_entity().brief(error.to_string()))
    }

    fn or_503(self, context: &str, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{context}: {error}");

            StatusError::service_unavailable().brief(brief.to_owned())
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_422_uses_the_error_message_as_brief() {
        let result: Result<(), &str> = Err("missing required field `app_name`");

        let error = result.or_422().err();

        assert_eq!(
            error.as_ref().map(|error| error.code),
            Some(StatusCode::UNPROCESSABLE_ENTITY)
        );
        assert_eq!(
            error.map(|error| error.brief),
            Some("missing required field `app_name`".to_string())
        );
    }

    #[test]
    fn or_503_passes_through_success() {
        let result: Result<u8, &str> = Ok(7);

        assert_eq!(result.or_503("check", "Not Ready").ok(), Some(7));
    }
}
