//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to an HTTP error.
pub(crate) trait ResultExt<T> {
    /// Log the error and answer 500.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Answer 400 with the error as the detail.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            StatusError::bad_request()
                .brief(brief)
                .detail(error.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_400_keeps_error_as_detail() {
        let result: Result<(), String> = Err("unknown order status \"lost\"".to_string());

        let error = result.or_400("Invalid order status").err();

        assert_eq!(error.as_ref().map(|e| e.code), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            error.and_then(|e| e.detail),
            Some("unknown order status \"lost\"".to_string())
        );
    }

    #[test]
    fn or_500_hides_error() {
        let result: Result<(), String> = Err("connection reset".to_string());

        let error = result.or_500("failed to load").err();

        assert_eq!(error.as_ref().map(|e| e.code), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(error.and_then(|e| e.detail), None);
    }
}
