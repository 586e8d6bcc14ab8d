//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use booknest_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::EmailTaken => StatusError::conflict().brief("Email already registered"),
        AuthServiceError::InvalidRegistration(reason) => StatusError::bad_request().brief(reason),
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid email or password")
        }
        AuthServiceError::InvalidToken => StatusError::unauthorized().brief("Invalid token"),
        error @ (AuthServiceError::Users(_)
        | AuthServiceError::Password(_)
        | AuthServiceError::Token(_)) => {
            error!("authentication failed: {error}");

            StatusError::internal_server_error()
        }
    }
}
