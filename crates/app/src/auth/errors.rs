//! Auth service errors.

use thiserror::Error;

use crate::domain::users::UsersServiceError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("email already registered")]
    EmailTaken,

    #[error("invalid registration: {0}")]
    InvalidRegistration(&'static str),

    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("user storage error")]
    Users(#[source] UsersServiceError),

    #[error("password hashing failed: {0}")]
    Password(String),

    #[error("token signing failed")]
    Token(#[source] jsonwebtoken::errors::Error),
}

impl From<UsersServiceError> for AuthServiceError {
    fn from(error: UsersServiceError) -> Self {
        match error {
            UsersServiceError::AlreadyExists => Self::EmailTaken,
            error => Self::Users(error),
        }
    }
}
