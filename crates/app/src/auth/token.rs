//! Bearer token signing and verification (HS256 JWT).

use std::fmt;

use booknest::users::Role;
use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroize;

use crate::auth::{AuthServiceError, Principal};

/// How long an issued token stays valid.
pub const TOKEN_TTL: SignedDuration = SignedDuration::from_hours(7 * 24);

/// Shared HMAC secret for signing tokens. Wiped from memory on drop.
#[derive(Clone)]
pub struct JwtSecret {
    bytes: Vec<u8>,
}

impl JwtSecret {
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: secret.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for JwtSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Token payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Issue a token for `principal`, valid for [`TOKEN_TTL`] from now.
///
/// # Errors
///
/// Returns an error if the token cannot be encoded.
pub fn issue_token(secret: &JwtSecret, principal: Principal) -> Result<String, AuthServiceError> {
    issue_token_at(secret, principal, Timestamp::now())
}

pub(crate) fn issue_token_at(
    secret: &JwtSecret,
    principal: Principal,
    now: Timestamp,
) -> Result<String, AuthServiceError> {
    let claims = Claims {
        id: principal.user.into_uuid(),
        role: principal.role,
        iat: now.as_second(),
        exp: now.as_second().saturating_add(TOKEN_TTL.as_secs()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthServiceError::Token)
}

/// Check the signature and expiry of `token` and return its claims.
///
/// # Errors
///
/// Returns [`AuthServiceError::InvalidToken`] for malformed, forged or expired tokens.
pub fn verify_token(secret: &JwtSecret, token: &str) -> Result<Claims, AuthServiceError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthServiceError::InvalidToken)
}
