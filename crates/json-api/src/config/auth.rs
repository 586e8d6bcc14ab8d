//! Auth Config

use booknest_app::auth::JwtSecret;
use clap::Args;

/// Bearer token signing settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Move the configured secret into a [`JwtSecret`].
    #[must_use]
    pub fn into_secret(self) -> JwtSecret {
        JwtSecret::new(self.jwt_secret)
    }
}
