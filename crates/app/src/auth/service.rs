//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use booknest::users::Role;
use mockall::automock;
use tracing::info;

use crate::{
    auth::{
        AuthServiceError, AuthSession, Credentials, JwtSecret, Principal, Registration,
        hash_password, issue_token, verify_password, verify_token,
    },
    domain::users::{
        UsersService, UsersServiceError,
        models::{NewUser, User, UserUuid},
    },
};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone)]
pub struct JwtAuthService {
    users: Arc<dyn UsersService>,
    secret: JwtSecret,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(users: Arc<dyn UsersService>, secret: JwtSecret) -> Self {
        Self { users, secret }
    }

    fn session(&self, user: User) -> Result<AuthSession, AuthServiceError> {
        let token = issue_token(&self.secret, Principal::from(&user))?;

        Ok(AuthSession { user, token })
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn register(&self, registration: Registration) -> Result<AuthSession, AuthServiceError> {
        let name = registration.name.trim();
        let email = registration.email.trim();

        if name.is_empty() {
            return Err(AuthServiceError::InvalidRegistration("name is required"));
        }

        if email.is_empty() {
            return Err(AuthServiceError::InvalidRegistration("email is required"));
        }

        if registration.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthServiceError::InvalidRegistration(
                "password must be at least 6 characters",
            ));
        }

        let user = self
            .users
            .create_user(NewUser {
                uuid: UserUuid::new(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash: hash_password(&registration.password)?,
                role: Role::User,
            })
            .await?;

        info!(user = %user.uuid, "user registered");

        self.session(user)
    }

    async fn login(&self, credentials: Credentials) -> Result<AuthSession, AuthServiceError> {
        let found = self
            .users
            .find_user_by_email(credentials.email.trim())
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(&credentials.password, &found.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        self.session(found.user)
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let claims = verify_token(&self.secret, bearer_token)?;

        // The role is read back from storage so a token cannot outlive its user.
        let user = self
            .users
            .get_user(UserUuid::from_uuid(claims.id))
            .await
            .map_err(|error| match error {
                UsersServiceError::NotFound => AuthServiceError::InvalidToken,
                error => AuthServiceError::Users(error),
            })?;

        Ok(Principal::from(&user))
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a `user`-role account and sign it in.
    async fn register(&self, registration: Registration) -> Result<AuthSession, AuthServiceError>;

    /// Exchange an email and password for a session.
    async fn login(&self, credentials: Credentials) -> Result<AuthSession, AuthServiceError>;

    /// Resolve a bearer token to the user it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use mockall::predicate::eq;
    use testresult::TestResult;

    use crate::domain::users::{MockUsersService, models::UserCredentials};

    use super::*;

    fn user(role: Role) -> User {
        User {
            uuid: UserUuid::new(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn service(users: MockUsersService) -> JwtAuthService {
        JwtAuthService::new(Arc::new(users), JwtSecret::new("test-secret"))
    }

    fn registration(password: &str) -> Registration {
        Registration {
            name: " Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_creates_plain_user_with_hashed_password() -> TestResult {
        let created = user(Role::User);
        let returned = created.clone();

        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .withf(|new_user| {
                new_user.name == "Ada Lovelace"
                    && new_user.role == Role::User
                    && verify_password("hunter22", &new_user.password_hash)
            })
            .once()
            .return_once(move |_| Ok(returned));

        let session = service(users).register(registration("hunter22")).await?;

        assert_eq!(session.user, created);
        assert!(!session.token.is_empty(), "token issued");

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_short_password_without_storage() {
        let mut users = MockUsersService::new();

        users.expect_create_user().never();

        let result = service(users).register(registration("12345")).await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidRegistration(_))),
            "expected InvalidRegistration, got {result:?}"
        );
    }

    #[tokio::test]
    async fn register_rejects_blank_name() {
        let mut users = MockUsersService::new();

        users.expect_create_user().never();

        let mut blank = registration("hunter22");
        blank.name = "   ".to_string();

        let result = service(users).register(blank).await;

        assert!(matches!(
            result,
            Err(AuthServiceError::InvalidRegistration(_))
        ));
    }

    #[tokio::test]
    async fn register_taken_email_returns_email_taken() {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .return_once(|_| Err(UsersServiceError::AlreadyExists));

        let result = service(users).register(registration("hunter22")).await;

        assert!(
            matches!(result, Err(AuthServiceError::EmailTaken)),
            "expected EmailTaken, got {result:?}"
        );
    }

    #[tokio::test]
    async fn login_with_correct_password_issues_verifiable_token() -> TestResult {
        let stored = user(Role::Admin);
        let credentials = UserCredentials {
            user: stored.clone(),
            password_hash: hash_password("hunter22")?,
        };

        let mut users = MockUsersService::new();

        users
            .expect_find_user_by_email()
            .with(eq("ada@example.com"))
            .once()
            .return_once(move |_| Ok(Some(credentials)));

        let session = service(users)
            .login(Credentials {
                email: "ada@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await?;

        let claims = verify_token(&JwtSecret::new("test-secret"), &session.token)?;

        assert_eq!(claims.id, stored.uuid.into_uuid());
        assert_eq!(claims.role, Role::Admin);

        Ok(())
    }

    #[tokio::test]
    async fn login_wrong_password_and_unknown_email_look_the_same() -> TestResult {
        let credentials = UserCredentials {
            user: user(Role::User),
            password_hash: hash_password("hunter22")?,
        };

        let mut users = MockUsersService::new();

        users
            .expect_find_user_by_email()
            .with(eq("ada@example.com"))
            .return_once(move |_| Ok(Some(credentials)));

        users
            .expect_find_user_by_email()
            .with(eq("nobody@example.com"))
            .return_once(|_| Ok(None));

        let service = service(users);

        let wrong_password = service
            .login(Credentials {
                email: "ada@example.com".to_string(),
                password: "letmein".to_string(),
            })
            .await;

        let unknown_email = service
            .login(Credentials {
                email: "nobody@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await;

        assert!(matches!(
            wrong_password,
            Err(AuthServiceError::InvalidCredentials)
        ));
        assert!(matches!(
            unknown_email,
            Err(AuthServiceError::InvalidCredentials)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_bearer_reads_role_from_storage() -> TestResult {
        let stored = user(Role::Admin);
        let uuid = stored.uuid;

        let token = issue_token(
            &JwtSecret::new("test-secret"),
            Principal {
                user: uuid,
                role: Role::User,
            },
        )?;

        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .with(eq(uuid))
            .once()
            .return_once(move |_| Ok(stored));

        let principal = service(users).authenticate_bearer(&token).await?;

        assert_eq!(principal.user, uuid);
        assert!(principal.is_admin(), "role comes from the user record");

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_bearer_for_deleted_user_is_invalid() -> TestResult {
        let token = issue_token(
            &JwtSecret::new("test-secret"),
            Principal {
                user: UserUuid::new(),
                role: Role::User,
            },
        )?;

        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .return_once(|_| Err(UsersServiceError::NotFound));

        let result = service(users).authenticate_bearer(&token).await;

        assert!(matches!(result, Err(AuthServiceError::InvalidToken)));

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_bearer_rejects_garbage_without_lookup() {
        let mut users = MockUsersService::new();

        users.expect_get_user().never();

        let result = service(users).authenticate_bearer("garbage").await;

        assert!(matches!(result, Err(AuthServiceError::InvalidToken)));
    }
}
