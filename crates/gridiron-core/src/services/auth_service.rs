// ============================================================================
// Gridiron Core - Authentication Service
// File: crates/gridiron-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service with register, login, and token issuance

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use gridiron_security::{JwtService, PasswordService};
use gridiron_shared::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use gridiron_shared::EntityId;

use crate::domain::{NewUser, User};
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Authentication service for handling user login/register flows
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt: Arc<JwtService>) -> Self {
        Self { user_repo, jwt }
    }

    /// Register a new user
    pub async fn register(&self, username: &str, password: &str) -> Result<User, DomainError> {
        info!("Registration attempt for username: {}", username.trim());

        // 1. Validate password length
        let length = password.chars().count();
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(DomainError::ValidationError(format!(
                "password: Password must be between {} and {} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            )));
        }

        // 2. Validate username
        let mut user = NewUser::new(username, String::new())?;

        // 3. Check username uniqueness
        if self.user_repo.find_by_username(&user.username).await?.is_some() {
            warn!("Registration failed: username already exists: {}", user.username);
            return Err(DomainError::UsernameAlreadyExists(user.username));
        }

        // 4. Hash password
        user.password_hash = PasswordService::hash(password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        // 5. Save to database
        let created = self.user_repo.create(&user).await?;

        info!("Registration successful for: {}", created.username);
        Ok(created)
    }

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, DomainError> {
        let username = username.trim();
        info!("Login attempt for username: {}", username);

        // 1. Find user by username
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username: {}", username);
                DomainError::InvalidCredentials
            })?;

        // 2. Verify password
        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|_e| DomainError::InvalidCredentials)?;
        if !password_valid {
            warn!("Login failed: invalid password for: {}", username);
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Issue access token
        let access_token = self
            .jwt
            .generate_access_token(user.id, &user.username)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        // 4. Update last login
        let now = Utc::now();
        if let Err(e) = self.user_repo.record_login(user.id, now).await {
            error!("Failed to update last login: {}", e);
            // Don't fail login for this
        }

        info!("Login successful for: {}", user.username);

        Ok(LoginResult {
            user: User {
                last_login: Some(now),
                ..user
            },
            access_token,
            expires_in: self.jwt.access_token_expiry(),
        })
    }

    /// The user behind a validated token
    pub async fn current_user(&self, user_id: EntityId) -> Result<User, DomainError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use chrono::Utc;

    const SECRET: &str = "test-secret";

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            username: "coach".into(),
            password_hash: PasswordService::hash(password).unwrap(),
            created_at: Utc::now(),
            last_login: None,
        }
    }

    fn service(repo: MockUserRepository) -> AuthService {
        AuthService::new(Arc::new(repo), Arc::new(JwtService::new(Some(SECRET), 900)))
    }

    #[tokio::test]
    async fn register_creates_user_with_hashed_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .withf(|name| name.to_string() == "coach")
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user| user.username == "coach" && user.password_hash.starts_with("$argon2"))
            .returning(|user| {
                Ok(User {
                    id: 1,
                    username: user.username.clone(),
                    password_hash: user.password_hash.clone(),
                    created_at: Utc::now(),
                    last_login: None,
                })
            });

        let user = service(repo).register(" coach ", "secret123").await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "coach");
    }

    #[tokio::test]
    async fn register_rejects_taken_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("secret123"))));
        repo.expect_create().never();

        let err = service(repo).register("coach", "secret123").await.unwrap_err();
        assert!(matches!(err, DomainError::UsernameAlreadyExists(name) if name == "coach"));
    }

    #[tokio::test]
    async fn register_rejects_short_password_without_touching_storage() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().never();

        let err = service(repo).register("coach", "12345").await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn login_issues_token_for_valid_credentials() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("secret123"))));
        repo.expect_record_login()
            .withf(|id, _| *id == 1)
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(repo).login("coach", "secret123").await.unwrap();
        assert!(result.user.last_login.is_some());
        assert_eq!(result.expires_in, 900);

        let claims = JwtService::new(Some(SECRET), 900)
            .validate_token(&result.access_token)
            .unwrap();
        assert_eq!(claims.user_id().unwrap(), 1);
        assert_eq!(claims.username, "coach");
    }

    #[tokio::test]
    async fn login_survives_failed_last_login_update() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("secret123"))));
        repo.expect_record_login()
            .returning(|_, _| Err(DomainError::DatabaseError("locked".into())));

        assert!(service(repo).login("coach", "secret123").await.is_ok());
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|name| {
            if name == "coach" {
                Ok(Some(stored_user("secret123")))
            } else {
                Ok(None)
            }
        });
        repo.expect_record_login().never();
        let service = service(repo);

        assert!(matches!(
            service.login("coach", "wrong-password").await,
            Err(DomainError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("nobody", "secret123").await,
            Err(DomainError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn login_without_secret_fails_at_token_issue() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("secret123"))));
        let service = AuthService::new(Arc::new(repo), Arc::new(JwtService::new(None, 900)));

        assert!(matches!(
            service.login("coach", "secret123").await,
            Err(DomainError::TokenGenerationError(_))
        ));
    }
}
