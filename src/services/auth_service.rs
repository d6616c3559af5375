//! Authentication service - registration, login, logout and session checks.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::domain::{Password, Session, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{SessionStore, UserRepository};

/// Hash verified when the username is unknown, so both failure paths do
/// the same Argon2 work.
static DUMMY_PASSWORD: Lazy<Result<Password, String>> = Lazy::new(|| {
    Password::new("dummy-password-for-unknown-users").map_err(|e| e.to_string())
});

/// Hash the unknown-user password up front.
///
/// # Errors
/// Fails when Argon2 cannot produce the hash; the server must not start
/// without it.
pub fn prepare_dummy_password() -> AppResult<()> {
    match DUMMY_PASSWORD.as_ref() {
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::internal(format!(
            "Failed to hash dummy password: {}",
            e
        ))),
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. Does not log the user in.
    async fn register(&self, username: String, password: String, role: String) -> AppResult<User>;

    /// Check credentials and start a session.
    ///
    /// Unknown username and wrong password both yield `InvalidCredentials`.
    async fn login(&self, username: &str, password: &str) -> AppResult<Session>;

    /// End a session. Idempotent.
    async fn logout(&self, token: &str) -> AppResult<()>;

    /// Resolve the user behind a session token, or `Unauthorized`.
    async fn current_user(&self, token: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, username: String, password: String, role: String) -> AppResult<User> {
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.users.create(username, password_hash, role).await?;

        tracing::info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user)
    }

    async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let user = self.users.find_by_username(username).await?;

        let password_valid = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()).verify(password),
            None => {
                match DUMMY_PASSWORD.as_ref() {
                    Ok(dummy) => {
                        dummy.verify(password);
                    }
                    Err(e) => tracing::error!("Dummy password unavailable: {}", e),
                }
                false
            }
        };

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::debug!("Rejected login attempt");
                return Err(AppError::InvalidCredentials);
            }
        };

        let session = self.sessions.create(user.id).await?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(session)
    }

    async fn logout(&self, token: &str) -> AppResult<()> {
        self.sessions.revoke(token).await
    }

    async fn current_user(&self, token: &str) -> AppResult<User> {
        let session = self
            .sessions
            .get(token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        match self.users.find_by_id(session.user_id).await? {
            Some(user) => Ok(user),
            None => {
                // user removed out of band; the session is worthless
                self.sessions.revoke(token).await?;
                Err(AppError::Unauthorized)
            }
        }
    }
}
