//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, SessionStore, UserStore};
use crate::services::{AuthService, Authenticator};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Session store, exposed for health checks
    pub sessions: Arc<dyn SessionStore>,
    /// Database connection
    pub database: Arc<Database>,
    /// Whether the session cookie carries the `Secure` attribute
    pub cookie_secure: bool,
}

impl AppState {
    /// Wire the SeaORM credential store and the given session store into
    /// the authentication service.
    pub fn from_config(
        database: Arc<Database>,
        sessions: Arc<dyn SessionStore>,
        config: &Config,
    ) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let auth_service = Arc::new(Authenticator::new(users, sessions.clone()));

        Self {
            auth_service,
            sessions,
            database,
            cookie_secure: config.cookie_secure,
        }
    }
}
