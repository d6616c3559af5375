//! Infrastructure layer - External systems integration
//!
//! - SQLite database (SeaORM) holding the credential store
//! - Session stores (in-memory or Redis)

pub mod db;
pub mod repositories;
pub mod sessions;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};
pub use sessions::{MemorySessionStore, RedisSessionStore, SessionStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
