//! Domain layer - Core portal entities and logic
//!
//! Users, login sessions, password hashing and the disease catalog,
//! independent of HTTP and storage concerns.

pub mod catalog;
pub mod password;
pub mod session;
pub mod user;

pub use password::Password;
pub use session::Session;
pub use user::{User, UserId};
