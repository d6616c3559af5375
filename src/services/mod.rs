//! Application services layer.
//!
//! Services orchestrate domain logic and the stores behind trait objects,
//! so handlers never touch storage directly.

mod auth_service;

pub use auth_service::{prepare_dummy_password, AuthService, Authenticator};
