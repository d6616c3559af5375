//! Hospital Portal - registration, login and role-aware dashboards.
//!
//! Users register with a role (staff, doctor or patient), log in with a
//! server-side session, and see a dashboard listing the disease catalog.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, sessions, password hashing, disease catalog
//! - **services**: Authentication use cases
//! - **infra**: SQLite credential store and session stores
//! - **api**: HTTP handlers, session middleware, and routes
//! - **views**: HTML page templates
//! - **utils**: Utility functions and helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Show migration status
//! cargo run -- migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;
pub mod views;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Session, User};
pub use errors::{AppError, AppResult};
