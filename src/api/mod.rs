//! API layer - HTTP handlers and middleware
//!
//! - Request handlers for the login, register and dashboard pages
//! - Session middleware guarding protected pages
//! - Validated form extractor
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
