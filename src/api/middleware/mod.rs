//! API middleware.

mod auth;

pub use auth::{expired_session_cookie, session_cookie, session_middleware, CurrentUser};
