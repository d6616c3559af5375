//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Routes
// =============================================================================

/// Login page, also the landing page for anonymous visitors
pub const LOGIN_PATH: &str = "/";

/// Registration page
pub const REGISTER_PATH: &str = "/register";

/// Authenticated landing page
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Session termination
pub const LOGOUT_PATH: &str = "/logout";

// =============================================================================
// Sessions
// =============================================================================

/// Name of the cookie carrying the opaque session token
pub const SESSION_COOKIE_NAME: &str = "session";

/// Default server-side session lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Longest accepted session lifetime in hours (100 years)
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 100;

/// Seconds per hour (for session expiry calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Redis key prefix for session data
pub const CACHE_PREFIX_SESSION: &str = "session:";

// =============================================================================
// User Roles
// =============================================================================

/// Hospital staff
pub const ROLE_STAFF: &str = "staff";

/// Doctor
pub const ROLE_DOCTOR: &str = "doctor";

/// Patient
pub const ROLE_PATIENT: &str = "patient";

/// Roles offered by the registration form, in display order.
///
/// The credential store does not enforce this list.
pub const FORM_ROLES: &[&str] = &[ROLE_STAFF, ROLE_DOCTOR, ROLE_PATIENT];

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database URL: a local SQLite file, created if missing
pub const DEFAULT_DATABASE_URL: &str = "sqlite://hospital.db?mode=rwc";

/// Maximum username length accepted by the users table
pub const MAX_USERNAME_LENGTH: u32 = 100;

/// Maximum stored password hash length
pub const MAX_PASSWORD_HASH_LENGTH: u32 = 200;

/// Maximum role label length
pub const MAX_ROLE_LENGTH: u32 = 20;
