//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS, SECONDS_PER_HOUR,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Redis URL for the session store; `None` keeps sessions in memory
    pub redis_url: Option<String>,
    pub session_ttl_hours: i64,
    pub cookie_secure: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("redis_url", &self.redis_url.as_ref().map(|_| "[REDACTED]"))
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            redis_url: None,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            cookie_secure: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Every setting has a default, so an empty environment yields a working
    /// local configuration. Bind address and port are CLI arguments.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|v| parse_ttl_hours(&v))
                .unwrap_or(defaults.session_ttl_hours),
            cookie_secure: env::var("COOKIE_SECURE")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cookie_secure),
        }
    }

    /// Session lifetime in seconds, kept within `1..=MAX_SESSION_TTL_HOURS` hours.
    pub fn session_ttl_seconds(&self) -> u64 {
        let hours = self.session_ttl_hours.clamp(1, MAX_SESSION_TTL_HOURS);
        hours.checked_mul(SECONDS_PER_HOUR).unwrap_or(i64::MAX) as u64
    }
}

/// Accepts a whole number of hours between 1 and `MAX_SESSION_TTL_HOURS`.
fn parse_ttl_hours(value: &str) -> Option<i64> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|hours| (1..=MAX_SESSION_TTL_HOURS).contains(hours))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_locally() {
        let config = Config::default();
        assert_eq!(config.database_url, "sqlite://hospital.db?mode=rwc");
        assert!(config.redis_url.is_none());
        assert!(!config.cookie_secure);
        assert_eq!(config.session_ttl_seconds(), 24 * 3600);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" ON "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_parse_ttl_hours() {
        assert_eq!(parse_ttl_hours("24"), Some(24));
        assert_eq!(parse_ttl_hours(" 1 "), Some(1));
        assert_eq!(parse_ttl_hours("0"), None);
        assert_eq!(parse_ttl_hours("-5"), None);
        assert_eq!(parse_ttl_hours("abc"), None);
        assert_eq!(parse_ttl_hours("3000000000"), None);
        assert_eq!(
            parse_ttl_hours(&MAX_SESSION_TTL_HOURS.to_string()),
            Some(MAX_SESSION_TTL_HOURS)
        );
    }

    #[test]
    fn test_oversized_ttl_is_clamped() {
        let config = Config {
            session_ttl_hours: i64::MAX / 1000,
            ..Config::default()
        };
        assert_eq!(
            config.session_ttl_seconds(),
            (MAX_SESSION_TTL_HOURS * SECONDS_PER_HOUR) as u64
        );

        let config = Config {
            session_ttl_hours: 0,
            ..Config::default()
        };
        assert_eq!(config.session_ttl_seconds(), SECONDS_PER_HOUR as u64);
    }

    #[test]
    fn test_debug_redacts_urls() {
        let config = Config {
            redis_url: Some("redis://secret@host".to_string()),
            ..Config::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hospital.db"));
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
