//! CLI module - Command-line interface for the portal.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations

pub mod args;

pub use args::{Cli, Commands};
