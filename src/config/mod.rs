//! Portal configuration module
//!
//! Environment-backed settings plus route, session and role constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
