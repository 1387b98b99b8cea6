//! # Roster Config
//!
//! Configuration types for the Roster API, loaded from environment variables.
//!
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: Listener address, template and asset directories, store backend
//! - [`cors`]: Allowed CORS origins
//! - [`observability`]: Log and metrics settings

pub mod cors;
pub mod database;
pub mod observability;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use observability::ObservabilityConfig;
pub use server::{ServerConfig, StoreBackend};

use std::env;
use std::str::FromStr;

use tracing::warn;

pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Falls back to `default` when `key` is unset, and warns when it is set
/// but does not parse.
pub(crate) fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(key, env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparsable environment variable, using default");
            default
        }
    }
}
