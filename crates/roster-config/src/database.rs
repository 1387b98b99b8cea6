//! Database connection settings.
//!
//! `DATABASE_URL` wins when set. Otherwise the connection is described by the
//! `DB_*` variables, whose defaults point at a local development server.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: full PostgreSQL connection string
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_SSLMODE`
//! - `DB_MAX_CONNECTIONS`: pool size (default: 5)

use std::env;

use crate::{env_or, env_parse_or};

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: String,
    pub max_connections: u32,
    pub url_override: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("DB_HOST", "localhost"),
            port: env_parse_or("DB_PORT", 5432),
            user: env_or("DB_USER", "root"),
            password: env_or("DB_PASSWORD", "root"),
            name: env_or("DB_NAME", "root"),
            ssl_mode: env_or("DB_SSLMODE", "disable"),
            max_connections: env_parse_or("DB_MAX_CONNECTIONS", 5),
            url_override: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "root".to_string(),
            password: "root".to_string(),
            name: "root".to_string(),
            ssl_mode: "disable".to_string(),
            max_connections: 5,
            url_override: None,
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("url_override", &self.url_override.as_ref().map(|_| "<set>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let config = DatabaseConfig {
            password: "hunter2".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
