use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{env_or, env_parse_or};

/// Which `StudentStore` implementation the server wires up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub templates_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub store_backend: StoreBackend,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: env_parse_or("SERVER_PORT", 8000),
            templates_dir: PathBuf::from(env_or("TEMPLATES_DIR", "templates")),
            assets_dir: PathBuf::from(env_or("ASSETS_DIR", "assets")),
            store_backend: env_parse_or("STORE_BACKEND", StoreBackend::Postgres),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            templates_dir: PathBuf::from("templates"),
            assets_dir: PathBuf::from("assets"),
            store_backend: StoreBackend::Postgres,
        }
    }
}
