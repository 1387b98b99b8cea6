use std::path::PathBuf;

use crate::{env_or, env_parse_or};

#[derive(Clone, Debug)]
pub struct ObservabilityConfig {
    pub enabled: bool,
    pub log_level: String,
    pub log_dir: PathBuf,
    pub metrics_port: u16,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        let enabled = env_or("OBSERVABILITY_ENABLED", "true");

        Self {
            enabled: enabled.to_lowercase() != "false" && enabled != "0",
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: PathBuf::from(env_or("LOG_DIR", "storage/logs")),
            metrics_port: env_parse_or("METRICS_PORT", 9000),
        }
    }
}
