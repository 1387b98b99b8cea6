use std::sync::Arc;

use anyhow::Context;
use minijinja::Environment;
use roster_config::{CorsConfig, DatabaseConfig, ServerConfig, StoreBackend};
use roster_db::init_db_pool;
use tracing::info;

use crate::modules::students::store::{MemoryStudentStore, PgStudentStore, StudentStore};
use crate::templates::load_templates;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
    pub templates: Arc<Environment<'static>>,
    pub server_config: ServerConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn StudentStore>,
        templates: Environment<'static>,
        server_config: ServerConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            store,
            templates: Arc::new(templates),
            server_config,
            cors_config,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.backend_name())
            .field("server_config", &self.server_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Connects the store, brings its schema up to date and loads templates.
///
/// Any failure here aborts startup.
pub async fn init_app_state(
    server_config: ServerConfig,
    database_config: &DatabaseConfig,
    cors_config: CorsConfig,
) -> anyhow::Result<AppState> {
    let store: Arc<dyn StudentStore> = match server_config.store_backend {
        StoreBackend::Postgres => {
            let pool = init_db_pool(database_config)
                .await
                .context("Error connecting to database")?;
            Arc::new(PgStudentStore::new(pool))
        }
        StoreBackend::Memory => Arc::new(MemoryStudentStore::new()),
    };

    store
        .migrate()
        .await
        .context("Error migrating the students schema")?;
    info!(backend = store.backend_name(), "Student store ready");

    let templates = load_templates(&server_config.templates_dir)?;

    Ok(AppState::new(store, templates, server_config, cors_config))
}
