//! # Roster DB
//!
//! PostgreSQL pool creation and schema migrations for the Roster API.
//!
//! The migrations under the workspace `migrations/` directory are embedded at
//! compile time, so the server and CLI binaries carry their own schema.
//!
//! # Example
//!
//! ```ignore
//! use roster_config::DatabaseConfig;
//! use roster_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sqlx::Error> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::str::FromStr;

use roster_config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use tracing::{info, instrument};

pub use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connection options for `config`.
///
/// `DATABASE_URL` is parsed as-is; otherwise each `DB_*` part is set
/// individually, so credentials never need URL escaping.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    if let Some(url) = &config.url_override {
        return PgConnectOptions::from_str(url);
    }

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(PgSslMode::from_str(&config.ssl_mode)?))
}

/// Opens a PostgreSQL connection pool.
///
/// The pool is cheaply cloneable and safe to share between request tasks.
/// An unreachable server is reported immediately rather than on first query.
#[instrument]
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options(config)?)
        .await?;

    info!(host = %config.host, database = %config.name, "Connected to database");
    Ok(pool)
}

/// Brings the `students` table up to date with the model.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
