//! Persistence port for students.
//!
//! Handlers never talk to a database directly; they receive an
//! `Arc<dyn StudentStore>` through the application state. Implementations
//! must be safe for concurrent use.
//!
//! - [`postgres`]: PostgreSQL implementation backed by sqlx
//! - [`memory`]: In-process implementation for tests and local runs
//!
//! Every implementation treats deletion as soft: a deleted row is never
//! returned again, but its id is not reused.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;

use async_trait::async_trait;
use roster_models::{Student, StudentInput};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Short name used in logs.
    fn backend_name(&self) -> &'static str;

    /// All live students, ordered by id.
    async fn list_all(&self) -> StoreResult<Vec<Student>>;

    /// Persists a new student, assigning its id and timestamps.
    async fn create(&self, input: &StudentInput) -> StoreResult<Student>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Student>>;

    /// The live student with the lowest id whose `cpf` equals `cpf` exactly.
    async fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Student>>;

    /// Overwrites the writable fields of a live student.
    ///
    /// Returns `None` when no live row has this id.
    async fn update(&self, id: i64, input: &StudentInput) -> StoreResult<Option<Student>>;

    /// Returns whether a live row was deleted.
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Ensures the backing schema matches the `Student` shape.
    async fn migrate(&self) -> StoreResult<()>;
}
