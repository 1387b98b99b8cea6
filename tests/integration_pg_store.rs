//! Exercises `PgStudentStore` against a real database.
//!
//! Run with `DATABASE_URL` pointing at a disposable PostgreSQL server:
//! `cargo test --test integration_pg_store -- --ignored`

use roster::modules::students::store::{PgStudentStore, StudentStore};
use roster_models::StudentInput;
use sqlx::PgPool;

fn bogus() -> StudentInput {
    StudentInput::new("Bogus", "00100200309", "050060075")
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_create_and_find(pool: PgPool) {
    let store = PgStudentStore::new(pool);

    let created = store.create(&bogus()).await.unwrap();
    assert!(created.id > 0);
    assert!(created.deleted_at.is_none());

    let found = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);

    let by_cpf = store.find_by_cpf("00100200309").await.unwrap().unwrap();
    assert_eq!(by_cpf.id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_update_overwrites_fields(pool: PgPool) {
    let store = PgStudentStore::new(pool);
    let created = store.create(&bogus()).await.unwrap();

    let input = StudentInput::new("Bogus Junior", "00100200309", "050060075");
    let updated = store.update(created.id, &input).await.unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Bogus Junior");
    assert_eq!(updated.created_at, created.created_at);
    assert!(store.update(created.id + 1000, &input).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_soft_delete(pool: PgPool) {
    let store = PgStudentStore::new(pool.clone());
    let created = store.create(&bogus()).await.unwrap();

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
    assert!(store.find_by_id(created.id).await.unwrap().is_none());
    assert!(store.list_all().await.unwrap().is_empty());

    let deleted_at: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT deleted_at FROM students WHERE id = $1")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(deleted_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_migrate_is_idempotent(pool: PgPool) {
    let store = PgStudentStore::new(pool);
    store.migrate().await.unwrap();
    store.migrate().await.unwrap();
}
