use async_trait::async_trait;
use roster_db::{MIGRATOR, PgPool};
use roster_models::{Student, StudentInput};
use tracing::instrument;

use super::{StoreResult, StudentStore};

const STUDENT_COLUMNS: &str = "id, created_at, updated_at, deleted_at, name, cpf, rg";

#[derive(Clone, Debug)]
pub struct PgStudentStore {
    db: PgPool,
}

impl PgStudentStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> StoreResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE deleted_at IS NULL ORDER BY id"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(students)
    }

    #[instrument(skip(self))]
    async fn create(&self, input: &StudentInput) -> StoreResult<Student> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, cpf, rg) VALUES ($1, $2, $3) RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.cpf)
        .bind(&input.rg)
        .fetch_one(&self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(&format!(
            r#"
            SELECT {STUDENT_COLUMNS} FROM students
            WHERE cpf = $1 AND deleted_at IS NULL
            ORDER BY id
            LIMIT 1
            "#
        ))
        .bind(cpf)
        .fetch_optional(&self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, input: &StudentInput) -> StoreResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(&format!(
            r#"
            UPDATE students
            SET name = $1, cpf = $2, rg = $3, updated_at = NOW()
            WHERE id = $4 AND deleted_at IS NULL
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.cpf)
        .bind(&input.rg)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE students SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn migrate(&self) -> StoreResult<()> {
        MIGRATOR.run(&self.db).await?;
        Ok(())
    }
}
