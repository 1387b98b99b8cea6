use roster_core::AppError;
use tracing::{error, instrument};

use crate::metrics::{track_store_error, track_student_created, track_student_deleted, track_student_updated};
use crate::modules::students::model::{Student, StudentInput, StudentPatch};
use crate::modules::students::store::{StoreError, StudentStore};
use crate::validator::{normalize_and_validate, parse_json};

pub struct StudentService;

/// Path ids that are not positive integers can never match a row.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

fn store_failure(operation: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |e| {
        error!(operation, error = %e, "Student store operation failed");
        track_store_error(operation);
        AppError::database(e)
    }
}

impl StudentService {
    #[instrument(skip(store))]
    pub async fn list_students(store: &dyn StudentStore) -> Result<Vec<Student>, AppError> {
        store.list_all().await.map_err(store_failure("list_all"))
    }

    /// `input` must already be normalized and validated.
    #[instrument(skip(store))]
    pub async fn create_student(
        store: &dyn StudentStore,
        input: StudentInput,
    ) -> Result<Student, AppError> {
        let student = store.create(&input).await.map_err(store_failure("create"))?;
        track_student_created();
        Ok(student)
    }

    #[instrument(skip(store))]
    pub async fn get_student(store: &dyn StudentStore, id: &str) -> Result<Student, AppError> {
        let Some(id) = parse_id(id) else {
            return Err(AppError::student_not_found());
        };

        store
            .find_by_id(id)
            .await
            .map_err(store_failure("find_by_id"))?
            .ok_or_else(AppError::student_not_found)
    }

    /// Exact match against the stored value; `cpf` is not normalized.
    #[instrument(skip(store))]
    pub async fn find_student_by_cpf(
        store: &dyn StudentStore,
        cpf: &str,
    ) -> Result<Student, AppError> {
        store
            .find_by_cpf(cpf)
            .await
            .map_err(store_failure("find_by_cpf"))?
            .ok_or_else(AppError::student_not_found)
    }

    /// Loads the student, overlays the keys present in `body`, then
    /// normalizes and validates the result before writing it back.
    ///
    /// The lookup runs first, so an unknown id is a 404 even when the body
    /// would not parse.
    #[instrument(skip(store, body))]
    pub async fn update_student(
        store: &dyn StudentStore,
        id: &str,
        body: &[u8],
    ) -> Result<Student, AppError> {
        let existing = Self::get_student(store, id).await?;

        let patch: StudentPatch = parse_json(body)?;
        let input = normalize_and_validate(patch.apply_to(&existing))?;

        let updated = store
            .update(existing.id, &input)
            .await
            .map_err(store_failure("update"))?
            .ok_or_else(AppError::student_not_found)?;

        track_student_updated();
        Ok(updated)
    }

    /// Succeeds whether or not a row was removed.
    #[instrument(skip(store))]
    pub async fn delete_student(store: &dyn StudentStore, id: &str) -> Result<(), AppError> {
        let Some(id) = parse_id(id) else {
            track_student_deleted(false);
            return Ok(());
        };

        let removed = store.delete(id).await.map_err(store_failure("delete"))?;
        track_student_deleted(removed);
        Ok(())
    }
}
