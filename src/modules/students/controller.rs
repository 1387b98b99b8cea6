use crate::modules::students::model::{
    DeleteResponse, ErrorResponse, NotFoundResponse, Student, StudentInput, StudentPatch,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use roster_core::AppError;
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = [Student]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::list_students(state.store.as_ref()).await?;
    Ok(Json(students))
}

#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student created successfully", body = Student),
        (status = 400, description = "Malformed body or invalid field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<StudentInput>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::create_student(state.store.as_ref(), input).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = NotFoundResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student(state.store.as_ref(), &id).await?;
    Ok(Json(student))
}

/// Fields absent from the body keep their stored values.
#[utoipa::path(
    patch,
    path = "/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = StudentPatch,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 400, description = "Malformed body or invalid field", body = ErrorResponse),
        (status = 404, description = "Student not found", body = NotFoundResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, body))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update_student(state.store.as_ref(), &id, &body).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/students/cpf/{cpf}",
    params(
        ("cpf" = String, Path, description = "Student CPF, digits only")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = NotFoundResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn search_by_cpf(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::find_student_by_cpf(state.store.as_ref(), &cpf).await?;
    Ok(Json(student))
}

/// Reports success even when no student had this id.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted successfully", body = DeleteResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    StudentService::delete_student(state.store.as_ref(), &id).await?;
    Ok(Json(DeleteResponse::default()))
}
