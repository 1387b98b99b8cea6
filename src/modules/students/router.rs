use crate::modules::students::controller::{
    create_student, delete_student, get_student, get_students, search_by_cpf, update_student,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/students", post(create_student).get(get_students))
        .route(
            "/students/{id}",
            get(get_student).patch(update_student).delete(delete_student),
        )
        .route("/students/cpf/{cpf}", get(search_by_cpf))
}
