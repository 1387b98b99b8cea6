use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use roster_core::AppError;
use tracing::instrument;

use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::templates::{INDEX_TEMPLATE, NOT_FOUND_TEMPLATE, render};

#[instrument(skip(state))]
pub async fn show_index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let students = StudentService::list_students(state.store.as_ref()).await?;
    render(&state.templates, INDEX_TEMPLATE, context! { students => students })
}

/// Fallback for unknown paths and for known paths with an unsupported method.
pub async fn route_not_found(State(state): State<AppState>) -> Response {
    match render(&state.templates, NOT_FOUND_TEMPLATE, context! {}) {
        Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
        Err(e) => e.into_response(),
    }
}
