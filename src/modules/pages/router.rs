use crate::modules::pages::controller::show_index_page;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_pages_router() -> Router<AppState> {
    Router::new().route("/index", get(show_index_page))
}
