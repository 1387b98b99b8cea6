use crate::modules::greetings::controller::greetings;
use crate::state::AppState;
use axum::{Router, routing::get};

/// `/{name}` matches any single segment, so every other top-level GET route
/// must be a static path to take precedence over it.
pub fn init_greetings_router() -> Router<AppState> {
    Router::new().route("/{name}", get(greetings))
}
