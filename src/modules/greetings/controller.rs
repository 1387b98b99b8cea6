use axum::{Json, extract::Path};
use roster_models::{ErrorResponse, GreetingsResponse};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/{name}",
    params(
        ("name" = String, Path, description = "Name to greet")
    ),
    responses(
        (status = 200, description = "Successful response", body = GreetingsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Greetings"
)]
#[instrument]
pub async fn greetings(Path(name): Path<String>) -> Json<GreetingsResponse> {
    Json(GreetingsResponse::for_name(&name))
}
