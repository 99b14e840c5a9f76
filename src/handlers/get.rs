use crate::error::ApiError;
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::{StatusCode, Uri}};

/// GET /todos/:id handler - Retrieve a single todo
///
/// An unknown id is not an error: the response is 200 with an empty todo.
/// The id is taken verbatim from the request path, without percent-decoding.
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Id assigned to the todo at creation")
    ),
    responses(
        (status = 200, description = "Todo found, or an empty todo if the id is unknown", body = Todo),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "todos"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    match routes::todo_id(uri.path()) {
        Some(id) => read_one(&state, id).await,
        None => Err(ApiError::MethodNotAllowed),
    }
}

pub async fn read_one(state: &AppState, id: &str) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.store.get_one(id).await?.unwrap_or_default();

    if todo.is_empty_sentinel() {
        tracing::info!("Todo not found with id: {}", id);
    } else {
        tracing::info!("Successfully retrieved todo with id: {}", id);
    }

    Ok((StatusCode::OK, Json(todo)))
}
