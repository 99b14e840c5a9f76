use crate::error::ApiError;
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /todos handler - List every todo
///
/// No pagination and no ordering guarantee.
#[utoipa::path(
    get,
    path = routes::TODO_LIST,
    responses(
        (status = 200, description = "All todos", body = Vec<Todo>),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "todos"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Todo>>), ApiError> {
    let todos = state.store.get_all().await?;

    tracing::info!("Listed {} todos", todos.len());
    Ok((StatusCode::OK, Json(todos)))
}
