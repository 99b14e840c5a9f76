use crate::error::ApiError;
use crate::handlers::get::read_one;
use crate::handlers::{create_handler, list_handler};
use crate::routes::Route;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

/// Fallback for requests the explicit routes don't match
///
/// Covers `POST` to arbitrary paths, multi-segment item paths, and every
/// method the todo routes don't register.
pub async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    match Route::resolve(&method, uri.path()) {
        Route::ReadOne(id) => read_one(&state, &id).await.into_response(),
        Route::ReadAll => list_handler(State(state)).await.into_response(),
        Route::Create => create_handler(State(state), body).await.into_response(),
        Route::NotAllowed => {
            tracing::info!("No route for {} {}", method, uri.path());
            ApiError::MethodNotAllowed.into_response()
        }
    }
}
