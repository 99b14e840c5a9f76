use axum::Json;
use utoipa::OpenApi;

use crate::error::{HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{NewTodo, Todo};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-spanner-todo API",
        version = "1.0.0",
        description = "A minimal to-do list backed by Google Cloud Spanner"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get::get_handler,
        handlers::list::list_handler,
        handlers::create::create_handler
    ),
    components(
        schemas(
            Todo,
            NewTodo,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "todos", description = "To-do list operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
