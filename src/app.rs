use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::api_doc::openapi_handler;
use crate::handlers::{create_handler, dispatch_handler, get_handler, health_handler, list_handler};
use crate::routes;
use crate::state::AppState;

/// Build the HTTP router.
///
/// Every method router falls back to `dispatch_handler`, as does the router
/// itself, so requests outside the registered routes still get the todo
/// routing rules (POST anywhere creates, everything else is 405). `HEAD` is
/// routed to `dispatch_handler` explicitly; `get` alone would also answer it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            routes::HEALTH,
            get(health_handler)
                .head(dispatch_handler)
                .fallback(dispatch_handler),
        )
        .route(
            routes::OPENAPI,
            get(openapi_handler)
                .head(dispatch_handler)
                .fallback(dispatch_handler),
        )
        .route(
            routes::TODO_LIST,
            get(list_handler)
                .head(dispatch_handler)
                .post(create_handler)
                .fallback(dispatch_handler),
        )
        .route(
            routes::TODO_ITEM,
            get(get_handler)
                .head(dispatch_handler)
                .fallback(dispatch_handler),
        )
        .fallback(dispatch_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
