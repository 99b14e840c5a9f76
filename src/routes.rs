// Route path constants - single source of truth for all API paths

use axum::http::Method;

pub const HEALTH: &str = "/health";
pub const OPENAPI: &str = "/api-docs/openapi.json";
pub const TODO_LIST: &str = "/todos";
pub const TODO_ITEM: &str = "/todos/{id}";

const TODO_ITEM_PREFIX: &str = "/todos/";

/// Which todo operation a request maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ReadOne(String),
    ReadAll,
    Create,
    NotAllowed,
}

/// The todo id in an item path: everything after `/todos/`, taken verbatim
/// (no percent-decoding). `None` when the remainder is empty.
pub fn todo_id(path: &str) -> Option<&str> {
    path.strip_prefix(TODO_ITEM_PREFIX).filter(|id| !id.is_empty())
}

impl Route {
    /// Resolve a method and path to a todo operation.
    ///
    /// `GET /todos/<anything non-empty>` is checked before `GET /todos`, and
    /// `POST` creates regardless of path.
    pub fn resolve(method: &Method, path: &str) -> Self {
        if *method == Method::GET {
            if let Some(id) = todo_id(path) {
                return Route::ReadOne(id.to_string());
            }
            if path == TODO_LIST {
                return Route::ReadAll;
            }
        }
        if *method == Method::POST {
            return Route::Create;
        }
        Route::NotAllowed
    }
}
