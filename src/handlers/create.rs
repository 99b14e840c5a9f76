use crate::error::ApiError;
use crate::models::NewTodo;
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, StatusCode, header},
};

pub const CREATED_BODY: &str = "Created";

/// POST /todos handler - Create a todo
///
/// The body is parsed here rather than through the `Json` extractor so that
/// a malformed payload yields the parser's message instead of axum's
/// rejection. Any `id` in the payload is ignored.
#[utoipa::path(
    post,
    path = routes::TODO_LIST,
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo created; Location names the new todo", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed body (parser message) or store error", body = String, content_type = "text/plain")
    ),
    tag = "todos"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, [(HeaderName, String); 1], &'static str), ApiError> {
    let new_todo: NewTodo = serde_json::from_slice(&body)?;

    let todo = state.store.create(new_todo).await?;

    tracing::info!("Successfully created todo with id: {}", todo.id);
    let location = format!("{}/{}", routes::TODO_LIST, todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        CREATED_BODY,
    ))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{failing_app, memory_app, send};
    use crate::models::Todo;
    use crate::store::TodoStore;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_create_then_read_back() {
        let (app, _store) = memory_app();

        let response = send(
            &app,
            "POST",
            "/todos",
            Some(r#"{"title":"x","description":"y"}"#),
        )
        .await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body, "Created");

        let location = response.headers["location"].to_str().unwrap().to_string();
        assert!(location.starts_with("/todos/"));

        let fetched = send(&app, "GET", &location, None).await;
        assert_eq!(fetched.status, StatusCode::OK);

        let todo: Todo = fetched.json();
        assert_eq!(format!("/todos/{}", todo.id), location);
        assert_eq!(todo.title, "x");
        assert_eq!(todo.description, "y");
    }

    #[tokio::test]
    async fn test_create_ignores_caller_id() {
        let (app, store) = memory_app();

        let response = send(
            &app,
            "POST",
            "/todos",
            Some(r#"{"id":"mine","title":"x","description":"y"}"#),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);

        assert_eq!(store.get_one("mine").await.unwrap(), None);
        let todos = store.get_all().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_ne!(todos[0].id, "mine");
        assert!(uuid::Uuid::parse_str(&todos[0].id).is_ok());
    }

    #[tokio::test]
    async fn test_create_on_any_path() {
        let (app, store) = memory_app();

        let response = send(
            &app,
            "POST",
            "/somewhere/else",
            Some(r#"{"title":"x","description":"y"}"#),
        )
        .await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let (app, store) = memory_app();

        let response = send(&app, "POST", "/todos", Some("{")).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!response.body.is_empty());
        assert_ne!(response.body, "Internal Server Error");
        assert!(response.body.contains("EOF"), "body: {}", response.body);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_wrong_field_type() {
        let (app, _store) = memory_app();

        let response = send(&app, "POST", "/todos", Some(r#"{"title":42}"#)).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body.contains("invalid type"), "body: {}", response.body);
    }

    #[tokio::test]
    async fn test_create_store_failure() {
        let app = failing_app();

        let response = send(
            &app,
            "POST",
            "/todos",
            Some(r#"{"title":"x","description":"y"}"#),
        )
        .await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, "Internal Server Error");
    }
}
