use crate::app;
use crate::models::{NewTodo, Todo};
use crate::state::AppState;
use crate::store::{MemoryTodoStore, TodoStore};
use anyhow::Result;
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Store whose every operation fails, for exercising the 500 paths
pub struct FailingStore;

#[async_trait]
impl TodoStore for FailingStore {
    async fn get_one(&self, _id: &str) -> Result<Option<Todo>> {
        Err(anyhow::anyhow!("store unavailable: get_one"))
    }

    async fn get_all(&self) -> Result<Vec<Todo>> {
        Err(anyhow::anyhow!("store unavailable: get_all"))
    }

    async fn create(&self, _new_todo: NewTodo) -> Result<Todo> {
        Err(anyhow::anyhow!("store unavailable: create"))
    }

    async fn health_check(&self) -> Result<()> {
        Err(anyhow::anyhow!("store unavailable: health_check"))
    }
}

pub fn memory_app() -> (Router, Arc<MemoryTodoStore>) {
    let store = Arc::new(MemoryTodoStore::new());
    let app = app::router(AppState::new(store.clone()));
    (app, store)
}

pub fn failing_app() -> Router {
    app::router(AppState::new(Arc::new(FailingStore)))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Empty store that remembers every id it was asked for
#[derive(Default)]
pub struct RecordingStore {
    requested: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn requested_ids(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl TodoStore for RecordingStore {
    async fn get_one(&self, id: &str) -> Result<Option<Todo>> {
        self.requested.lock().unwrap().push(id.to_string());
        Ok(None)
    }

    async fn get_all(&self) -> Result<Vec<Todo>> {
        Ok(Vec::new())
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        Ok(new_todo.into_todo(crate::store::new_todo_id()))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

pub fn recording_app() -> (Router, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::default());
    let app = app::router(AppState::new(store.clone()));
    (app, store)
}
