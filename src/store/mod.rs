mod memory;
mod spanner;

pub use memory::MemoryTodoStore;
pub use spanner::SpannerTodoStore;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::models::{NewTodo, Todo};

/// Name of the table (or collection) holding todo records.
pub const TODOS_TABLE: &str = "todos";

/// Storage operations behind the todo endpoints
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Point lookup by id. `Ok(None)` means no such todo, not a failure.
    async fn get_one(&self, id: &str) -> Result<Option<Todo>>;

    /// Full scan in the store's native order.
    async fn get_all(&self) -> Result<Vec<Todo>>;

    /// Store a new todo under a freshly generated id and return it.
    async fn create(&self, new_todo: NewTodo) -> Result<Todo>;

    /// Cheap round trip proving the store is reachable.
    async fn health_check(&self) -> Result<()>;
}

/// Generate a new todo id (random v4 UUID).
pub fn new_todo_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Build the store selected by configuration.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn TodoStore>> {
    match config {
        StoreConfig::Spanner(spanner) => {
            let store = SpannerTodoStore::from_config(spanner).await?;
            Ok(Arc::new(store))
        }
        StoreConfig::Memory => {
            tracing::info!("Using in-memory todo store");
            Ok(Arc::new(MemoryTodoStore::new()))
        }
    }
}
