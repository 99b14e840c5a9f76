use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use super::{TodoStore, new_todo_id};
use crate::models::{NewTodo, Todo};

/// Process-local todo store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    todos: DashMap<String, Todo>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn get_one(&self, id: &str) -> Result<Option<Todo>> {
        Ok(self.todos.get(id).map(|entry| entry.value().clone()))
    }

    async fn get_all(&self) -> Result<Vec<Todo>> {
        Ok(self
            .todos
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        let todo = new_todo.into_todo(new_todo_id());
        self.todos.insert(todo.id.clone(), todo.clone());

        tracing::debug!("Stored todo with id: {}", todo.id);
        Ok(todo)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
