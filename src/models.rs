use serde::{Deserialize, Serialize};

/// A to-do item as stored and returned by the API.
///
/// `Todo::default()` is the empty sentinel returned for ids that do not
/// exist; its `id` is empty and therefore omitted from the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Todo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Todo {
    pub fn is_empty_sentinel(&self) -> bool {
        self.id.is_empty()
    }
}

/// Request body for creating a to-do item. Ids are always assigned by the
/// store, so there is no field for one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewTodo {
    pub fn into_todo(self, id: String) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
        }
    }
}
