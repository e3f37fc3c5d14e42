use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tarefa de um usuário (armazenada em `users.{userId}.tasks`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Empty until the store assigns one
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub completed: bool,

    /// Server timestamp; absent when the stored value could not be read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub description: String,
}

impl Task {
    /// New, not yet persisted task with the default flags.
    pub fn new(name: impl Into<String>) -> Self {
        Task {
            id: String::new(),
            name: name.into(),
            completed: false,
            created_at: None,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// One page of a user's tasks plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub total_count: u64,
}
