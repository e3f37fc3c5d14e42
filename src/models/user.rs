use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dono das tarefas, identificado externamente pelo email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        User {
            id: String::new(),
            email: email.into(),
            created_at: None,
        }
    }
}
