use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskComment {
    pub id: i64,
    pub comment: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TaskComment {
    pub fn created_on(&self) -> String {
        self.created_at.format("%b %e, %Y").to_string()
    }
}
