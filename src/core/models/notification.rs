use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    /// "project_assigned", "task_assigned", "comment_added", ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

impl Notification {
    pub fn icon(&self) -> &'static str {
        match self.kind.as_str() {
            "project_assigned" => "📁",
            "task_assigned" => "✅",
            "comment_added" => "💬",
            _ => "🔔",
        }
    }

    pub fn created_on(&self) -> String {
        self.created_at.format("%b %e, %Y %H:%M").to_string()
    }
}
