use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technology_stack: Option<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
    /// "leader" or "member" for the requesting user.
    #[serde(default)]
    pub user_role: Option<String>,
    /// Percentage of tasks in a done column, computed server-side.
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Project {
    pub fn is_leader(&self) -> bool {
        self.user_role.as_deref() == Some("leader")
    }
}
