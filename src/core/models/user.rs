use serde::{Deserialize, Serialize};

/// A member of a project team, used to populate the assignee select.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// The authenticated user as reported by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub can_create_projects: bool,
}
