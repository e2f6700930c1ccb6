use serde::{Deserialize, Serialize};

/// One kanban column as returned by `GET /tasks/board/{project_id}`.
///
/// The board endpoint returns the full layout on every call; the client
/// replaces its in-memory board wholesale with whatever this deserializes
/// to, it never merges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardColumn {
    pub status_id: i64,
    pub status_name: String,
    #[serde(default)]
    pub user_role: Option<String>,
    #[serde(default)]
    pub current_user_id: Option<i64>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status_id: i64,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub assigned_user_name: Option<String>,
    #[serde(default)]
    pub assigned_user_email: Option<String>,
}

/// Ephemeral description of one drag-and-drop move. Built from the drag
/// payload at drop time and consumed by the move coordinator; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRequest {
    pub task_id: i64,
    pub source_column_id: i64,
    pub dest_column_id: i64,
}
