//! REST calls for the board view.
//!
//! The two calls the move coordinator depends on sit behind the
//! [`BoardService`] trait so tests can substitute a stub; the rest are
//! plain async functions.

use serde_json::json;
use uuid::Uuid;

use crate::core::models::{BoardColumn, Task, TaskComment, TeamMember};
use crate::core::services::{http, ApiError};

#[allow(async_fn_in_trait)]
pub trait BoardService {
    /// Full column/task layout for a project. Idempotent; the result
    /// replaces the in-memory board wholesale.
    async fn fetch_board(&self, project_id: i64) -> Result<Vec<BoardColumn>, ApiError>;

    /// Persist a cross-column move. Called exactly once per drop event.
    async fn confirm_move(&self, task_id: i64, dest_column_id: i64) -> Result<(), ApiError>;
}

/// The real board service, backed by the TaskHive API.
#[derive(Clone, Copy)]
pub struct HttpBoardService;

impl BoardService for HttpBoardService {
    async fn fetch_board(&self, project_id: i64) -> Result<Vec<BoardColumn>, ApiError> {
        http::get_json(&format!("/tasks/board/{}", project_id)).await
    }

    async fn confirm_move(&self, task_id: i64, dest_column_id: i64) -> Result<(), ApiError> {
        // The endpoint echoes the updated task; the optimistic board
        // already reflects the move, so the body is discarded.
        let _: serde_json::Value = http::patch_json(
            &format!("/tasks/{}/move", task_id),
            &json!({ "new_status_id": dest_column_id }),
        )
        .await?;
        Ok(())
    }
}

pub async fn create_task(
    project_id: i64,
    status_id: i64,
    title: &str,
    description: &str,
    assigned_to: Option<i64>,
) -> Result<Task, ApiError> {
    http::post_json(
        "/tasks",
        &json!({
            "title": title,
            "description": description,
            "status_id": status_id,
            "project_id": project_id,
            "assigned_to": assigned_to,
        }),
    )
    .await
}

pub async fn create_column(project_id: i64, name: &str) -> Result<BoardColumn, ApiError> {
    #[derive(serde::Deserialize)]
    struct StatusResponse {
        id: i64,
        name: String,
    }
    // The API wants an opaque position token for new columns.
    let created: StatusResponse = http::post_json(
        "/statuses",
        &json!({
            "name": name,
            "position": Uuid::new_v4().to_string(),
            "project_id": project_id,
        }),
    )
    .await?;
    Ok(BoardColumn {
        status_id: created.id,
        status_name: created.name,
        user_role: None,
        current_user_id: None,
        tasks: Vec::new(),
    })
}

pub async fn project_members(project_id: i64) -> Result<Vec<TeamMember>, ApiError> {
    http::get_json(&format!("/projects/{}/members", project_id)).await
}

pub async fn task_comments(task_id: i64) -> Result<Vec<TaskComment>, ApiError> {
    http::get_json(&format!("/tasks/{}/comments", task_id)).await
}

pub async fn add_comment(task_id: i64, comment: &str) -> Result<TaskComment, ApiError> {
    http::post_json(
        &format!("/tasks/{}/comments", task_id),
        &json!({ "comment": comment }),
    )
    .await
}
