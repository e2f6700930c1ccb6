use serde_json::json;

use crate::core::models::Project;
use crate::core::services::{http, ApiError};

/// Form output of the create-project modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technology_stack: String,
    pub team_size: u32,
}

pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    http::get_json("/projects").await
}

pub async fn create_project(draft: &ProjectDraft) -> Result<Project, ApiError> {
    let technology_stack = match draft.technology_stack.trim() {
        "" => None,
        stack => Some(stack),
    };
    http::post_json(
        "/projects",
        &json!({
            "title": draft.title,
            "description": draft.description,
            "technology_stack": technology_stack,
            "team_size": draft.team_size,
        }),
    )
    .await
}

pub async fn delete_project(project_id: i64) -> Result<(), ApiError> {
    let _: serde_json::Value = http::delete_json(&format!("/projects/{}", project_id)).await?;
    Ok(())
}
