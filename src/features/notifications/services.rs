use serde::Deserialize;

use crate::core::models::Notification;
use crate::core::services::{http, ApiError};

#[derive(Debug, Deserialize)]
struct UnreadCount {
    count: u32,
}

pub async fn unread_count() -> Result<u32, ApiError> {
    let response: UnreadCount = http::get_json("/notifications/unread-count").await?;
    Ok(response.count)
}

pub async fn list() -> Result<Vec<Notification>, ApiError> {
    http::get_json("/notifications").await
}

pub async fn mark_read(notification_id: i64) -> Result<(), ApiError> {
    let _: serde_json::Value =
        http::post_json(&format!("/notifications/{}/read", notification_id), &serde_json::json!({}))
            .await?;
    Ok(())
}

pub async fn mark_all_read() -> Result<(), ApiError> {
    let _: serde_json::Value =
        http::post_json("/notifications/mark-all-read", &serde_json::json!({})).await?;
    Ok(())
}
