//! Calls against the identity endpoints. Token handling lives in
//! `core::services::session`; these functions only talk to the API.

use serde::Deserialize;
use serde_json::json;

use crate::core::models::CurrentUser;
use crate::core::services::{http, session, ApiError};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Exchange credentials for a bearer token and store it. The endpoint is
/// an OAuth2 password form, so the email travels as `username`.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    let response: LoginResponse =
        http::post_form("/auth/login", &[("username", email), ("password", password)]).await?;
    session::store_token(&response.access_token);
    Ok(())
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = http::post_json(
        "/auth/register",
        &json!({ "name": name, "email": email, "password": password }),
    )
    .await?;
    Ok(())
}

pub async fn current_user() -> Result<CurrentUser, ApiError> {
    http::get_json("/auth/me").await
}

pub fn logout() {
    session::clear_token();
}
