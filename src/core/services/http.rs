//! Fetch wrapper for the TaskHive REST API.
//!
//! Every request carries the stored bearer token; a 401 clears the token
//! and sends the browser back to the app root, which renders the login
//! view. Non-2xx responses are decoded for the server's `detail` string so
//! callers can show it verbatim.

use std::fmt;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::session;

pub const BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status of the failed response, `None` for transport failures.
    pub status: Option<u16>,
    /// Human-readable message, server-supplied where available.
    pub detail: String,
}

impl ApiError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.detail, status),
            None => write!(f, "{}", self.detail),
        }
    }
}

impl std::error::Error for ApiError {}

enum Body {
    Json(String),
    Form(String),
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send("GET", path, None).await?).await
}

pub async fn post_json<T: DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    let payload = serde_json::to_string(body)
        .map_err(|e| ApiError::network(format!("failed to encode request body: {}", e)))?;
    decode(send("POST", path, Some(Body::Json(payload))).await?).await
}

pub async fn patch_json<T: DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    let payload = serde_json::to_string(body)
        .map_err(|e| ApiError::network(format!("failed to encode request body: {}", e)))?;
    decode(send("PATCH", path, Some(Body::Json(payload))).await?).await
}

pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send("DELETE", path, None).await?).await
}

/// POST with an `application/x-www-form-urlencoded` body. The login
/// endpoint is an OAuth2 password form rather than JSON.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    fields: &[(&str, &str)],
) -> Result<T, ApiError> {
    let payload = fields
        .iter()
        .map(|(key, value)| {
            format!("{}={}", key, String::from(js_sys::encode_uri_component(value)))
        })
        .collect::<Vec<_>>()
        .join("&");
    decode(send("POST", path, Some(Body::Form(payload))).await?).await
}

async fn send(method: &str, path: &str, body: Option<Body>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);

    let headers =
        Headers::new().map_err(|e| ApiError::network(format!("failed to build headers: {:?}", e)))?;
    let _ = headers.set("Accept", "application/json");
    if let Some(token) = session::token() {
        let _ = headers.set("Authorization", &format!("Bearer {}", token));
    }
    if let Some(body) = body {
        let (content_type, payload) = match body {
            Body::Json(payload) => ("application/json", payload),
            Body::Form(payload) => ("application/x-www-form-urlencoded", payload),
        };
        let _ = headers.set("Content-Type", content_type);
        opts.set_body(&JsValue::from_str(&payload));
    }
    opts.set_headers(headers.as_ref());

    let url = format!("{}{}", BASE_URL, path);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::network(format!("failed to build request: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| ApiError::network("no window object"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::network(format!("request failed: {:?}", e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::network("fetch returned a non-Response value"))?;

    if response.status() == 401 {
        // Token expired or revoked. Drop it and restart at the login view.
        session::clear_token();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
        return Err(ApiError {
            status: Some(401),
            detail: "Session expired, please log in again".to_string(),
        });
    }
    if !response.ok() {
        return Err(error_from_response(&response).await);
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response
        .json()
        .map_err(|e| ApiError::network(format!("failed to read response body: {:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::network(format!("failed to read response body: {:?}", e)))?;
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ApiError::network(format!("failed to decode response: {}", e)))
}

async fn error_from_response(response: &Response) -> ApiError {
    let status = response.status();
    let fallback = format!("Request failed with status {}", status);
    let detail = match response.text() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(value) => value
                .as_string()
                .and_then(|raw| extract_detail(&raw))
                .unwrap_or(fallback),
            Err(_) => fallback,
        },
        Err(_) => fallback,
    };
    ApiError {
        status: Some(status),
        detail,
    }
}

/// FastAPI error payloads look like `{"detail": "..."}`.
fn extract_detail(raw: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()?
        .get("detail")?
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_server_detail_from_json_body() {
        let raw = r#"{"detail": "You are not a member of this project"}"#;
        assert_eq!(
            extract_detail(raw).as_deref(),
            Some("You are not a member of this project")
        );
    }

    #[test]
    fn non_json_and_detail_free_bodies_yield_none() {
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(r#"{"error": "nope"}"#), None);
    }

    #[test]
    fn api_error_display_includes_status_when_known() {
        let err = ApiError {
            status: Some(403),
            detail: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "Forbidden (status 403)");
        assert_eq!(ApiError::network("offline").to_string(), "offline");
    }
}
