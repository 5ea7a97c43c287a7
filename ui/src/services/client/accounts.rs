//! Account endpoints: registration and login
//!
//! Both are plain JSON calls sharing the order client's status mapping:
//! 422 carries a per-field error map, anything else non-2xx is generic.

use anyhow::Result;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;
use tracing::{info, instrument};

use super::errors::ApiError;
use super::types::{MessageBody, ValidationBody};
use super::{api_base, http_client};
use crate::services::auth::UserSummary;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterRequest {
    pub nama: String,
    pub email: String,
    pub no_telepon: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Successful login hands back the bearer token plus the user summary the
/// navbar renders.
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub token: String,
    pub user: UserSummary,
}

#[instrument(skip(request), err)]
pub async fn register(request: &RegisterRequest) -> Result<String, ApiError> {
    let response = http_client()
        .post(format!("{}/api/register", api_base()))
        .json(request)
        .send()
        .await
        .map_err(ApiError::network)?;

    let status = response.status();
    match status {
        s if s.is_success() => {
            let body: MessageBody = response.json().await.map_err(ApiError::network)?;
            info!("registration accepted for {}", request.email);
            Ok(body.message)
        }
        StatusCode::UNPROCESSABLE_ENTITY => {
            let body: ValidationBody = response.json().await.map_err(ApiError::network)?;
            Err(ApiError::Validation {
                errors: body.errors,
            })
        }
        other => {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status: other.as_u16(),
                message,
            })
        }
    }
}

#[instrument(skip(password), err)]
pub async fn login(email: &str, password: &str) -> Result<LoginSuccess, ApiError> {
    let response = http_client()
        .post(format!("{}/api/login", api_base()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .map_err(ApiError::network)?;

    let status = response.status();
    match status {
        s if s.is_success() => {
            let body: serde_json::Value = response.json().await.map_err(ApiError::network)?;
            let token = body["token"].as_str().unwrap_or_default().to_string();
            if token.is_empty() {
                return Err(ApiError::Server {
                    status: status.as_u16(),
                    message: "login succeeded but no token was provided".to_string(),
                });
            }
            let user: UserSummary =
                serde_json::from_value(body["user"].clone()).map_err(|e| ApiError::Server {
                    status: status.as_u16(),
                    message: format!("malformed user payload: {e}"),
                })?;
            info!("login accepted for {}", user.nama);
            Ok(LoginSuccess { token, user })
        }
        StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => Err(ApiError::Unauthorized),
        other => {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status: other.as_u16(),
                message,
            })
        }
    }
}
