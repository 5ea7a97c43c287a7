//! Order creation client
//!
//! Packages a service draft into a multipart request against
//! `POST /api/pemesanan` and maps the response onto the error taxonomy.
//! The bearer token is read from persisted storage at submission time; if it
//! is missing the request still goes out and the server's 401 drives the
//! re-login flow.

use anyhow::Result;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{info, instrument, warn};

use super::errors::ApiError;
use super::types::{OrderCreated, OrderCreatedBody, ValidationBody};
use super::{api_base, http_client};
use crate::services::auth::storage;
use crate::utils::SelectedPhoto;

/// Multipart field list for one submission attempt. Built by the pure
/// `submission_fields` methods on the drafts, so it is testable without a
/// browser.
pub type OrderFields = Vec<(&'static str, String)>;

#[instrument(skip(fields, photo), err)]
pub async fn submit_order(
    fields: OrderFields,
    photo: Option<(&'static str, SelectedPhoto)>,
) -> Result<OrderCreated, ApiError> {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    if let Some((field, photo)) = photo {
        let part = Part::bytes(photo.bytes)
            .file_name(photo.name)
            .mime_str(photo.mime)
            .map_err(ApiError::network)?;
        form = form.part(field, part);
    }

    let mut request = http_client()
        .post(format!("{}/api/pemesanan", api_base()))
        .multipart(form);
    match storage::auth_token() {
        Some(token) => request = request.bearer_auth(token),
        None => warn!("submitting order without a stored bearer token"),
    }

    let response = request.send().await.map_err(ApiError::network)?;
    let status = response.status();
    match status {
        StatusCode::OK | StatusCode::CREATED => {
            let body: OrderCreatedBody = response.json().await.map_err(ApiError::network)?;
            info!("order created: id_pemesanan={}", body.data.id_pemesanan);
            Ok(body.data)
        }
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
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
