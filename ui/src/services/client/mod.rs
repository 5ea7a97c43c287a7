//! HTTP client for the booking backend
//!
//! The backend is same-origin, so the base URL is resolved from the page's
//! location. All calls go through one `reqwest::Client`; there is no retry,
//! timeout, or cancellation layer - recovery is user-initiated.

pub mod accounts;
pub mod errors;
pub mod orders;
pub mod types;

pub use accounts::{login, register, LoginSuccess, RegisterRequest};
pub use errors::ApiError;
pub use orders::{submit_order, OrderFields};
pub use types::{FieldErrors, OrderCreated};

use crate::utils::browser;

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

pub(crate) fn api_base() -> String {
    browser::origin()
}
