//! Persisted client storage
//!
//! Credentials live in localStorage so a reload keeps the session. Two more
//! keys are consumable hand-offs: the one-time logout notice read by the
//! landing page, and the pending order id the profile flow leaves for the
//! booking page to redirect on.

use gloo_storage::{LocalStorage, Storage};
use tracing::{info, warn};

use super::UserSummary;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const AUTH_USER_KEY: &str = "auth_user";
pub const AUTH_ALERT_KEY: &str = "auth_alert";
pub const PENDING_ORDER_KEY: &str = "pending_order_id";

/// Bearer token, read synchronously at submission time.
pub fn auth_token() -> Option<String> {
    LocalStorage::get::<String>(AUTH_TOKEN_KEY).ok()
}

/// Restore the persisted user record, if any. A token without a readable
/// user record counts as signed out.
pub fn load_user() -> Option<UserSummary> {
    let json = LocalStorage::get::<String>(AUTH_USER_KEY).ok()?;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("discarding unreadable stored user record: {}", e);
            None
        }
    }
}

pub fn store_credentials(token: &str, user: &UserSummary) {
    if LocalStorage::set(AUTH_TOKEN_KEY, token).is_err() {
        warn!("failed to persist auth token");
    }
    match serde_json::to_string(user) {
        Ok(json) => {
            if LocalStorage::set(AUTH_USER_KEY, json).is_err() {
                warn!("failed to persist user record");
            }
        }
        Err(e) => warn!("failed to serialize user record: {}", e),
    }
    info!("credentials stored for {}", user.nama);
}

pub fn clear_credentials() {
    LocalStorage::delete(AUTH_TOKEN_KEY);
    LocalStorage::delete(AUTH_USER_KEY);
}

/// Leave the one-time notice the landing page surfaces after logout.
pub fn set_auth_alert(message: &str) {
    if LocalStorage::set(AUTH_ALERT_KEY, message).is_err() {
        warn!("failed to store logout notice");
    }
}

/// Read and consume the one-time notice.
pub fn take_auth_alert() -> Option<String> {
    let message = LocalStorage::get::<String>(AUTH_ALERT_KEY).ok()?;
    LocalStorage::delete(AUTH_ALERT_KEY);
    Some(message)
}

/// Read and consume the order id left behind by the payment/status flow.
pub fn take_pending_order() -> Option<u64> {
    let id = LocalStorage::get::<u64>(PENDING_ORDER_KEY).ok()?;
    LocalStorage::delete(PENDING_ORDER_KEY);
    Some(id)
}
