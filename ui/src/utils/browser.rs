//! Thin wrappers over the browser window
//!
//! Kept here so components never touch `web_sys` directly for these
//! one-liners, and so non-browser builds degrade to no-ops.

use tracing::warn;

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            warn!("alert suppressed by browser: {}", message);
        }
    }
}

/// Full-page redirect, bypassing the SPA router. Used when the session is
/// gone and client-side state must not survive.
pub fn hard_redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(path).is_err() {
            warn!("hard redirect to {} failed", path);
        }
    }
}

/// Origin of the current page, used as the API base URL.
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}

/// Path of the current page, used for active-link highlighting.
pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Current vertical scroll offset in pixels.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
