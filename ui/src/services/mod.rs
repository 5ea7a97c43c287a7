//! Infrastructure services
//!
//! - **auth**: session state, the auth context, and credential storage
//! - **client**: HTTP client for order creation and account endpoints
//!
//! Both are WASM-first: browser storage, fetch-backed reqwest, and no
//! Send/Sync bounds.

pub mod auth;
pub mod client;
