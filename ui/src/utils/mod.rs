//! Utility functions and cross-cutting concerns
//!
//! - **browser**: window-level helpers (alert, redirect, origin, scroll)
//! - **console_macros**: WASM-compatible logging macros for console output
//! - **dates**: date-input constraint helpers
//! - **files**: photo validation and preview generation
//! - **password**: the five-rule strength evaluator
//! - **timer**: cancellable delayed actions

pub mod browser;
pub mod console_macros;
pub mod dates;
pub mod files;
pub mod password;
pub mod timer;

pub use files::{SelectedPhoto, MAX_PHOTO_BYTES};
pub use timer::DelayedAction;
