//! Shared UI components for the transport booking frontend.

pub mod app;
pub use app::BookingPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
