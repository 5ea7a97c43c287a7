//! Booking flow state
//!
//! The central `BookingState`/`BookingAction` reducer, the per-service
//! drafts with their wire-field builders, and the completeness checks the
//! forms gate on.

pub mod form_validation;
pub mod types;

pub use types::{
    BookingAction, BookingState, GoodsDraft, RentalDraft, ServiceKind, WasteCategory, WasteDraft,
};
