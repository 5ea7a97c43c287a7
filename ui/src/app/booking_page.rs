//! Booking page: service selection and the order forms
//!
//! One `BookingState` signal drives the whole flow; the forms dispatch
//! actions back through a single reducer. The profile flow can leave a
//! pending order id in storage; when one is found here it is consumed and
//! the page redirects straight to that order's status view.

use dioxus::prelude::*;

use crate::app::routes;
use crate::components::forms::{GoodsForm, RentalForm, ServiceSelector, WasteForm};
use crate::console_info;
use crate::features::booking::{BookingAction, BookingState, ServiceKind};
use crate::services::auth::storage;

#[component]
pub fn BookingPage() -> Element {
    let mut state = use_signal(BookingState::default);
    let dispatch = EventHandler::new(move |action: BookingAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    use_effect(move || {
        if let Some(id) = storage::take_pending_order() {
            console_info!("resuming pending order {}", id);
            navigator().replace(routes::order_status(id));
        }
    });

    let on_back = move |_| dispatch.call(BookingAction::ResetService);
    let on_success = move |id: u64| {
        navigator().push(routes::order_status(id));
    };

    rsx! {
        main {
            class: "booking-page",
            match state().service {
                None => rsx! {
                    ServiceSelector {
                        on_select: move |kind| dispatch.call(BookingAction::SelectService(kind)),
                    }
                },
                Some(ServiceKind::Rental) => rsx! {
                    RentalForm { state, dispatch, on_back, on_success }
                },
                Some(ServiceKind::Goods) => rsx! {
                    GoodsForm { state, dispatch, on_back, on_success }
                },
                Some(ServiceKind::Waste) => rsx! {
                    WasteForm { state, dispatch, on_back, on_success }
                },
            }
        }
    }
}
