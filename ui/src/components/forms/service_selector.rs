//! Service category selector
//!
//! The first screen of the booking flow: exactly three fixed cards, one per
//! service. Nothing persists here; leaving the page and coming back always
//! starts from this screen.

use dioxus::prelude::*;

use crate::features::booking::ServiceKind;

fn icon_for(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Rental => "🚗",
        ServiceKind::Goods => "📦",
        ServiceKind::Waste => "🗑",
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ServiceSelectorProps {
    pub on_select: EventHandler<ServiceKind>,
}

#[component]
pub fn ServiceSelector(props: ServiceSelectorProps) -> Element {
    let on_select = props.on_select;
    rsx! {
        div {
            class: "service-selector",
            div {
                class: "selector-header",
                h3 { class: "selector-title", "Form Pemesanan" }
                p {
                    class: "selector-subtitle",
                    "Silakan memilih jenis layanan yang Anda butuhkan"
                }
            }
            div {
                class: "service-grid",
                for kind in ServiceKind::ALL {
                    button {
                        r#type: "button",
                        class: "service-card",
                        onclick: move |_| on_select.call(kind),
                        span { class: "service-icon", {icon_for(kind)} }
                        span { class: "service-title", "{kind.title()}" }
                        p { class: "service-desc", "{kind.description()}" }
                    }
                }
            }
        }
    }
}
