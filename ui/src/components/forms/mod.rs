//! Form components: the service selector, the three order forms, and the
//! account forms.

pub mod goods_form;
pub mod login_form;
pub mod register_form;
pub mod rental_form;
pub mod service_selector;
pub mod waste_form;

pub use goods_form::GoodsForm;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use rental_form::RentalForm;
pub use service_selector::ServiceSelector;
pub use waste_form::WasteForm;

use dioxus::prelude::*;

/// Header shared by the three order forms, with the back-to-selector button.
#[derive(Props, PartialEq, Clone)]
pub struct OrderFormHeaderProps {
    pub title: String,
    pub subtitle: String,
    pub on_back: EventHandler<()>,
}

#[component]
pub fn OrderFormHeader(props: OrderFormHeaderProps) -> Element {
    rsx! {
        div {
            class: "order-form-header",
            button {
                r#type: "button",
                class: "back-button",
                onclick: move |_| props.on_back.call(()),
                "← Ubah Layanan"
            }
            h3 { class: "order-form-title", "{props.title}" }
            p { class: "order-form-subtitle", "{props.subtitle}" }
        }
    }
}

/// Inline error banner above a form body. Photo validation failures and
/// server errors both land here.
#[derive(Props, PartialEq, Clone)]
pub struct FormAlertProps {
    #[props(!optional)]
    pub message: Option<String>,
}

#[component]
pub fn FormAlert(props: FormAlertProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div { class: "form-banner form-banner-error", "{message}" }
        },
        None => rsx! {},
    }
}
