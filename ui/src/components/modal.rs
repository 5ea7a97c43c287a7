//! Blocking modal dialog

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    pub title: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
}

/// Overlay dialog with a title bar and close control. Clicking the overlay
/// behaves like the close button.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-dialog",
                // Keep clicks inside the dialog from closing it.
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { class: "modal-title", "{props.title}" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                {props.children}
            }
        }
    }
}
