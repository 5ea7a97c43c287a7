//! Photo attachment picker
//!
//! Drag-and-drop or click-to-browse. Validation happens before the photo
//! ever reaches the draft: non-images and files over the 5 MB cap are
//! reported through `on_error` and nothing is stored. A new selection
//! replaces the previous preview; removing clears file and preview both.

use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

use crate::utils::SelectedPhoto;

#[derive(Props, PartialEq, Clone)]
pub struct PhotoUploadProps {
    #[props(!optional)]
    pub photo: Option<SelectedPhoto>,
    #[props(default = false)]
    pub disabled: bool,
    pub on_select: EventHandler<SelectedPhoto>,
    pub on_clear: EventHandler<()>,
    pub on_error: EventHandler<String>,
}

#[component]
pub fn PhotoUpload(props: PhotoUploadProps) -> Element {
    let mut is_dragging = use_signal(|| false);
    let on_select = props.on_select;
    let on_clear = props.on_clear;
    let on_error = props.on_error;

    let handle_files = move |engine: Arc<dyn FileEngine>| {
        spawn(async move {
            let Some(name) = engine.files().into_iter().next() else {
                return;
            };
            let Some(bytes) = engine.read_file(&name).await else {
                on_error.call("Gagal membaca file yang dipilih.".to_string());
                return;
            };
            match SelectedPhoto::new(name, bytes) {
                Ok(photo) => on_select.call(photo),
                Err(e) => on_error.call(e.to_string()),
            }
        });
    };

    match props.photo.clone() {
        Some(photo) => rsx! {
            div {
                class: "photo-preview",
                img {
                    class: "preview-image",
                    src: "{photo.preview}",
                    alt: "Preview",
                }
                button {
                    r#type: "button",
                    class: "preview-remove",
                    disabled: props.disabled,
                    onclick: move |_| on_clear.call(()),
                    "✕ Hapus"
                }
                div {
                    class: "preview-meta",
                    span { class: "preview-name", "✓ {photo.name}" }
                    span { class: "preview-size", {format!("{:.2} MB", photo.size_mb())} }
                }
            }
        },
        None => rsx! {
            label {
                class: if is_dragging() { "photo-dropzone dragging" } else { "photo-dropzone" },
                ondragover: move |evt| {
                    evt.prevent_default();
                    is_dragging.set(true);
                },
                ondragleave: move |evt| {
                    evt.prevent_default();
                    is_dragging.set(false);
                },
                ondrop: move |evt| {
                    evt.prevent_default();
                    is_dragging.set(false);
                    if let Some(engine) = evt.files() {
                        handle_files(engine);
                    }
                },
                div { class: "dropzone-icon", "⬆" }
                p {
                    class: "dropzone-hint",
                    if is_dragging() {
                        "Lepaskan file di sini"
                    } else {
                        "Klik atau drag & drop foto"
                    }
                }
                p { class: "dropzone-sub", "JPG, PNG, JPEG (Maks. 5MB)" }
                input {
                    r#type: "file",
                    class: "dropzone-input",
                    accept: "image/jpeg,image/png,image/jpg",
                    disabled: props.disabled,
                    onchange: move |evt| {
                        if let Some(engine) = evt.files() {
                            handle_files(engine);
                        }
                    }
                }
            }
        },
    }
}
