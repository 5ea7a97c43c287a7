//! Registration form with the password-strength gate
//!
//! Two client-side checks run before anything is sent: the password has to
//! satisfy every strength criterion and the confirmation has to match.
//! Server-side 422 messages land under their fields like the order forms.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::app::routes;
use crate::components::inputs::{field_input_class, FieldErrorText, InputType, TextInput};
use crate::components::password_strength::PasswordStrengthIndicator;
use crate::console_error;
use crate::services::client::{register, ApiError, FieldErrors, RegisterRequest};
use crate::utils::password;

const REDIRECT_DELAY_MS: u32 = 1_500;

#[derive(Clone, Copy, PartialEq)]
enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "form-banner form-banner-success",
            AlertKind::Error => "form-banner form-banner-error",
        }
    }
}

#[component]
pub fn RegisterForm() -> Element {
    let mut draft = use_signal(RegisterRequest::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut alert = use_signal(|| Option::<(AlertKind, String)>::None);
    let mut is_loading = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);

    let error_for = move |field: &str| errors.read().first(field).map(str::to_string);
    let has_error = move |field: &str| errors.read().contains(field);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_loading() {
            return;
        }
        let request = draft();
        if !password::is_strong(&request.password) {
            alert.set(Some((
                AlertKind::Error,
                "Password tidak memenuhi kriteria keamanan. Pastikan password memiliki huruf besar, huruf kecil, angka, dan karakter khusus!".to_string(),
            )));
            return;
        }
        if request.password != request.password_confirmation {
            alert.set(Some((
                AlertKind::Error,
                "Password dan konfirmasi password tidak cocok!".to_string(),
            )));
            return;
        }
        alert.set(None);
        errors.set(FieldErrors::default());
        is_loading.set(true);

        spawn(async move {
            match register(&request).await {
                Ok(message) => {
                    let message = if message.is_empty() {
                        "Registrasi berhasil!".to_string()
                    } else {
                        message
                    };
                    alert.set(Some((AlertKind::Success, message)));
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigator().push(routes::LOGIN);
                }
                Err(ApiError::Validation { errors: server_errors }) => {
                    errors.set(server_errors);
                    is_loading.set(false);
                }
                Err(err) => {
                    console_error!("registration failed: {}", err);
                    alert.set(Some((
                        AlertKind::Error,
                        "Terjadi kesalahan pada sistem. Silakan coba lagi.".to_string(),
                    )));
                    is_loading.set(false);
                }
            }
        });
    };

    rsx! {
        form {
            class: "register-form",
            onsubmit: handle_submit,

            if let Some((kind, message)) = alert() {
                div { class: kind.class(), "{message}" }
            }

            div {
                class: "field-group",
                label { class: "field-label", "Nama Lengkap" }
                TextInput {
                    value: draft().nama.clone(),
                    placeholder: "Nama lengkap Anda",
                    input_type: InputType::Text,
                    input_class: field_input_class(has_error("nama")).to_string(),
                    required: true,
                    on_change: move |value| {
                        draft.with_mut(|d| d.nama = value);
                        errors.with_mut(|e| e.clear("nama"));
                    },
                }
                FieldErrorText { message: error_for("nama") }
            }

            div {
                class: "field-group",
                label { class: "field-label", "Email" }
                TextInput {
                    value: draft().email.clone(),
                    placeholder: "nama@email.com",
                    input_type: InputType::Email,
                    input_class: field_input_class(has_error("email")).to_string(),
                    required: true,
                    on_change: move |value| {
                        draft.with_mut(|d| d.email = value);
                        errors.with_mut(|e| e.clear("email"));
                    },
                }
                FieldErrorText { message: error_for("email") }
            }

            div {
                class: "field-group",
                label { class: "field-label", "Nomor Telepon" }
                TextInput {
                    value: draft().no_telepon.clone(),
                    placeholder: "08xxxxxxxxxx",
                    input_type: InputType::Tel,
                    input_class: field_input_class(has_error("no_telepon")).to_string(),
                    required: true,
                    on_change: move |value| {
                        draft.with_mut(|d| d.no_telepon = value);
                        errors.with_mut(|e| e.clear("no_telepon"));
                    },
                }
                FieldErrorText { message: error_for("no_telepon") }
            }

            div {
                class: "field-group",
                label { class: "field-label", "Password" }
                div {
                    class: "password-field",
                    TextInput {
                        value: draft().password.clone(),
                        placeholder: "Minimal 8 karakter",
                        input_type: if show_password() { InputType::Text } else { InputType::Password },
                        input_class: field_input_class(has_error("password")).to_string(),
                        required: true,
                        on_change: move |value| {
                            draft.with_mut(|d| d.password = value);
                            errors.with_mut(|e| e.clear("password"));
                        },
                    }
                    button {
                        r#type: "button",
                        class: "password-toggle",
                        onclick: move |_| show_password.toggle(),
                        if show_password() { "Sembunyikan" } else { "Tampilkan" }
                    }
                }
                FieldErrorText { message: error_for("password") }
                PasswordStrengthIndicator { password: draft().password.clone() }
            }

            div {
                class: "field-group",
                label { class: "field-label", "Konfirmasi Password" }
                div {
                    class: "password-field",
                    TextInput {
                        value: draft().password_confirmation.clone(),
                        placeholder: "Ulangi password",
                        input_type: if show_confirm() { InputType::Text } else { InputType::Password },
                        input_class: field_input_class(has_error("password_confirmation")).to_string(),
                        required: true,
                        on_change: move |value| {
                            draft.with_mut(|d| d.password_confirmation = value);
                            errors.with_mut(|e| e.clear("password_confirmation"));
                        },
                    }
                    button {
                        r#type: "button",
                        class: "password-toggle",
                        onclick: move |_| show_confirm.toggle(),
                        if show_confirm() { "Sembunyikan" } else { "Tampilkan" }
                    }
                }
                FieldErrorText { message: error_for("password_confirmation") }
            }

            button {
                r#type: "submit",
                class: "submit-button",
                disabled: is_loading(),
                if is_loading() { "Mendaftar..." } else { "Daftar Sekarang" }
            }

            p {
                class: "form-footnote",
                "Sudah punya akun? "
                Link { to: routes::LOGIN, "Login di sini" }
            }
        }
    }
}
