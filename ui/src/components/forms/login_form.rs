//! Login form

use dioxus::prelude::*;

use crate::app::routes;
use crate::components::inputs::{field_input_class, InputType, TextInput};
use crate::console_error;
use crate::services::auth::use_auth;
use crate::services::client::{login, ApiError};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    /// Path to return to after a successful login, from the `from` query
    /// parameter. Empty means the landing page.
    #[props(default)]
    pub from: String,
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error_message = use_signal(|| Option::<String>::None);
    let mut is_loading = use_signal(|| false);

    let return_to = props.from.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_loading() {
            return;
        }
        error_message.set(None);
        is_loading.set(true);

        let return_to = return_to.clone();
        spawn(async move {
            match login(&email(), &password()).await {
                Ok(success) => {
                    auth.login(&success.token, success.user);
                    let destination = if return_to.is_empty() {
                        routes::BERANDA.to_string()
                    } else {
                        return_to
                    };
                    navigator().push(destination);
                }
                Err(ApiError::Unauthorized) => {
                    error_message.set(Some("Email atau password salah.".to_string()));
                    is_loading.set(false);
                }
                Err(err) => {
                    console_error!("login failed: {}", err);
                    error_message.set(Some(
                        "Terjadi kesalahan pada sistem. Silakan coba lagi.".to_string(),
                    ));
                    is_loading.set(false);
                }
            }
        });
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: handle_submit,

            if let Some(message) = error_message() {
                div { class: "form-banner form-banner-error", "{message}" }
            }

            div {
                class: "field-group",
                label { class: "field-label", "Email" }
                TextInput {
                    value: email(),
                    placeholder: "nama@email.com",
                    input_type: InputType::Email,
                    input_class: field_input_class(false).to_string(),
                    required: true,
                    on_change: move |value| email.set(value),
                }
            }

            div {
                class: "field-group",
                label { class: "field-label", "Password" }
                div {
                    class: "password-field",
                    TextInput {
                        value: password(),
                        placeholder: "Password Anda",
                        input_type: if show_password() { InputType::Text } else { InputType::Password },
                        input_class: field_input_class(false).to_string(),
                        required: true,
                        on_change: move |value| password.set(value),
                    }
                    button {
                        r#type: "button",
                        class: "password-toggle",
                        onclick: move |_| show_password.toggle(),
                        if show_password() { "Sembunyikan" } else { "Tampilkan" }
                    }
                }
            }

            button {
                r#type: "submit",
                class: "submit-button",
                disabled: is_loading(),
                if is_loading() { "Masuk..." } else { "Login" }
            }

            p {
                class: "form-footnote",
                "Belum punya akun? "
                Link { to: routes::REGISTER, "Daftar di sini" }
            }
        }
    }
}
