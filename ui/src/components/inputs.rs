//! Input components for form fields and inline errors

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Tel,
    Number,
    Date,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
            InputType::Date => "date",
        }
    }
}

/// Input class shared by the forms; fields with a server error pick up the
/// invalid styling.
pub fn field_input_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextInputProps {
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default)]
    pub input_class: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub required: bool,
    /// Platform constraints for number and date inputs.
    #[props(default)]
    pub min: Option<String>,
    #[props(default)]
    pub max: Option<String>,
    #[props(default)]
    pub step: Option<String>,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            required: props.required,
            min: props.min,
            max: props.max,
            step: props.step,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorTextProps {
    #[props(!optional)]
    pub message: Option<String>,
}

/// First server-side message for a field, rendered under its input.
#[component]
pub fn FieldErrorText(props: FieldErrorTextProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            p {
                class: "field-error",
                "✗ {message}"
            }
        },
        None => rsx! {},
    }
}
