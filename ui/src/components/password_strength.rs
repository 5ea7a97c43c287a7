//! Live password strength meter
//!
//! Re-evaluates on every keystroke: a colored bar scaled to the score, the
//! band label, and the five-requirement checklist.

use dioxus::prelude::*;

use crate::utils::password;

#[derive(Props, PartialEq, Clone)]
pub struct PasswordStrengthIndicatorProps {
    pub password: String,
}

#[component]
pub fn PasswordStrengthIndicator(props: PasswordStrengthIndicatorProps) -> Element {
    let report = password::evaluate(&props.password);

    rsx! {
        div {
            class: "password-strength",
            div {
                class: "strength-bar-row",
                span { class: "strength-caption", "Kekuatan Password:" }
                span {
                    class: "strength-label {report.label.text_class()}",
                    "{report.label.as_str()}"
                }
            }
            div {
                class: "strength-bar-track",
                div {
                    class: "strength-bar-fill {report.label.bar_class()}",
                    style: "width: {report.score}%",
                }
            }
            div {
                class: "strength-requirements",
                p { class: "requirements-title", "Persyaratan Password:" }
                for (label, satisfied) in report.criteria.checklist() {
                    div {
                        class: if satisfied { "requirement met" } else { "requirement" },
                        span { class: "requirement-mark", if satisfied { "✓" } else { "✗" } }
                        span { class: "requirement-label", "{label}" }
                    }
                }
            }
        }
    }
}
