//! Car rental order form

use dioxus::prelude::*;

use crate::app::routes;
use crate::components::forms::{FormAlert, OrderFormHeader};
use crate::components::inputs::{field_input_class, FieldErrorText, InputType, TextInput};
use crate::console_error;
use crate::features::booking::form_validation::validate_rental_complete;
use crate::features::booking::{BookingAction, BookingState, ServiceKind};
use crate::services::client::{submit_order, ApiError};
use crate::utils::{browser, dates};

#[derive(Props, PartialEq, Clone)]
pub struct RentalFormProps {
    pub state: Signal<BookingState>,
    pub dispatch: EventHandler<BookingAction>,
    pub on_back: EventHandler<()>,
    pub on_success: EventHandler<u64>,
}

#[component]
pub fn RentalForm(props: RentalFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_success = props.on_success;

    let min_date = dates::today_iso();
    let error_for = move |field: &str| state.read().errors.first(field).map(str::to_string);
    let has_error = move |field: &str| state.read().errors.contains(field);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = state();
        if current.is_submitting {
            return;
        }
        dispatch.call(BookingAction::SetFormAlert(None));
        dispatch.call(BookingAction::ClearFieldErrors);
        dispatch.call(BookingAction::SetSubmitting(true));

        let fields = current.rental.submission_fields();
        spawn(async move {
            match submit_order(fields, None).await {
                Ok(created) => on_success.call(created.id_pemesanan),
                Err(ApiError::Validation { errors }) => {
                    dispatch.call(BookingAction::SetFieldErrors(errors));
                }
                Err(ApiError::Unauthorized) => {
                    browser::alert("Anda harus login terlebih dahulu!");
                    browser::hard_redirect(routes::LOGIN);
                }
                Err(err) => {
                    console_error!("rental order submission failed: {}", err);
                    dispatch.call(BookingAction::SetFormAlert(Some(
                        "Terjadi kesalahan pada server. Silakan coba lagi.".to_string(),
                    )));
                }
            }
            dispatch.call(BookingAction::SetSubmitting(false));
        });
    };

    rsx! {
        div {
            class: "order-form rental-form",
            OrderFormHeader {
                title: ServiceKind::Rental.title().to_string(),
                subtitle: "Isi detail perjalanan Anda",
                on_back: props.on_back,
            }
            FormAlert { message: state().form_alert.clone() }

            form {
                class: "order-form-body",
                onsubmit: handle_submit,

                div {
                    class: "field-row",
                    div {
                        class: "field-group",
                        label { class: "field-label", "Jumlah Penumpang *" }
                        TextInput {
                            value: state().rental.jumlah_orang.clone(),
                            input_type: InputType::Number,
                            input_class: field_input_class(has_error("jumlah_orang")).to_string(),
                            required: true,
                            min: "1".to_string(),
                            max: "20".to_string(),
                            step: "1".to_string(),
                            on_change: move |value| dispatch.call(BookingAction::SetPassengerCount(value)),
                        }
                        FieldErrorText { message: error_for("jumlah_orang") }
                    }
                    div {
                        class: "field-group",
                        label { class: "field-label", "Lama Rental (Hari) *" }
                        TextInput {
                            value: state().rental.lama_rental.clone(),
                            input_type: InputType::Number,
                            input_class: field_input_class(has_error("lama_rental")).to_string(),
                            required: true,
                            min: "1".to_string(),
                            step: "1".to_string(),
                            on_change: move |value| dispatch.call(BookingAction::SetRentalDays(value)),
                        }
                        FieldErrorText { message: error_for("lama_rental") }
                    }
                }

                div {
                    class: "field-group",
                    label { class: "field-label", "Tanggal Mulai *" }
                    TextInput {
                        value: state().rental.tgl_mulai.clone(),
                        input_type: InputType::Date,
                        input_class: field_input_class(has_error("tgl_mulai")).to_string(),
                        required: true,
                        min: min_date,
                        on_change: move |value| dispatch.call(BookingAction::SetRentalStartDate(value)),
                    }
                    FieldErrorText { message: error_for("tgl_mulai") }
                }

                div {
                    class: "field-group",
                    label { class: "field-label", "Lokasi Penjemputan *" }
                    TextInput {
                        value: state().rental.lokasi_jemput.clone(),
                        placeholder: "Alamat lengkap penjemputan",
                        input_type: InputType::Text,
                        input_class: field_input_class(has_error("lokasi_jemput")).to_string(),
                        required: true,
                        on_change: move |value| dispatch.call(BookingAction::SetRentalPickup(value)),
                    }
                    FieldErrorText { message: error_for("lokasi_jemput") }
                }

                button {
                    r#type: "submit",
                    class: "submit-button",
                    disabled: state().is_submitting || !validate_rental_complete(&state().rental),
                    if state().is_submitting {
                        "Memproses..."
                    } else {
                        "Buat Pesanan & Tunggu Konfirmasi"
                    }
                }
            }
        }
    }
}
