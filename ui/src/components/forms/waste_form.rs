//! Waste haulage order form

use dioxus::prelude::*;

use crate::app::routes;
use crate::components::forms::{FormAlert, OrderFormHeader};
use crate::components::inputs::{field_input_class, FieldErrorText, InputType, TextInput};
use crate::components::photo_upload::PhotoUpload;
use crate::console_error;
use crate::features::booking::form_validation::{missing_photo_message, validate_waste_complete};
use crate::features::booking::{BookingAction, BookingState, ServiceKind, WasteCategory};
use crate::services::client::{submit_order, ApiError};
use crate::utils::{browser, dates};

#[derive(Props, PartialEq, Clone)]
pub struct WasteFormProps {
    pub state: Signal<BookingState>,
    pub dispatch: EventHandler<BookingAction>,
    pub on_back: EventHandler<()>,
    pub on_success: EventHandler<u64>,
}

#[component]
pub fn WasteForm(props: WasteFormProps) -> Element {
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
        let Some(photo) = current.waste.foto_sampah.clone() else {
            dispatch.call(BookingAction::SetFormAlert(Some(missing_photo_message(
                "foto_sampah",
            ))));
            return;
        };
        dispatch.call(BookingAction::SetFormAlert(None));
        dispatch.call(BookingAction::ClearFieldErrors);
        dispatch.call(BookingAction::SetSubmitting(true));

        let fields = current.waste.submission_fields();
        spawn(async move {
            match submit_order(fields, Some(("foto_sampah", photo))).await {
                Ok(created) => on_success.call(created.id_pemesanan),
                Err(ApiError::Validation { errors }) => {
                    dispatch.call(BookingAction::SetFieldErrors(errors));
                }
                Err(ApiError::Unauthorized) => {
                    browser::alert("Anda harus login terlebih dahulu!");
                    browser::hard_redirect(routes::LOGIN);
                }
                Err(err) => {
                    console_error!("waste order submission failed: {}", err);
                    dispatch.call(BookingAction::SetFormAlert(Some(
                        "Terjadi kesalahan pada server. Silakan coba lagi.".to_string(),
                    )));
                }
            }
            dispatch.call(BookingAction::SetSubmitting(false));
        });
    };

    let selected_category = state()
        .waste
        .jenis_sampah
        .map(|c| c.as_str())
        .unwrap_or("");

    rsx! {
        div {
            class: "order-form waste-form",
            OrderFormHeader {
                title: ServiceKind::Waste.title().to_string(),
                subtitle: "Isi detail pengangkutan sampah Anda",
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
                        label { class: "field-label", "Jenis Sampah *" }
                        select {
                            class: field_input_class(has_error("jenis_sampah")),
                            required: true,
                            value: "{selected_category}",
                            onchange: move |event| dispatch.call(BookingAction::SetWasteCategory(event.value())),
                            option { value: "", disabled: true, "Pilih jenis sampah" }
                            for category in WasteCategory::ALL {
                                option {
                                    value: category.as_str(),
                                    selected: Some(category) == state().waste.jenis_sampah,
                                    "{category.as_str()}"
                                }
                            }
                        }
                        FieldErrorText { message: error_for("jenis_sampah") }
                    }
                    div {
                        class: "field-group",
                        label { class: "field-label", "Estimasi Volume (m³) *" }
                        TextInput {
                            value: state().waste.volume_sampah.clone(),
                            placeholder: "Misal: 1.5",
                            input_type: InputType::Number,
                            input_class: field_input_class(has_error("volume_sampah")).to_string(),
                            required: true,
                            min: "0.1".to_string(),
                            max: "100".to_string(),
                            step: "0.1".to_string(),
                            on_change: move |value| dispatch.call(BookingAction::SetWasteVolume(value)),
                        }
                        FieldErrorText { message: error_for("volume_sampah") }
                    }
                }

                div {
                    class: "field-group",
                    label { class: "field-label", "Foto Sampah *" }
                    PhotoUpload {
                        photo: state().waste.foto_sampah.clone(),
                        disabled: state().is_submitting,
                        on_select: move |photo| dispatch.call(BookingAction::SetWastePhoto(Some(photo))),
                        on_clear: move |_| dispatch.call(BookingAction::SetWastePhoto(None)),
                        on_error: move |message| dispatch.call(BookingAction::SetFormAlert(Some(message))),
                    }
                    FieldErrorText { message: error_for("foto_sampah") }
                }

                div {
                    class: "field-group",
                    label { class: "field-label", "Lokasi Pengambilan *" }
                    TextInput {
                        value: state().waste.lokasi_jemput.clone(),
                        placeholder: "Alamat lengkap lokasi sampah",
                        input_type: InputType::Text,
                        input_class: field_input_class(has_error("lokasi_jemput")).to_string(),
                        required: true,
                        on_change: move |value| dispatch.call(BookingAction::SetWastePickup(value)),
                    }
                    FieldErrorText { message: error_for("lokasi_jemput") }
                }

                div {
                    class: "field-group",
                    label { class: "field-label", "Tanggal Pengambilan *" }
                    TextInput {
                        value: state().waste.tgl_mulai.clone(),
                        input_type: InputType::Date,
                        input_class: field_input_class(has_error("tgl_mulai")).to_string(),
                        required: true,
                        min: min_date,
                        on_change: move |value| dispatch.call(BookingAction::SetWasteStartDate(value)),
                    }
                    FieldErrorText { message: error_for("tgl_mulai") }
                }

                button {
                    r#type: "submit",
                    class: "submit-button",
                    disabled: state().is_submitting || !validate_waste_complete(&state().waste),
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
