//! Goods haulage order form

use dioxus::prelude::*;

use crate::app::routes;
use crate::components::forms::{FormAlert, OrderFormHeader};
use crate::components::inputs::{field_input_class, FieldErrorText, InputType, TextInput};
use crate::components::photo_upload::PhotoUpload;
use crate::console_error;
use crate::features::booking::form_validation::{missing_photo_message, validate_goods_complete};
use crate::features::booking::{BookingAction, BookingState, ServiceKind};
use crate::services::client::{submit_order, ApiError};
use crate::utils::{browser, dates};

#[derive(Props, PartialEq, Clone)]
pub struct GoodsFormProps {
    pub state: Signal<BookingState>,
    pub dispatch: EventHandler<BookingAction>,
    pub on_back: EventHandler<()>,
    pub on_success: EventHandler<u64>,
}

#[component]
pub fn GoodsForm(props: GoodsFormProps) -> Element {
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
        // The photo checks never reach the network; a missing or invalid
        // file is an inline alert, not a field error.
        let Some(photo) = current.goods.foto_barang.clone() else {
            dispatch.call(BookingAction::SetFormAlert(Some(missing_photo_message(
                "foto_barang",
            ))));
            return;
        };
        dispatch.call(BookingAction::SetFormAlert(None));
        dispatch.call(BookingAction::ClearFieldErrors);
        dispatch.call(BookingAction::SetSubmitting(true));

        let fields = current.goods.submission_fields();
        spawn(async move {
            match submit_order(fields, Some(("foto_barang", photo))).await {
                Ok(created) => on_success.call(created.id_pemesanan),
                Err(ApiError::Validation { errors }) => {
                    dispatch.call(BookingAction::SetFieldErrors(errors));
                }
                Err(ApiError::Unauthorized) => {
                    browser::alert("Anda harus login terlebih dahulu!");
                    browser::hard_redirect(routes::LOGIN);
                }
                Err(err) => {
                    console_error!("goods order submission failed: {}", err);
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
            class: "order-form goods-form",
            OrderFormHeader {
                title: ServiceKind::Goods.title().to_string(),
                subtitle: "Isi detail pengiriman barang Anda",
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
                        label { class: "field-label", "Nama Barang *" }
                        TextInput {
                            value: state().goods.deskripsi_barang.clone(),
                            placeholder: "Misal: Sofa, Kulkas, dll",
                            input_type: InputType::Text,
                            input_class: field_input_class(has_error("deskripsi_barang")).to_string(),
                            required: true,
                            on_change: move |value| dispatch.call(BookingAction::SetGoodsDescription(value)),
                        }
                        FieldErrorText { message: error_for("deskripsi_barang") }
                    }
                    div {
                        class: "field-group",
                        label { class: "field-label", "Estimasi Berat (Ton) *" }
                        TextInput {
                            value: state().goods.est_berat_ton.clone(),
                            placeholder: "Misal: 0.5 atau 2",
                            input_type: InputType::Number,
                            input_class: field_input_class(has_error("est_berat_ton")).to_string(),
                            required: true,
                            min: "0.1".to_string(),
                            max: "50".to_string(),
                            step: "0.1".to_string(),
                            on_change: move |value| dispatch.call(BookingAction::SetGoodsWeight(value)),
                        }
                        FieldErrorText { message: error_for("est_berat_ton") }
                    }
                }

                div {
                    class: "field-group",
                    label { class: "field-label", "Foto Barang *" }
                    PhotoUpload {
                        photo: state().goods.foto_barang.clone(),
                        disabled: state().is_submitting,
                        on_select: move |photo| dispatch.call(BookingAction::SetGoodsPhoto(Some(photo))),
                        on_clear: move |_| dispatch.call(BookingAction::SetGoodsPhoto(None)),
                        on_error: move |message| dispatch.call(BookingAction::SetFormAlert(Some(message))),
                    }
                    FieldErrorText { message: error_for("foto_barang") }
                }

                div {
                    class: "field-section",
                    h4 { class: "section-title", "Lokasi Pengambilan & Tujuan" }
                    div {
                        class: "field-group",
                        TextInput {
                            value: state().goods.lokasi_jemput.clone(),
                            placeholder: "Lokasi Jemput *",
                            input_type: InputType::Text,
                            input_class: field_input_class(has_error("lokasi_jemput")).to_string(),
                            required: true,
                            on_change: move |value| dispatch.call(BookingAction::SetGoodsPickup(value)),
                        }
                        FieldErrorText { message: error_for("lokasi_jemput") }
                    }
                    div {
                        class: "field-group",
                        TextInput {
                            value: state().goods.lokasi_tujuan.clone(),
                            placeholder: "Lokasi Tujuan *",
                            input_type: InputType::Text,
                            input_class: field_input_class(has_error("lokasi_tujuan")).to_string(),
                            required: true,
                            on_change: move |value| dispatch.call(BookingAction::SetGoodsDestination(value)),
                        }
                        FieldErrorText { message: error_for("lokasi_tujuan") }
                    }
                }

                div {
                    class: "field-group",
                    label { class: "field-label", "Tanggal Pengambilan *" }
                    TextInput {
                        value: state().goods.tgl_mulai.clone(),
                        input_type: InputType::Date,
                        input_class: field_input_class(has_error("tgl_mulai")).to_string(),
                        required: true,
                        min: min_date,
                        on_change: move |value| dispatch.call(BookingAction::SetGoodsStartDate(value)),
                    }
                    FieldErrorText { message: error_for("tgl_mulai") }
                }

                button {
                    r#type: "submit",
                    class: "submit-button",
                    disabled: state().is_submitting || !validate_goods_complete(&state().goods),
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
