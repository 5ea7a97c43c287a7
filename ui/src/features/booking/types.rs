// Core types for the booking flow - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use crate::services::client::{FieldErrors, OrderFields};
use crate::utils::SelectedPhoto;

/// The three fixed service categories. `layanan` is the discriminator the
/// backend expects on every order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ServiceKind {
    Rental,
    Goods,
    Waste,
}

impl ServiceKind {
    pub fn layanan(&self) -> &'static str {
        match self {
            ServiceKind::Rental => "Sewa Kendaraan",
            ServiceKind::Goods => "Angkut Barang",
            ServiceKind::Waste => "Angkut Sampah",
        }
    }

    /// Title shown on the selector card.
    pub fn title(&self) -> &'static str {
        match self {
            ServiceKind::Rental => "RENTAL MOBIL",
            ServiceKind::Goods => "ANGKUT BARANG",
            ServiceKind::Waste => "ANGKUT SAMPAH",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServiceKind::Rental => "Sewa kendaraan untuk perjalanan nyaman",
            ServiceKind::Goods => "Layanan pengiriman barang terpercaya",
            ServiceKind::Waste => "Solusi pengelolaan sampah praktis",
        }
    }

    /// Multipart field name of the required photo, for the two variants
    /// that carry one.
    pub fn photo_field(&self) -> Option<&'static str> {
        match self {
            ServiceKind::Rental => None,
            ServiceKind::Goods => Some("foto_barang"),
            ServiceKind::Waste => Some("foto_sampah"),
        }
    }

    pub const ALL: [ServiceKind; 3] = [ServiceKind::Rental, ServiceKind::Goods, ServiceKind::Waste];
}

/// Fixed waste categories offered by the waste-haulage form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WasteCategory {
    PuingBangunan,
    SampahRumahTangga,
    LimbahKayuBesi,
    Lainnya,
}

impl WasteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::PuingBangunan => "Puing Bangunan",
            WasteCategory::SampahRumahTangga => "Sampah Rumah Tangga",
            WasteCategory::LimbahKayuBesi => "Limbah Kayu/Besi",
            WasteCategory::Lainnya => "Lainnya",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    pub const ALL: [WasteCategory; 4] = [
        WasteCategory::PuingBangunan,
        WasteCategory::SampahRumahTangga,
        WasteCategory::LimbahKayuBesi,
        WasteCategory::Lainnya,
    ];
}

// Draft structs mirror the input values verbatim; numeric fields stay
// strings so partially typed values round-trip through the inputs, with the
// platform min/max/step doing the range enforcement.

#[derive(Clone, PartialEq, Debug)]
pub struct RentalDraft {
    pub jumlah_orang: String,
    pub tgl_mulai: String,
    pub lama_rental: String,
    pub lokasi_jemput: String,
}

impl Default for RentalDraft {
    fn default() -> Self {
        Self {
            jumlah_orang: "1".to_string(),
            tgl_mulai: String::new(),
            lama_rental: "1".to_string(),
            lokasi_jemput: "Cengkareng, Jakarta Barat".to_string(),
        }
    }
}

impl RentalDraft {
    /// Rental has no destination input; the backend's shared validation
    /// still expects the field, so a `-` filler is sent.
    pub fn submission_fields(&self) -> OrderFields {
        vec![
            ("layanan", ServiceKind::Rental.layanan().to_string()),
            ("jumlah_orang", self.jumlah_orang.clone()),
            ("tgl_mulai", self.tgl_mulai.clone()),
            ("lama_rental", self.lama_rental.clone()),
            ("lokasi_jemput", self.lokasi_jemput.clone()),
            ("lokasi_tujuan", "-".to_string()),
        ]
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct GoodsDraft {
    pub deskripsi_barang: String,
    pub est_berat_ton: String,
    pub foto_barang: Option<SelectedPhoto>,
    pub tgl_mulai: String,
    pub lokasi_jemput: String,
    pub lokasi_tujuan: String,
}

impl GoodsDraft {
    pub fn submission_fields(&self) -> OrderFields {
        vec![
            ("layanan", ServiceKind::Goods.layanan().to_string()),
            ("deskripsi_barang", self.deskripsi_barang.clone()),
            ("est_berat_ton", self.est_berat_ton.clone()),
            ("tgl_mulai", self.tgl_mulai.clone()),
            ("lokasi_jemput", self.lokasi_jemput.clone()),
            ("lokasi_tujuan", self.lokasi_tujuan.clone()),
        ]
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct WasteDraft {
    pub jenis_sampah: Option<WasteCategory>,
    pub volume_sampah: String,
    pub foto_sampah: Option<SelectedPhoto>,
    pub tgl_mulai: String,
    pub lokasi_jemput: String,
}

impl WasteDraft {
    /// The waste variant collects a single location; it is mirrored into
    /// both pickup and destination fields on the wire.
    pub fn submission_fields(&self) -> OrderFields {
        vec![
            ("layanan", ServiceKind::Waste.layanan().to_string()),
            (
                "jenis_sampah",
                self.jenis_sampah.map(|c| c.as_str()).unwrap_or("").to_string(),
            ),
            ("volume_sampah", self.volume_sampah.clone()),
            ("tgl_mulai", self.tgl_mulai.clone()),
            ("lokasi_jemput", self.lokasi_jemput.clone()),
            ("lokasi_tujuan", self.lokasi_jemput.clone()),
        ]
    }
}

/// Actions mutating the booking state.
#[derive(Clone, Debug)]
pub enum BookingAction {
    // Flow
    SelectService(ServiceKind),
    ResetService,

    // Rental draft
    SetPassengerCount(String),
    SetRentalStartDate(String),
    SetRentalDays(String),
    SetRentalPickup(String),

    // Goods draft
    SetGoodsDescription(String),
    SetGoodsWeight(String),
    SetGoodsPhoto(Option<SelectedPhoto>),
    SetGoodsStartDate(String),
    SetGoodsPickup(String),
    SetGoodsDestination(String),

    // Waste draft
    SetWasteCategory(String),
    SetWasteVolume(String),
    SetWastePhoto(Option<SelectedPhoto>),
    SetWasteStartDate(String),
    SetWastePickup(String),

    // Submission lifecycle
    SetSubmitting(bool),
    SetFieldErrors(FieldErrors),
    ClearFieldErrors,
    SetFormAlert(Option<String>),
}

/// Consolidated state for the booking page: which variant is active, the
/// three drafts, and the submission bookkeeping shared by all variants.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct BookingState {
    pub service: Option<ServiceKind>,
    pub rental: RentalDraft,
    pub goods: GoodsDraft,
    pub waste: WasteDraft,
    pub errors: FieldErrors,
    pub is_submitting: bool,
    pub form_alert: Option<String>,
}

impl BookingState {
    /// Reduces the state in place (preserves Dioxus Signal reactivity).
    pub fn reduce_in_place(&mut self, action: BookingAction) {
        match action {
            // Flow. Selecting or leaving a variant starts from clean drafts;
            // no selection survives navigating back to the selector.
            BookingAction::SelectService(kind) => {
                *self = BookingState {
                    service: Some(kind),
                    ..BookingState::default()
                };
            }
            BookingAction::ResetService => {
                *self = BookingState::default();
            }

            // Rental draft. Editing a field retires its server error; the
            // rest of the map stays until the next attempt.
            BookingAction::SetPassengerCount(value) => {
                self.rental.jumlah_orang = value;
                self.errors.clear("jumlah_orang");
            }
            BookingAction::SetRentalStartDate(value) => {
                self.rental.tgl_mulai = value;
                self.errors.clear("tgl_mulai");
            }
            BookingAction::SetRentalDays(value) => {
                self.rental.lama_rental = value;
                self.errors.clear("lama_rental");
            }
            BookingAction::SetRentalPickup(value) => {
                self.rental.lokasi_jemput = value;
                self.errors.clear("lokasi_jemput");
            }

            // Goods draft
            BookingAction::SetGoodsDescription(value) => {
                self.goods.deskripsi_barang = value;
                self.errors.clear("deskripsi_barang");
            }
            BookingAction::SetGoodsWeight(value) => {
                self.goods.est_berat_ton = value;
                self.errors.clear("est_berat_ton");
            }
            BookingAction::SetGoodsPhoto(photo) => {
                self.goods.foto_barang = photo;
                self.errors.clear("foto_barang");
            }
            BookingAction::SetGoodsStartDate(value) => {
                self.goods.tgl_mulai = value;
                self.errors.clear("tgl_mulai");
            }
            BookingAction::SetGoodsPickup(value) => {
                self.goods.lokasi_jemput = value;
                self.errors.clear("lokasi_jemput");
            }
            BookingAction::SetGoodsDestination(value) => {
                self.goods.lokasi_tujuan = value;
                self.errors.clear("lokasi_tujuan");
            }

            // Waste draft
            BookingAction::SetWasteCategory(value) => {
                self.waste.jenis_sampah = WasteCategory::from_str(&value);
                self.errors.clear("jenis_sampah");
            }
            BookingAction::SetWasteVolume(value) => {
                self.waste.volume_sampah = value;
                self.errors.clear("volume_sampah");
            }
            BookingAction::SetWastePhoto(photo) => {
                self.waste.foto_sampah = photo;
                self.errors.clear("foto_sampah");
            }
            BookingAction::SetWasteStartDate(value) => {
                self.waste.tgl_mulai = value;
                self.errors.clear("tgl_mulai");
            }
            BookingAction::SetWastePickup(value) => {
                self.waste.lokasi_jemput = value;
                self.errors.clear("lokasi_jemput");
            }

            // Submission lifecycle. Field errors are replaced wholesale so a
            // new 422 never shows stale messages from an earlier attempt.
            BookingAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
            }
            BookingAction::SetFieldErrors(errors) => {
                self.errors = errors;
            }
            BookingAction::ClearFieldErrors => {
                self.errors = FieldErrors::default();
            }
            BookingAction::SetFormAlert(alert) => {
                self.form_alert = alert;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn errors_for(fields: &[&str]) -> FieldErrors {
        FieldErrors(
            fields
                .iter()
                .map(|f| (f.to_string(), vec![format!("{f} wajib diisi")]))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn waste_submission_mirrors_pickup_into_destination() {
        let draft = WasteDraft {
            jenis_sampah: Some(WasteCategory::PuingBangunan),
            volume_sampah: "2.5".to_string(),
            foto_sampah: None,
            tgl_mulai: "2026-09-01".to_string(),
            lokasi_jemput: "Jl. Kebon Jeruk No. 5".to_string(),
        };
        let fields = draft.submission_fields();
        let get = |name: &str| {
            fields
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("lokasi_jemput"), get("lokasi_tujuan"));
        assert_eq!(get("lokasi_tujuan"), Some("Jl. Kebon Jeruk No. 5"));
        assert_eq!(get("layanan"), Some("Angkut Sampah"));
        assert_eq!(get("jenis_sampah"), Some("Puing Bangunan"));
    }

    #[test]
    fn rental_defaults_match_the_form_prefill() {
        let draft = RentalDraft::default();
        assert_eq!(draft.jumlah_orang, "1");
        assert_eq!(draft.lama_rental, "1");
        assert_eq!(draft.lokasi_jemput, "Cengkareng, Jakarta Barat");
        let fields = draft.submission_fields();
        assert_eq!(fields[0], ("layanan", "Sewa Kendaraan".to_string()));
        assert_eq!(fields.len(), 6);
        // No destination input on this variant; the wire still carries one.
        assert!(fields.contains(&("lokasi_tujuan", "-".to_string())));
    }

    #[test]
    fn goods_submission_carries_the_discriminator_and_both_locations() {
        let draft = GoodsDraft {
            deskripsi_barang: "Sofa".to_string(),
            est_berat_ton: "0.5".to_string(),
            foto_barang: None,
            tgl_mulai: "2026-09-02".to_string(),
            lokasi_jemput: "Jakarta".to_string(),
            lokasi_tujuan: "Depok".to_string(),
        };
        let fields = draft.submission_fields();
        assert_eq!(fields[0], ("layanan", "Angkut Barang".to_string()));
        assert!(fields.contains(&("lokasi_jemput", "Jakarta".to_string())));
        assert!(fields.contains(&("lokasi_tujuan", "Depok".to_string())));
    }

    #[test]
    fn new_field_errors_replace_the_previous_map_entirely() {
        let mut state = BookingState::default();
        state.reduce_in_place(BookingAction::SetFieldErrors(errors_for(&[
            "tgl_mulai",
            "lokasi_jemput",
        ])));
        assert!(state.errors.contains("lokasi_jemput"));

        // The second attempt only fails on one field; the other must clear.
        state.reduce_in_place(BookingAction::SetFieldErrors(errors_for(&["tgl_mulai"])));
        assert!(state.errors.contains("tgl_mulai"));
        assert!(!state.errors.contains("lokasi_jemput"));
    }

    #[test]
    fn editing_a_field_retires_only_its_own_error() {
        let mut state = BookingState::default();
        state.reduce_in_place(BookingAction::SelectService(ServiceKind::Goods));
        state.reduce_in_place(BookingAction::SetFieldErrors(errors_for(&[
            "deskripsi_barang",
            "tgl_mulai",
            "foto_barang",
        ])));

        state.reduce_in_place(BookingAction::SetGoodsDescription("Kulkas".to_string()));
        assert!(!state.errors.contains("deskripsi_barang"));
        assert!(state.errors.contains("tgl_mulai"));

        // Attaching a photo counts as editing the photo field.
        let photo = SelectedPhoto::new("kulkas.jpg".to_string(), vec![1]).unwrap();
        state.reduce_in_place(BookingAction::SetGoodsPhoto(Some(photo)));
        assert!(!state.errors.contains("foto_barang"));
        assert!(state.errors.contains("tgl_mulai"));
    }

    #[test]
    fn selecting_a_service_starts_from_clean_drafts() {
        let mut state = BookingState::default();
        state.reduce_in_place(BookingAction::SelectService(ServiceKind::Goods));
        state.reduce_in_place(BookingAction::SetGoodsDescription("Kulkas".to_string()));
        state.reduce_in_place(BookingAction::SetFieldErrors(errors_for(&["tgl_mulai"])));

        state.reduce_in_place(BookingAction::SelectService(ServiceKind::Waste));
        assert_eq!(state.service, Some(ServiceKind::Waste));
        assert!(state.goods.deskripsi_barang.is_empty());
        assert!(state.errors.is_empty());

        state.reduce_in_place(BookingAction::ResetService);
        assert_eq!(state.service, None);
    }

    #[test]
    fn clearing_a_photo_removes_it_from_the_draft() {
        let mut state = BookingState::default();
        let photo = SelectedPhoto::new("sofa.png".to_string(), vec![1, 2, 3]).unwrap();
        state.reduce_in_place(BookingAction::SetGoodsPhoto(Some(photo.clone())));
        assert!(state.goods.foto_barang.is_some());

        // Selecting a new file replaces the previous one.
        let replacement = SelectedPhoto::new("kulkas.jpg".to_string(), vec![4, 5]).unwrap();
        state.reduce_in_place(BookingAction::SetGoodsPhoto(Some(replacement.clone())));
        assert_eq!(state.goods.foto_barang, Some(replacement));

        state.reduce_in_place(BookingAction::SetGoodsPhoto(None));
        assert!(state.goods.foto_barang.is_none());
    }

    #[test]
    fn waste_category_parses_only_the_fixed_values() {
        assert_eq!(
            WasteCategory::from_str("Limbah Kayu/Besi"),
            Some(WasteCategory::LimbahKayuBesi)
        );
        assert_eq!(WasteCategory::from_str("Elektronik"), None);
        assert_eq!(WasteCategory::ALL.len(), 4);
    }
}
