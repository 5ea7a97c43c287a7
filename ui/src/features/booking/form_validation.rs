//! Pre-submission completeness checks per service variant
//!
//! These gate the submit button and produce the inline alert for the photo
//! requirement; range enforcement on numeric and date fields is left to the
//! platform constraints on the inputs themselves.

use super::types::{GoodsDraft, RentalDraft, WasteDraft};

pub fn validate_rental_complete(draft: &RentalDraft) -> bool {
    !draft.jumlah_orang.trim().is_empty()
        && !draft.tgl_mulai.trim().is_empty()
        && !draft.lama_rental.trim().is_empty()
        && !draft.lokasi_jemput.trim().is_empty()
}

pub fn validate_goods_complete(draft: &GoodsDraft) -> bool {
    !draft.deskripsi_barang.trim().is_empty()
        && !draft.est_berat_ton.trim().is_empty()
        && !draft.tgl_mulai.trim().is_empty()
        && !draft.lokasi_jemput.trim().is_empty()
        && !draft.lokasi_tujuan.trim().is_empty()
}

pub fn validate_waste_complete(draft: &WasteDraft) -> bool {
    draft.jenis_sampah.is_some()
        && !draft.volume_sampah.trim().is_empty()
        && !draft.tgl_mulai.trim().is_empty()
        && !draft.lokasi_jemput.trim().is_empty()
}

/// Alert raised when a required photo is missing at submit time.
pub fn missing_photo_message(photo_field: &str) -> String {
    match photo_field {
        "foto_sampah" => "Foto sampah wajib diunggah sebelum membuat pesanan.".to_string(),
        _ => "Foto barang wajib diunggah sebelum membuat pesanan.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::booking::types::WasteCategory;

    #[test]
    fn rental_defaults_only_need_a_date() {
        let mut draft = RentalDraft::default();
        assert!(!validate_rental_complete(&draft));
        draft.tgl_mulai = "2026-09-01".to_string();
        assert!(validate_rental_complete(&draft));
    }

    #[test]
    fn goods_requires_every_text_field() {
        let mut draft = GoodsDraft {
            deskripsi_barang: "Sofa".to_string(),
            est_berat_ton: "0.5".to_string(),
            tgl_mulai: "2026-09-01".to_string(),
            lokasi_jemput: "Jakarta".to_string(),
            lokasi_tujuan: "Depok".to_string(),
            ..GoodsDraft::default()
        };
        assert!(validate_goods_complete(&draft));
        draft.lokasi_tujuan = "   ".to_string();
        assert!(!validate_goods_complete(&draft));
    }

    #[test]
    fn waste_requires_a_chosen_category() {
        let mut draft = WasteDraft {
            volume_sampah: "2".to_string(),
            tgl_mulai: "2026-09-01".to_string(),
            lokasi_jemput: "Jakarta".to_string(),
            ..WasteDraft::default()
        };
        assert!(!validate_waste_complete(&draft));
        draft.jenis_sampah = Some(WasteCategory::Lainnya);
        assert!(validate_waste_complete(&draft));
    }
}
