// Wire types for the booking API - no dioxus imports needed here
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Server-side validation errors keyed by field name, each carrying the
/// server's ordered messages. A new submission attempt replaces the whole
/// map, so stale entries from a previous 422 never linger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// First message for a field, which is what the forms render inline.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0.get(field)?.first().map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Drop one field's messages. Called when the user edits that field, so
    /// a stale 422 message never lingers over a corrected value.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Body shape of a 422 response: `{ "errors": { field: [messages...] } }`.
#[derive(Deserialize, Debug, Clone)]
pub struct ValidationBody {
    #[serde(default)]
    pub errors: FieldErrors,
}

/// Successful order creation: `{ "data": { "id_pemesanan": ... } }`.
#[derive(Deserialize, Debug, Clone)]
pub struct OrderCreatedBody {
    pub data: OrderCreated,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderCreated {
    pub id_pemesanan: u64,
}

/// Generic `{ "message": ... }` body used by registration and error replies.
#[derive(Deserialize, Debug, Clone)]
pub struct MessageBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_deserialize_from_422_body() {
        let body: ValidationBody = serde_json::from_str(
            r#"{"errors":{"tgl_mulai":["Tanggal wajib diisi","Tanggal tidak valid"]}}"#,
        )
        .unwrap();
        assert_eq!(body.errors.first("tgl_mulai"), Some("Tanggal wajib diisi"));
        assert_eq!(body.errors.first("lokasi_jemput"), None);
    }

    #[test]
    fn order_created_parses_the_nested_id() {
        let body: OrderCreatedBody =
            serde_json::from_str(r#"{"data":{"id_pemesanan":42,"status":"menunggu"}}"#).unwrap();
        assert_eq!(body.data.id_pemesanan, 42);
    }

    #[test]
    fn validation_body_tolerates_missing_errors_key() {
        let body: ValidationBody = serde_json::from_str(r#"{"message":"invalid"}"#).unwrap();
        assert!(body.errors.is_empty());
    }
}
