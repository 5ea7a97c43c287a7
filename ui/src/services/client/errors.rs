//! API error taxonomy
//!
//! Four classes drive four recoveries: field validation re-renders inline,
//! authentication failures force a re-login, everything else surfaces a
//! generic alert and keeps the form populated for manual retry.

use thiserror::Error;

use super::types::FieldErrors;

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("request failed: {message}")]
    Network { message: String },

    #[error("not authenticated")]
    Unauthorized,

    #[error("validation failed for {} field(s)", errors.0.len())]
    Validation { errors: FieldErrors },

    #[error("server returned status {status}: {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        ApiError::Network {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn display_counts_validation_fields() {
        let mut map = BTreeMap::new();
        map.insert("tgl_mulai".to_string(), vec!["wajib diisi".to_string()]);
        map.insert("lokasi_jemput".to_string(), vec!["wajib diisi".to_string()]);
        let err = ApiError::Validation {
            errors: FieldErrors(map),
        };
        assert_eq!(err.to_string(), "validation failed for 2 field(s)");
    }
}
