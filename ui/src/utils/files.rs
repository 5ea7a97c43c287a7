//! Photo attachment validation and preview
//!
//! Order photos are validated before any network traffic: they must look
//! like an image (by extension, which is what the browser's `accept` filter
//! keys on too) and stay under the 5 MB upload cap. Accepted files carry a
//! base64 data URL so the form can show a preview without an object store.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// Upload cap enforced client-side before the request is built.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    #[error("File harus berupa gambar (JPG, PNG, JPEG)")]
    NotAnImage,
    #[error("Ukuran file maksimal 5MB")]
    TooLarge,
}

/// Map a file name to an image MIME type, or `None` for non-images.
pub fn image_mime_for(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// A validated photo attachment with its inline preview.
#[derive(Clone, PartialEq)]
pub struct SelectedPhoto {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    pub preview: String,
}

impl SelectedPhoto {
    /// Validate a picked file and build its preview data URL.
    pub fn new(name: String, bytes: Vec<u8>) -> Result<Self, PhotoError> {
        let mime = image_mime_for(&name).ok_or(PhotoError::NotAnImage)?;
        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(PhotoError::TooLarge);
        }
        let preview = format!("data:{};base64,{}", mime, BASE64.encode(&bytes));
        Ok(Self {
            name,
            mime,
            bytes,
            preview,
        })
    }

    /// Size in megabytes, shown under the preview.
    pub fn size_mb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0 / 1024.0
    }
}

impl std::fmt::Debug for SelectedPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedPhoto")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_extensions_map_to_mime_types() {
        assert_eq!(image_mime_for("sofa.jpg"), Some("image/jpeg"));
        assert_eq!(image_mime_for("sofa.JPEG"), Some("image/jpeg"));
        assert_eq!(image_mime_for("kulkas.png"), Some("image/png"));
        assert_eq!(image_mime_for("archive.pdf"), None);
        assert_eq!(image_mime_for("no_extension"), None);
    }

    #[test]
    fn non_image_file_is_rejected() {
        let result = SelectedPhoto::new("notes.txt".to_string(), vec![1, 2, 3]);
        assert_eq!(result.unwrap_err(), PhotoError::NotAnImage);
    }

    #[test]
    fn oversized_image_is_rejected() {
        let bytes = vec![0u8; MAX_PHOTO_BYTES + 1];
        let result = SelectedPhoto::new("big.png".to_string(), bytes);
        assert_eq!(result.unwrap_err(), PhotoError::TooLarge);
    }

    #[test]
    fn image_at_the_cap_is_accepted() {
        let bytes = vec![0u8; MAX_PHOTO_BYTES];
        let photo = SelectedPhoto::new("exact.png".to_string(), bytes).unwrap();
        assert_eq!(photo.mime, "image/png");
        assert!(photo.preview.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn preview_encodes_the_bytes() {
        let photo = SelectedPhoto::new("dot.jpg".to_string(), vec![0xFF, 0xD8]).unwrap();
        assert_eq!(photo.preview, "data:image/jpeg;base64,/9g=");
        assert!((photo.size_mb() - 2.0 / 1024.0 / 1024.0).abs() < 1e-9);
    }
}
