//! Event domain model.
//!
//! # Responsibility
//! - Define the event record and its form draft.
//! - Encode uploaded pictures as inline data URIs for client-side preview.

use base64::engine::general_purpose;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Scheduled organization event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    /// Letters and spaces only.
    pub title: String,
    pub description: String,
    /// Required, no range check.
    pub date: String,
    /// Letters and spaces only.
    pub location: String,
    /// Inline `data:<mime>;base64,<payload>` URI, when a picture was uploaded.
    pub picture: Option<String>,
}

/// Candidate event as captured by the add-event form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub picture: Option<PictureUpload>,
}

/// Raw uploaded image payload before encoding.
///
/// No size or type constraint is enforced; the upload surface accepts any
/// binary payload and a caller-supplied MIME label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureUpload {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl PictureUpload {
    pub fn new(bytes: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime: mime.into(),
        }
    }

    /// Encodes the payload as an inline data URI.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PictureUpload;

    #[test]
    fn data_uri_carries_mime_and_base64_payload() {
        let upload = PictureUpload::new(*b"png-bytes", "image/png");
        let uri = upload.to_data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(uri, "data:image/png;base64,cG5nLWJ5dGVz");
    }

    #[test]
    fn data_uri_of_empty_payload_has_empty_body() {
        let upload = PictureUpload::new(Vec::new(), "image/jpeg");
        assert_eq!(upload.to_data_uri(), "data:image/jpeg;base64,");
    }
}
