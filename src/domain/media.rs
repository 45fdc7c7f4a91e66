// src/domain/media.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Decoded image submitted for upload, either as a data URL
/// (`data:<mime>;base64,<payload>`) or as a bare base64 payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    mime_type: Option<String>,
    bytes: Vec<u8>,
}

impl ImageData {
    pub fn parse(input: &str) -> DomainResult<Self> {
        let input = input.trim();
        let (mime_type, payload) = match input.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest
                    .split_once(',')
                    .ok_or_else(|| DomainError::validation("data url is missing its payload"))?;
                let mime = header
                    .strip_suffix(";base64")
                    .ok_or_else(|| DomainError::validation("data url must be base64 encoded"))?;
                let mime = (!mime.is_empty()).then(|| mime.to_string());
                (mime, payload)
            }
            None => (None, input),
        };

        if payload.is_empty() {
            return Err(DomainError::validation("image payload cannot be empty"));
        }

        let bytes = STANDARD
            .decode(payload)
            .map_err(|err| DomainError::validation(format!("invalid base64 image data: {err}")))?;

        if let Some(mime) = &mime_type {
            if !mime.starts_with("image/") {
                return Err(DomainError::validation(format!(
                    "unsupported media type `{mime}`"
                )));
            }
        }

        Ok(Self { mime_type, bytes })
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Declared mime type, or one sniffed from the leading magic bytes.
    pub fn effective_mime_type(&self) -> &str {
        if let Some(mime) = self.mime_type() {
            return mime;
        }
        match self.bytes.as_slice() {
            [0x89, b'P', b'N', b'G', ..] => "image/png",
            [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
            [b'G', b'I', b'F', b'8', ..] => "image/gif",
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
            _ => "application/octet-stream",
        }
    }

    /// Canonical `data:<mime>;base64,<payload>` rendering of the image.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.effective_mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_url() {
        let image = ImageData::parse("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(image.mime_type(), Some("image/png"));
        assert_eq!(image.bytes(), b"hello");
    }

    #[test]
    fn parses_bare_payload() {
        let image = ImageData::parse("aGVsbG8=").unwrap();
        assert_eq!(image.mime_type(), None);
        assert_eq!(image.bytes().len(), 5);
    }

    #[test]
    fn bare_payload_renders_as_sniffed_data_url() {
        let image = ImageData::parse("iVBORw0KGgo=").unwrap();
        assert_eq!(image.effective_mime_type(), "image/png");
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");

        let unknown = ImageData::parse("aGVsbG8=").unwrap();
        assert_eq!(
            unknown.to_data_url(),
            "data:application/octet-stream;base64,aGVsbG8="
        );
    }

    #[test]
    fn declared_mime_type_wins_over_sniffing() {
        let image = ImageData::parse("data:image/gif;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(image.to_data_url(), "data:image/gif;base64,iVBORw0KGgo=");
    }

    #[test]
    fn rejects_garbage() {
        assert!(ImageData::parse("").is_err());
        assert!(ImageData::parse("data:image/png;base64,").is_err());
        assert!(ImageData::parse("data:image/png,plain").is_err());
        assert!(ImageData::parse("data:text/plain;base64,aGVsbG8=").is_err());
        assert!(ImageData::parse("@@not-base64@@").is_err());
    }
}
