use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::StudentError;

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// True when the bytes open with a JPEG or PNG file signature.
pub fn is_supported_image(bytes: &[u8]) -> bool {
    bytes.starts_with(&JPEG_MAGIC) || bytes.starts_with(&PNG_MAGIC)
}

/// Downloads `url` and returns the image as standard base64. Transport
/// failures and non-2xx statuses surface as `PhotoFetch`; bytes that are
/// neither JPEG nor PNG as `UnsupportedImage`.
pub async fn fetch_and_encode(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, StudentError> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    tracing::debug!(url, size = bytes.len(), "photo fetched");

    if !is_supported_image(&bytes) {
        return Err(StudentError::UnsupportedImage);
    }
    Ok(STANDARD.encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_and_png_signatures_are_supported() {
        assert!(is_supported_image(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]));
        assert!(is_supported_image(&PNG_MAGIC));
    }

    #[test]
    fn other_bytes_are_rejected() {
        assert!(!is_supported_image(b"GIF89a"));
        assert!(!is_supported_image(b"plain text"));
        assert!(!is_supported_image(&[]));
        assert!(!is_supported_image(&[0xFF, 0xD8])); // truncated JPEG header
    }

    #[test]
    fn jfif_bytes_encode_with_the_classic_prefix() {
        let encoded = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
        assert!(encoded.starts_with("/9j/4"));
    }

    #[test]
    fn png_bytes_encode_starting_with_i() {
        let encoded = STANDARD.encode(PNG_MAGIC);
        assert!(encoded.starts_with('i'));
    }
}
