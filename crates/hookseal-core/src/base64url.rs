//! Base64URL codec for compact token segments.
//!
//! Decoding maps the URL-safe alphabet onto the standard one, restores the
//! `=` padding and decodes standard base64. Input already in the standard
//! alphabet, or already padded, decodes the same way.

use base64::{
    engine::general_purpose::{STANDARD as BASE64, URL_SAFE_NO_PAD},
    Engine,
};

/// Base64URL decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// `len % 4 == 1` can never form a valid block.
    #[error("invalid base64url length: {len}")]
    InvalidLength { len: usize },

    /// Alphabet or padding error reported by the decoder.
    #[error("invalid base64url: {message}")]
    Invalid { message: String },
}

/// Decode base64url text (padding optional).
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut normalized: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    if normalized.len() % 4 == 1 {
        return Err(DecodeError::InvalidLength {
            len: normalized.len(),
        });
    }
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }

    BASE64
        .decode(normalized.as_bytes())
        .map_err(|e| DecodeError::Invalid {
            message: e.to_string(),
        })
}

/// Encode bytes as unpadded base64url.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
