//! Binary-to-text encoding for envelope fields.
//!
//! Standard-alphabet base64 with padding and no line wrapping, matching what
//! the decrypting side expects. Encoding is total and deterministic.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::SealError;

/// Encode raw bytes as standard base64 text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a base64 envelope field back to raw bytes.
///
/// # Errors
///
/// Returns [`SealError::Encoding`] if the input is not valid standard
/// base64.
pub fn decode(field: &str) -> Result<Vec<u8>, SealError> {
    STANDARD
        .decode(field)
        .map_err(|e| SealError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_byte_order() {
        let bytes = [0x00, 0x01, 0xFE, 0xFF, 0x7F];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn uses_standard_alphabet_with_padding() {
        // 0xFB 0xEF is "++8=" in the standard alphabet ("--8=" in URL-safe).
        assert_eq!(encode(&[0xFB, 0xEF]), "++8=");
    }

    #[test]
    fn decode_rejects_invalid_input() {
        let err = decode("not base64!").unwrap_err();
        assert!(matches!(err, SealError::Encoding(_)));
    }
}
