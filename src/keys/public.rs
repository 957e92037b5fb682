//! [`WrappingPublicKey`]: imported RSA-OAEP public key handle.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;

use crate::error::SealError;
use crate::keys::KeyUsage;

/// An imported RSA public key, usable only for encryption and key wrapping.
///
/// The key material arrives as a base64-encoded SPKI blob from external
/// configuration, is parsed once at import, and never leaves this handle.
/// The OAEP digest is fixed to SHA-256 at the call sites that use the key.
#[derive(Debug, Clone)]
pub struct WrappingPublicKey {
    key: RsaPublicKey,
    usages: &'static [KeyUsage],
    extractable: bool,
}

impl WrappingPublicKey {
    /// Import a non-extractable key from base64-encoded SPKI bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::KeyImport`] if the input is not valid base64 or
    /// the decoded bytes are not SPKI-encoded RSA key material.
    pub fn import(public_key_string: &str) -> Result<Self, SealError> {
        Self::import_with_extractable(public_key_string, false)
    }

    /// Import a key, explicitly choosing whether it may later be re-exported.
    ///
    /// The decrypting side's contract only requires the key for wrapping, so
    /// [`import`](Self::import) (non-extractable) is the right default.
    pub fn import_with_extractable(
        public_key_string: &str,
        extractable: bool,
    ) -> Result<Self, SealError> {
        let der = STANDARD
            .decode(public_key_string)
            .map_err(|e| SealError::KeyImport(format!("invalid base64: {e}")))?;

        let key = RsaPublicKey::from_public_key_der(&der)
            .map_err(|e| SealError::KeyImport(format!("invalid SPKI key material: {e}")))?;

        Ok(Self {
            key,
            usages: &[KeyUsage::Encrypt, KeyUsage::WrapKey],
            extractable,
        })
    }

    /// Returns `true` if this key is granted the given capability.
    pub fn allows(&self, usage: KeyUsage) -> bool {
        self.usages.contains(&usage)
    }

    /// Whether the key was imported as re-exportable.
    pub fn is_extractable(&self) -> bool {
        self.extractable
    }

    /// Borrow the parsed key for an RSA operation.
    pub(crate) fn inner(&self) -> &RsaPublicKey {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use rsa::pkcs8::EncodePublicKey;
    use rsa::RsaPrivateKey;

    fn spki_b64() -> String {
        use aes_gcm::aead::OsRng;
        let private = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
        let der = private.to_public_key().to_public_key_der().unwrap();
        STANDARD.encode(der.as_bytes())
    }

    #[test]
    fn imports_valid_spki() {
        let key = WrappingPublicKey::import(&spki_b64()).unwrap();
        assert!(key.allows(KeyUsage::Encrypt));
        assert!(key.allows(KeyUsage::WrapKey));
        assert!(!key.allows(KeyUsage::Decrypt));
        assert!(!key.is_extractable());
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = WrappingPublicKey::import("!!!not-base64!!!").unwrap_err();
        assert!(matches!(err, SealError::KeyImport(_)));
    }

    #[test]
    fn rejects_truncated_base64() {
        let mut s = spki_b64();
        s.truncate(s.len() - 1);
        assert!(WrappingPublicKey::import(&s).is_err());
    }

    #[test]
    fn rejects_non_spki_bytes() {
        let garbage = STANDARD.encode(b"these are not SPKI bytes");
        let err = WrappingPublicKey::import(&garbage).unwrap_err();
        assert!(matches!(err, SealError::KeyImport(_)));
    }

    #[test]
    fn extractable_flag_is_opt_in() {
        let key = WrappingPublicKey::import_with_extractable(&spki_b64(), true).unwrap();
        assert!(key.is_extractable());
    }
}
