//! RSA-OAEP key wrapping.

use aes_gcm::aead::OsRng;
use rsa::Oaep;
use sha2::Sha256;

use crate::error::SealError;
use crate::keys::{EphemeralKey, KeyUsage, WrappingPublicKey};

/// Wrap an [`EphemeralKey`]'s raw bytes under the configured public key
/// using RSA-OAEP with SHA-256.
///
/// # Errors
///
/// Returns [`SealError::Wrap`] if the public key lacks the `WrapKey`
/// capability or the RSA primitive fails (e.g. a modulus too small for the
/// OAEP-padded key bytes).
pub fn wrap_key(public_key: &WrappingPublicKey, key: &EphemeralKey) -> Result<Vec<u8>, SealError> {
    if !public_key.allows(KeyUsage::WrapKey) {
        return Err(SealError::Wrap("key does not permit key wrapping".into()));
    }
    oaep_encrypt(public_key, key.expose_bytes())
}

/// Encrypt raw bytes under the public key with RSA-OAEP(SHA-256).
///
/// Shared by [`wrap_key`]; not exposed outside the crate — payloads go
/// through AES-GCM, only key material goes through RSA directly.
fn oaep_encrypt(public_key: &WrappingPublicKey, bytes: &[u8]) -> Result<Vec<u8>, SealError> {
    let padding = Oaep::new::<Sha256>();
    public_key
        .inner()
        .encrypt(&mut OsRng, padding, bytes)
        .map_err(|e| SealError::Wrap(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use rsa::pkcs8::EncodePublicKey;
    use rsa::RsaPrivateKey;

    fn keypair() -> (RsaPrivateKey, WrappingPublicKey) {
        let private = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
        let der = private.to_public_key().to_public_key_der().unwrap();
        let public = WrappingPublicKey::import(&STANDARD.encode(der.as_bytes())).unwrap();
        (private, public)
    }

    #[test]
    fn wrap_then_unwrap_recovers_key_bytes() {
        let (private, public) = keypair();
        let key = EphemeralKey::generate_with_extractable(true).unwrap();

        let wrapped = wrap_key(&public, &key).unwrap();
        // A 2048-bit modulus yields a 256-byte OAEP ciphertext.
        assert_eq!(wrapped.len(), 256);

        let unwrapped = private.decrypt(Oaep::new::<Sha256>(), &wrapped).unwrap();
        assert_eq!(unwrapped, key.export_raw().unwrap());
    }

    #[test]
    fn wrapping_is_randomised() {
        let (_, public) = keypair();
        let key = EphemeralKey::generate().unwrap();
        let a = wrap_key(&public, &key).unwrap();
        let b = wrap_key(&public, &key).unwrap();
        // OAEP is probabilistic: same key bytes, different ciphertext.
        assert_ne!(a, b);
    }
}
