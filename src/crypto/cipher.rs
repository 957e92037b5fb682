//! AES-128-GCM encryption and decryption of the payload.
//!
//! A fresh random 96-bit nonce is generated unconditionally for every call —
//! never zero, never counter-based. Nonce reuse under the same key breaks
//! both confidentiality and authentication; the keys here are single-use,
//! but the nonce path makes no assumption about that.

use aes_gcm::{
    aead::{rand_core::RngCore, Aead, KeyInit, OsRng},
    Aes128Gcm, Nonce,
};

use crate::error::SealError;
use crate::keys::{EphemeralKey, KeyUsage};

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// Encrypt a plaintext payload under an [`EphemeralKey`].
///
/// The payload is UTF-8 encoded, sealed with AES-128-GCM under a fresh
/// random nonce, and returned as `nonce || ciphertext+tag`.
///
/// # Errors
///
/// Returns [`SealError::Encryption`] if the key lacks the `Encrypt`
/// capability or the AEAD primitive rejects the input, and
/// [`SealError::Entropy`] if the OS random source fails while drawing the
/// nonce.
pub fn encrypt_payload(key: &EphemeralKey, payload: &str) -> Result<Vec<u8>, SealError> {
    if !key.allows(KeyUsage::Encrypt) {
        return Err(SealError::Encryption(
            "key does not permit encryption".into(),
        ));
    }
    let cipher = build_cipher(key)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| SealError::Entropy(e.to_string()))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, payload.as_bytes())
        .map_err(|_| SealError::Encryption("aead operation failed".into()))?;

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt a `nonce || ciphertext+tag` sequence back to the payload bytes.
///
/// # Errors
///
/// Returns [`SealError::Encryption`] if the key lacks the `Decrypt`
/// capability, the input is shorter than a nonce plus tag, or the
/// authentication tag does not verify (wrong key or tampered ciphertext).
pub fn decrypt_payload(key: &EphemeralKey, sealed: &[u8]) -> Result<Vec<u8>, SealError> {
    if !key.allows(KeyUsage::Decrypt) {
        return Err(SealError::Encryption(
            "key does not permit decryption".into(),
        ));
    }
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(SealError::Encryption("ciphertext too short".into()));
    }
    let cipher = build_cipher(key)?;

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SealError::Encryption("ciphertext authentication failed".into()))
}

fn build_cipher(key: &EphemeralKey) -> Result<Aes128Gcm, SealError> {
    Aes128Gcm::new_from_slice(key.expose_bytes())
        .map_err(|_| SealError::Encryption("invalid key length".into()))
}
