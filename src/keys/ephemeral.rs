//! [`EphemeralKey`]: single-use AES-128-GCM key generated per seal call.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::error::SealError;
use crate::keys::KeyUsage;

/// Byte length of an AES-128 key (16 bytes = 128 bits).
pub const KEY_LEN: usize = 16;

/// A fresh symmetric key, used for exactly one encryption and exactly one
/// wrap operation, then discarded.
///
/// The raw bytes leave the process only in RSA-wrapped form. When the handle
/// is dropped, the memory is overwritten with zeroes to minimise the window
/// during which plaintext key material lives in RAM.
pub struct EphemeralKey {
    bytes: Box<[u8; KEY_LEN]>,
    usages: &'static [KeyUsage],
    extractable: bool,
}

impl EphemeralKey {
    /// Generate a non-extractable key from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::Entropy`] if the OS random source is
    /// unavailable. There is no fallback to a weaker source.
    pub fn generate() -> Result<Self, SealError> {
        Self::generate_with_extractable(false)
    }

    /// Generate a key, explicitly choosing whether its raw bytes may be
    /// exported by the caller. Wrapping does not require extractability.
    pub fn generate_with_extractable(extractable: bool) -> Result<Self, SealError> {
        let mut buf = Box::new([0u8; KEY_LEN]);
        OsRng
            .try_fill_bytes(&mut buf[..])
            .map_err(|e| SealError::Entropy(e.to_string()))?;
        Ok(Self {
            bytes: buf,
            usages: &[KeyUsage::Encrypt, KeyUsage::Decrypt],
            extractable,
        })
    }

    /// Returns `true` if this key is granted the given capability.
    pub fn allows(&self, usage: KeyUsage) -> bool {
        self.usages.contains(&usage)
    }

    /// Whether the caller may export the raw key bytes.
    pub fn is_extractable(&self) -> bool {
        self.extractable
    }

    /// Export the raw key bytes, or `None` if the key is non-extractable.
    pub fn export_raw(&self) -> Option<[u8; KEY_LEN]> {
        self.extractable.then(|| *self.bytes)
    }

    /// Borrow the raw bytes for an in-crate cipher or wrap operation.
    pub(crate) fn expose_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl Drop for EphemeralKey {
    fn drop(&mut self) {
        // Zero the key material on drop.
        self.bytes.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for EphemeralKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("EphemeralKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_distinct_keys() {
        let a = EphemeralKey::generate_with_extractable(true).unwrap();
        let b = EphemeralKey::generate_with_extractable(true).unwrap();
        assert_ne!(a.export_raw().unwrap(), b.export_raw().unwrap());
    }

    #[test]
    fn capability_set_is_encrypt_decrypt() {
        let key = EphemeralKey::generate().unwrap();
        assert!(key.allows(KeyUsage::Encrypt));
        assert!(key.allows(KeyUsage::Decrypt));
        assert!(!key.allows(KeyUsage::WrapKey));
    }

    #[test]
    fn non_extractable_refuses_raw_export() {
        let key = EphemeralKey::generate().unwrap();
        assert!(!key.is_extractable());
        assert!(key.export_raw().is_none());
    }

    #[test]
    fn redacted_in_debug() {
        let key = EphemeralKey::generate().unwrap();
        assert!(format!("{key:?}").contains("REDACTED"));
    }
}
