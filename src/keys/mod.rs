//! Key handles for the sealing pipeline.
//!
//! Both key types are opaque handles restricted to an explicit capability
//! set, mirroring how the decrypting side scopes its own key material:
//!
//! - [`WrappingPublicKey`] — imported RSA-OAEP (SHA-256) public key,
//!   restricted to `{Encrypt, WrapKey}`.
//! - [`EphemeralKey`] — fresh 128-bit AES-GCM key generated per call,
//!   restricted to `{Encrypt, Decrypt}`, zeroed on drop.
//!
//! Keys default to non-extractable: raw export is refused unless a caller
//! explicitly opts in at construction time.

pub mod ephemeral;
pub mod public;

pub use ephemeral::EphemeralKey;
pub use public::WrappingPublicKey;

/// Capabilities a key handle may be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUsage {
    /// Encrypt data under this key.
    Encrypt,
    /// Decrypt data under this key.
    Decrypt,
    /// Wrap (encrypt) another key's raw bytes under this key.
    WrapKey,
}
