//! Error taxonomy for the sealing pipeline.
//!
//! No step recovers locally: the first error encountered in provisioning,
//! generation, encryption, or wrapping aborts the whole call and is surfaced
//! to the caller unmodified. A partial envelope is never returned.

use thiserror::Error;

/// Errors produced by the sealing pipeline.
///
/// The crate only distinguishes error kinds; rendering user-visible
/// messaging is the caller's responsibility.
#[derive(Debug, Error)]
pub enum SealError {
    /// The configured public key is malformed — invalid base64 or bytes that
    /// are not SPKI-encoded RSA key material.
    #[error("public key import failed: {0}")]
    KeyImport(String),

    /// The OS secure random source is unavailable. Key and nonce generation
    /// never fall back to a weaker source.
    #[error("secure random source unavailable: {0}")]
    Entropy(String),

    /// The AES-GCM primitive rejected the operation, or ciphertext
    /// authentication failed on decryption.
    #[error("payload encryption failed: {0}")]
    Encryption(String),

    /// RSA-OAEP key wrapping failed.
    #[error("key wrapping failed: {0}")]
    Wrap(String),

    /// An envelope field could not be decoded from base64. Unreachable on
    /// the encoding side for well-formed byte sequences.
    #[error("envelope field encoding failed: {0}")]
    Encoding(String),
}
