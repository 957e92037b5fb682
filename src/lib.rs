//! `hybrid-seal` — client-side hybrid encryption for payloads bound to a
//! server-held RSA private key.
//!
//! RSA alone cannot efficiently encrypt arbitrary-length payloads, so each
//! call generates a fresh AES-128-GCM key, encrypts the payload under it,
//! and wraps the key itself under the pre-distributed RSA-OAEP (SHA-256)
//! public key. Both artifacts ship base64-encoded alongside an opaque
//! key-version identifier.
//!
//! # Envelope format
//!
//! | field         | contents                                           |
//! |---------------|----------------------------------------------------|
//! | `ciphertext`  | base64(`nonce(12)` ‖ AES-128-GCM ciphertext+tag)   |
//! | `key_version` | configured version string, verbatim                |
//! | `wrapped_key` | base64(RSA-OAEP-SHA-256(raw AES key))              |
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), hybrid_seal::SealError> {
//! use hybrid_seal::{seal, SealConfig};
//!
//! let cfg = SealConfig::new(std::env::var("PUBLIC_KEY_STRING").unwrap(), "v1");
//! let envelope = seal(&cfg, "hello world").await?;
//! println!("{}", envelope.key_version);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod envelope;
pub mod error;
pub mod keys;

pub use config::SealConfig;
pub use envelope::{seal, SealedEnvelope};
pub use error::SealError;
pub use keys::{EphemeralKey, KeyUsage, WrappingPublicKey};
