//! Payload encryption and key-wrapping primitives.
//!
//! This module is free of configuration and assembly concerns; it provides
//! the two envelope-construction operations used by [`seal`](crate::seal).
//!
//! # Ciphertext layout
//!
//! ```text
//! nonce(12 bytes) || ciphertext + tag
//! ```
//!
//! The random 96-bit nonce is prefixed to the AES-GCM output so the
//! decrypting side can recover it from the single encoded ciphertext field.

pub mod cipher;
pub mod wrap;

pub use cipher::NONCE_LEN;
