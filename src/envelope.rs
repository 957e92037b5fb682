//! The sealed envelope and the end-to-end sealing pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SealConfig;
use crate::crypto::{cipher, wrap};
use crate::encoding;
use crate::error::SealError;
use crate::keys::{EphemeralKey, WrappingPublicKey};

/// The final output of [`seal`]: three text fields intended for direct
/// inclusion in a request body. The wire format around them is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedEnvelope {
    /// Base64 of `nonce || AES-GCM ciphertext+tag` over the payload.
    pub ciphertext: String,
    /// The configured key-version identifier, copied verbatim.
    pub key_version: String,
    /// Base64 of the RSA-OAEP-wrapped AES key.
    pub wrapped_key: String,
}

/// Seal a plaintext payload for the server holding the matching private key.
///
/// The pipeline is a single linear pass with no retry and no partial
/// results: import the configured public key, generate a fresh single-use
/// AES-128 key, then encrypt the payload and wrap the key — two independent
/// suspend points — and base64-encode both artifacts. Any sub-step failure
/// aborts the call and surfaces the first error.
///
/// Key import runs before symmetric key generation, so a malformed
/// configured key fails the call before any key material is drawn.
///
/// # Errors
///
/// See [`SealError`] for the failure taxonomy.
pub async fn seal(cfg: &SealConfig, payload: &str) -> Result<SealedEnvelope, SealError> {
    let public_key = WrappingPublicKey::import(&cfg.public_key_string)?;
    let session_key = EphemeralKey::generate()?;
    debug!(payload_len = payload.len(), "sealing payload");

    // No data dependency between the two operations.
    let (sealed_payload, wrapped_key) = tokio::try_join!(
        async { cipher::encrypt_payload(&session_key, payload) },
        async { wrap::wrap_key(&public_key, &session_key) },
    )?;
    // session_key drops here: one encrypt, one wrap, never reused.

    debug!(
        ciphertext_len = sealed_payload.len(),
        wrapped_key_len = wrapped_key.len(),
        "payload sealed"
    );

    Ok(SealedEnvelope {
        ciphertext: encoding::encode(&sealed_payload),
        key_version: cfg.public_key_version.clone(),
        wrapped_key: encoding::encode(&wrapped_key),
    })
}
