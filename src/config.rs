//! Configuration for the sealing pipeline.
//!
//! The server's public key and its version identifier are provisioned
//! out-of-band and read from environment variables at startup. The
//! configuration is an explicit value passed into [`seal`](crate::seal) —
//! there is no hidden process-wide state.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated sealing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SealConfig {
    /// Base64-encoded SPKI bytes of the server's RSA public key. **Required.**
    pub public_key_string: String,

    /// Opaque key-version identifier, copied verbatim into every envelope.
    /// Not derived cryptographically and not validated here. **Required.**
    pub public_key_version: String,
}

impl SealConfig {
    /// Construct a configuration from explicit values.
    pub fn new(public_key_string: impl Into<String>, public_key_version: impl Into<String>) -> Self {
        Self {
            public_key_string: public_key_string.into(),
            public_key_version: public_key_version.into(),
        }
    }

    /// Load configuration from the `PUBLIC_KEY_STRING` and
    /// `PUBLIC_KEY_VERSION` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is absent or the key string is
    /// empty. The version string's format is deliberately not validated.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: SealConfig = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.public_key_string.trim().is_empty() {
            anyhow::bail!("PUBLIC_KEY_STRING is required and must not be empty");
        }
        Ok(())
    }
}
