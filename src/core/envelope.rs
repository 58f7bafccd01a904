// src/core/envelope.rs
//! Self-describing envelope wire format
//!
//! One envelope per encrypted field: hex-encoded nonce, ciphertext and
//! authentication tag, serialized as a compact JSON object. Carries no
//! key material.

use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Hex-encoded 96-bit nonce (24 hex chars)
    pub iv: String,
    /// Hex-encoded ciphertext
    #[serde(rename = "encryptedData")]
    pub encrypted_data: String,
    /// Hex-encoded 128-bit authentication tag (32 hex chars)
    #[serde(rename = "authTag")]
    pub auth_tag: String,
}

impl Envelope {
    /// Parse the JSON wire format
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| CryptoError::InvalidCiphertext {
            reason: format!("not an envelope object: {e}"),
        })
    }

    /// Render the JSON wire format
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CryptoError::EncryptionFailed {
            reason: format!("envelope serialization failed: {e}"),
        })
    }

    pub fn nonce_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.iv).map_err(|_| CryptoError::InvalidIv)
    }

    pub fn ciphertext_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.encrypted_data).map_err(|_| CryptoError::InvalidCiphertext {
            reason: "ciphertext is not valid hex".to_owned(),
        })
    }

    pub fn tag_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.auth_tag).map_err(|_| CryptoError::InvalidAuthTag)
    }
}
