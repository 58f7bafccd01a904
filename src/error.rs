// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Every failure the crate can report. Fail-fast: none of these are
/// recoverable by retrying the same call.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("invalid ciphertext: {reason}")]
    InvalidCiphertext { reason: String },

    #[error("initialization vector is not valid hex")]
    InvalidIv,

    #[error("authentication tag is not valid hex")]
    InvalidAuthTag,

    /// Reserved for a future envelope version prefix. Never produced today.
    #[error("unrecognized envelope prefix")]
    InvalidPrefix,

    #[error("encryption failed: {reason}")]
    EncryptionFailed { reason: String },

    #[error("decryption failed: ciphertext could not be authenticated")]
    DecryptionFailed,

    #[error("hash operation failed: {reason}")]
    HashFailed { reason: String },

    #[error("unsupported value at `{path}`")]
    UnsupportedType { path: String },
}
