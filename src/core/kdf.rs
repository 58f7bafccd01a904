// src/core/kdf.rs
//! Deterministic key derivation — scrypt over secret + combined salt
//!
//! The ordered context labels join into a dynamic suffix appended to the
//! static salt. Label order is significant: reordering the same labels
//! derives a different key.

use scrypt::{scrypt, Params};

use crate::aliases::DerivedKey32;
use crate::config::Config;
use crate::consts::{CONTEXT_SEPARATOR, KEY_LEN, SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};
use crate::error::{CryptoError, Result};

/// Derive the 256-bit field key for a config. Same config, same key —
/// no randomness anywhere in this path.
pub fn derive_key(config: &Config) -> Result<DerivedKey32> {
    config.validate()?;

    let combined_salt = format!(
        "{}{}{}",
        config.salt,
        CONTEXT_SEPARATOR,
        config.context.join(CONTEXT_SEPARATOR)
    );

    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN).map_err(|e| {
        CryptoError::Config {
            reason: format!("invalid scrypt parameters: {e}"),
        }
    })?;

    let mut okm = [0u8; KEY_LEN];
    scrypt(
        config.secret.as_bytes(),
        combined_salt.as_bytes(),
        &params,
        &mut okm,
    )
    .map_err(|e| CryptoError::Config {
        reason: format!("scrypt derivation failed: {e}"),
    })?;

    Ok(DerivedKey32::new(okm))
}
