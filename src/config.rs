// src/config.rs
//! Caller-supplied configuration: secret, salt and context labels
//!
//! One `Config` pins one derived key. Validation runs before any
//! derivation work, never after.

use std::path::Path;

use serde::Deserialize;

use crate::consts::{MIN_SALT_LEN, MIN_SECRET_LEN};
use crate::error::{CryptoError, Result};

/// Name of the environment variable pointing at a TOML config file
pub const CONFIG_ENV_VAR: &str = "FIELD_CIPHER_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// High-entropy secret, at least 32 bytes
    pub secret: String,
    /// Static salt, at least 16 bytes
    pub salt: String,
    /// Ordered context labels mixed into the derivation; order matters
    #[serde(default)]
    pub context: Vec<String>,
}

impl Config {
    pub fn new(
        secret: impl Into<String>,
        salt: impl Into<String>,
        context: Vec<String>,
    ) -> Self {
        Self {
            secret: secret.into(),
            salt: salt.into(),
            context,
        }
    }

    /// Enforce minimum secret/salt lengths (byte lengths)
    pub fn validate(&self) -> Result<()> {
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(CryptoError::Config {
                reason: format!(
                    "secret must be at least {MIN_SECRET_LEN} bytes, got {}",
                    self.secret.len()
                ),
            });
        }
        if self.salt.len() < MIN_SALT_LEN {
            return Err(CryptoError::Config {
                reason: format!(
                    "salt must be at least {MIN_SALT_LEN} bytes, got {}",
                    self.salt.len()
                ),
            });
        }
        Ok(())
    }

    /// Load and validate a config from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| CryptoError::Config {
            reason: format!("cannot read {}: {e}", path.as_ref().display()),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| CryptoError::Config {
            reason: format!("invalid TOML in {}: {e}", path.as_ref().display()),
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Load a config from the file named by `FIELD_CIPHER_CONFIG`
pub fn load_from_env() -> Result<Config> {
    let path = std::env::var(CONFIG_ENV_VAR).map_err(|_| CryptoError::Config {
        reason: format!("{CONFIG_ENV_VAR} is not set"),
    })?;
    Config::from_toml_file(path)
}
