// src/field_ops.rs
//! Field-level entry points: encrypt, decrypt, hash
//!
//! Each constructor derives its key exactly once; the returned handle is
//! pure, reusable and safe to share across threads.

use crate::aliases::DerivedKey32;
use crate::config::Config;
use crate::core::kdf::derive_key;
use crate::core::paths::PathSet;
use crate::core::transform::{transform_object, transform_string, LeafOp};
use crate::enums::HashAlgorithm;
use crate::error::Result;
use crate::value::Value;

#[cfg(feature = "logging")]
use tracing::debug;

/// Build the encryption handle for a config
pub fn encrypt(config: &Config) -> Result<Encryptor> {
    let key = derive_key(config)?;
    #[cfg(feature = "logging")]
    debug!(context_labels = config.context.len(), "derived field key");
    Ok(Encryptor { key })
}

/// Build the decryption handle for a config
pub fn decrypt(config: &Config) -> Result<Decryptor> {
    let key = derive_key(config)?;
    #[cfg(feature = "logging")]
    debug!(context_labels = config.context.len(), "derived field key");
    Ok(Decryptor { key })
}

/// Build the hashing handle; defaults to SHA-512 when no algorithm given
pub fn hash(algorithm: Option<HashAlgorithm>) -> Hasher {
    Hasher {
        algorithm: algorithm.unwrap_or_default(),
    }
}

pub struct Encryptor {
    key: DerivedKey32,
}

impl Encryptor {
    /// Encrypt a bare string → envelope JSON
    pub fn from_string(&self, text: &str) -> Result<String> {
        transform_string(text, &LeafOp::Encrypt(&self.key))
    }

    /// Encrypt the selected locations of a value tree. With no explicit
    /// paths, every top-level field is selected as a whole unit.
    pub fn from_object(&self, value: &Value, paths: Option<&PathSet>) -> Result<Value> {
        let op = LeafOp::Encrypt(&self.key);
        match paths {
            Some(p) => transform_object(value, p, &op),
            None => transform_object(value, &default_paths(value), &op),
        }
    }
}

pub struct Decryptor {
    key: DerivedKey32,
}

impl Decryptor {
    /// Decrypt an envelope JSON string → plaintext
    pub fn from_string(&self, envelope_json: &str) -> Result<String> {
        transform_string(envelope_json, &LeafOp::Decrypt(&self.key))
    }

    /// Decrypt the selected locations of a value tree; the mirror of
    /// [`Encryptor::from_object`] under the same path set.
    pub fn from_object(&self, value: &Value, paths: Option<&PathSet>) -> Result<Value> {
        let op = LeafOp::Decrypt(&self.key);
        match paths {
            Some(p) => transform_object(value, p, &op),
            None => transform_object(value, &default_paths(value), &op),
        }
    }
}

pub struct Hasher {
    algorithm: HashAlgorithm,
}

impl Hasher {
    /// Digest a bare string → lowercase hex
    pub fn from_string(&self, text: &str) -> Result<String> {
        transform_string(text, &LeafOp::Digest(self.algorithm))
    }

    /// Replace the selected locations of a value tree with their digests.
    /// The result is structurally isomorphic; there is no inverse.
    pub fn from_object(&self, value: &Value, paths: Option<&PathSet>) -> Result<Value> {
        let op = LeafOp::Digest(self.algorithm);
        match paths {
            Some(p) => transform_object(value, p, &op),
            None => transform_object(value, &default_paths(value), &op),
        }
    }
}

/// Default selection: the root object's top-level field names
fn default_paths(value: &Value) -> PathSet {
    match value {
        Value::Object(map) => PathSet::from_root_fields(map),
        _ => PathSet::new(),
    }
}
