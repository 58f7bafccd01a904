// src/core/transform.rs
//! Recursive structural transform over nested values
//!
//! Walks an object tree, consults the path set at each level, and applies
//! the leaf operation at exactly the selected locations. Encryption and
//! decryption traverse identically, so round-tripping with the same path
//! set restores the input bit for bit. Rules:
//!
//! - Arrays are atomic leaves: serialized whole when selected, copied
//!   verbatim otherwise, never recursed into.
//! - A selected object subtree is transformed as one opaque unit; an
//!   unselected one is recursed into with the set narrowed to its
//!   descendants.
//! - Selected scalars are serialized to canonical JSON before the leaf op,
//!   so `"42"` and `42` stay distinct across a round trip.
//! - A non-finite number anywhere the walk visits aborts the whole call
//!   with the offending dot path. No partial result is ever returned.

use crate::aliases::DerivedKey32;
use crate::core::aead::{decrypt_leaf, encrypt_leaf};
use crate::core::digest::digest_hex;
use crate::core::envelope::Envelope;
use crate::core::paths::{join_path, PathSet};
use crate::enums::HashAlgorithm;
use crate::error::{CryptoError, Result};
use crate::value::{Map, Value};

/// The transform applied at each selected location
pub enum LeafOp<'a> {
    Encrypt(&'a DerivedKey32),
    Decrypt(&'a DerivedKey32),
    Digest(HashAlgorithm),
}

impl LeafOp<'_> {
    /// String-level application: encrypt to envelope JSON, decrypt an
    /// envelope JSON string, or digest to hex. No traversal, no
    /// serialization.
    pub(crate) fn apply_str(&self, content: &str) -> Result<String> {
        match self {
            LeafOp::Encrypt(key) => encrypt_leaf(key, content)?.to_json(),
            LeafOp::Decrypt(key) => decrypt_leaf(key, &Envelope::from_json(content)?),
            LeafOp::Digest(algorithm) => Ok(digest_hex(*algorithm, content)),
        }
    }

    /// Apply to a selected value. Encrypt/digest serialize the value to
    /// canonical JSON first; decrypt takes the envelope string raw and
    /// re-parses the plaintext, mirroring the serialize-before-encrypt
    /// step.
    fn apply_value(&self, value: &Value, path: &str) -> Result<Value> {
        match self {
            LeafOp::Decrypt(key) => {
                let Value::String(content) = value else {
                    return Err(CryptoError::InvalidCiphertext {
                        reason: format!("value at `{path}` is not an envelope string"),
                    });
                };
                let plaintext = decrypt_leaf(key, &Envelope::from_json(content)?)?;
                Ok(reparse(plaintext))
            }
            _ => {
                if let Some(bad) = value.find_non_finite(path) {
                    return Err(CryptoError::UnsupportedType { path: bad });
                }
                let serialized =
                    value
                        .canonical_json()
                        .ok_or_else(|| CryptoError::UnsupportedType {
                            path: path.to_owned(),
                        })?;
                Ok(Value::String(self.apply_str(&serialized)?))
            }
        }
    }
}

/// Decrypted plaintext back into the value model; non-JSON plaintext
/// (string-level encryption) stays a plain string.
fn reparse(plaintext: String) -> Value {
    match serde_json::from_str::<serde_json::Value>(&plaintext) {
        Ok(v) => Value::from(v),
        Err(_) => Value::String(plaintext),
    }
}

/// Transform a bare string. Delegates straight to the leaf op.
pub fn transform_string(text: &str, op: &LeafOp) -> Result<String> {
    op.apply_str(text)
}

/// Transform a value tree, applying `op` at the locations named by
/// `paths`. Object roots are traversed; scalar and array roots are
/// handled by the string-level leaf operation as one unit.
pub fn transform_object(value: &Value, paths: &PathSet, op: &LeafOp) -> Result<Value> {
    match value {
        Value::Object(map) => walk_object(map, paths, op, ""),
        other => op.apply_value(other, ""),
    }
}

fn walk_object(map: &Map, paths: &PathSet, op: &LeafOp, base: &str) -> Result<Value> {
    let mut out = Map::new();
    for (key, field) in map {
        let path = join_path(base, key);
        let transformed = match field {
            // Atomic: whole-array transform or verbatim copy
            Value::Array(_) => {
                if paths.selected(key) {
                    op.apply_value(field, &path)?
                } else {
                    field.clone()
                }
            }
            Value::Object(inner) => {
                if paths.selected(key) {
                    op.apply_value(field, &path)?
                } else {
                    walk_object(inner, &paths.narrow(key), op, &path)?
                }
            }
            Value::Number(n) if !n.is_finite() => {
                return Err(CryptoError::UnsupportedType { path })
            }
            scalar => {
                if paths.selected(key) {
                    op.apply_value(scalar, &path)?
                } else {
                    scalar.clone()
                }
            }
        };
        out.insert(key.clone(), transformed);
    }
    Ok(Value::Object(out))
}
