// src/lib.rs
//! field-cipher — selective field-level encryption for structured data
//!
//! Features:
//! - AES-256-GCM envelopes per selected field or subtree
//! - scrypt key derivation from secret + salt + ordered context labels
//! - One-way digests (SHA-2 family, SHA-1, MD5, RIPEMD-160)
//! - Dot-notation path selection with per-level narrowing

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod field_ops;
pub mod key_ops;
pub mod value;

// Re-export everything users need at the crate root
pub use aliases::{DerivedKey32, RevealSecret, ToHex};
pub use config::{load_from_env, Config};
pub use crate::core::{
    decrypt_leaf, derive_key, digest_hex, encrypt_leaf, transform_object, transform_string,
    Envelope, LeafOp, PathSet,
};
pub use enums::HashAlgorithm;
pub use error::{CryptoError, Result};
pub use field_ops::{decrypt, encrypt, hash, Decryptor, Encryptor, Hasher};
pub use key_ops::{key_representations, KeyRepr};
pub use value::{Map, Value};
