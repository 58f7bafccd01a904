// src/core/aead.rs
//! Pure AEAD primitives — no I/O, no traversal
//!
//! AES-256-GCM over in-memory strings. Every encryption draws a fresh
//! nonce from the thread-local CSPRNG; two calls never share one.

use aes_gcm::{aead::Aead, Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;

use crate::aliases::{DerivedKey32, RevealSecret};
use crate::consts::{NONCE_LEN, TAG_LEN};
use crate::core::envelope::Envelope;
use crate::error::{CryptoError, Result};

/// Encrypt one opaque string payload → self-describing envelope
pub fn encrypt_leaf(key: &DerivedKey32, plaintext: &str) -> Result<Envelope> {
    let cipher = Aes256Gcm::new_from_slice(key.expose_secret().as_slice()).map_err(|e| {
        CryptoError::EncryptionFailed {
            reason: format!("cipher init failed: {e}"),
        }
    })?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce_bytes);

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
        .map_err(|_| CryptoError::EncryptionFailed {
            reason: "AES-256-GCM seal failed".to_owned(),
        })?;

    // aes-gcm returns ciphertext || tag
    let (ciphertext, tag) = sealed.split_at(sealed.len() - TAG_LEN);

    Ok(Envelope {
        iv: hex::encode(nonce_bytes),
        encrypted_data: hex::encode(ciphertext),
        auth_tag: hex::encode(tag),
    })
}

/// Decrypt an envelope → plaintext string
///
/// Plaintext is released only after the authentication tag verifies.
pub fn decrypt_leaf(key: &DerivedKey32, envelope: &Envelope) -> Result<String> {
    let nonce = envelope.nonce_bytes()?;
    let ciphertext = envelope.ciphertext_bytes()?;
    let tag = envelope.tag_bytes()?;

    // Hex-valid but wrong-sized fields cannot reach the cipher
    if nonce.len() != NONCE_LEN || tag.len() != TAG_LEN {
        return Err(CryptoError::DecryptionFailed);
    }

    let cipher = Aes256Gcm::new_from_slice(key.expose_secret().as_slice())
        .map_err(|_| CryptoError::DecryptionFailed)?;

    let mut sealed = ciphertext;
    sealed.extend_from_slice(&tag);

    let plaintext = cipher
        .decrypt(Nonce::from_slice(&nonce), sealed.as_ref())
        .map_err(|_| CryptoError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
}
