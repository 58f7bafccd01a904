// src/core/digest.rs
//! One-way digests over string payloads
//!
//! Deterministic, lowercase hex, no inverse.

use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::enums::HashAlgorithm;

fn hex_digest<D: Digest>(content: &str) -> String {
    let mut hasher = D::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Digest `content` under `algorithm` and return lowercase hex
pub fn digest_hex(algorithm: HashAlgorithm, content: &str) -> String {
    match algorithm {
        HashAlgorithm::Sha1 => hex_digest::<Sha1>(content),
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(content),
        HashAlgorithm::Sha384 => hex_digest::<Sha384>(content),
        HashAlgorithm::Sha512 => hex_digest::<Sha512>(content),
        HashAlgorithm::Md5 => hex_digest::<Md5>(content),
        HashAlgorithm::Ripemd160 => hex_digest::<Ripemd160>(content),
    }
}
