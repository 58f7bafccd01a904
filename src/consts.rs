// src/consts.rs
//! Shared constants — security parameters and wire-format sizes

/// Derived key length in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// AES-GCM nonce length in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes (128 bits)
pub const TAG_LEN: usize = 16;

/// Minimum secret length in bytes, checked before derivation
pub const MIN_SECRET_LEN: usize = 32;

/// Minimum salt length in bytes, checked before derivation
pub const MIN_SALT_LEN: usize = 16;

/// Separator joining the salt and the ordered context labels
pub const CONTEXT_SEPARATOR: &str = "::";

/// scrypt cost parameter log2(N); N = 32768
// ~0.1s and 32 MiB per derivation on modern hardware
pub const SCRYPT_LOG_N: u8 = 15;

/// scrypt block size parameter
pub const SCRYPT_R: u32 = 8;

/// scrypt parallelism parameter
pub const SCRYPT_P: u32 = 1;
