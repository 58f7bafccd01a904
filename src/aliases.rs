// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical key types used throughout field-cipher.

pub use secure_gate::{fixed_alias, RevealSecret, ToHex};

// Fixed-size secrets
fixed_alias!(pub DerivedKey32, 32); // 256-bit AES-GCM field key
