// src/core/mod.rs
pub mod aead;
pub mod digest;
pub mod envelope;
pub mod kdf;
pub mod paths;
pub mod transform;

pub use aead::*;
pub use digest::*;
pub use envelope::*;
pub use kdf::*;
pub use paths::*;
pub use transform::*;

pub type Result<T> = std::result::Result<T, crate::error::CryptoError>;
