// tests/kdf_tests.rs
use field_cipher::{derive_key, key_representations, Config, CryptoError, RevealSecret, ToHex};

#[test]
fn test_derive_key_is_deterministic() {
    let config = Config::new("s".repeat(32), "t".repeat(16), vec!["a".into(), "b".into()]);
    let first = derive_key(&config).unwrap();
    let second = derive_key(&config).unwrap();
    assert_eq!(first.expose_secret(), second.expose_secret());
}

#[test]
fn test_context_order_changes_key() {
    let forward = Config::new("s".repeat(32), "t".repeat(16), vec!["a".into(), "b".into()]);
    let reversed = Config::new("s".repeat(32), "t".repeat(16), vec!["b".into(), "a".into()]);

    let key_forward = derive_key(&forward).unwrap();
    let key_reversed = derive_key(&reversed).unwrap();
    assert_ne!(key_forward.expose_secret(), key_reversed.expose_secret());
}

#[test]
fn test_different_salt_changes_key() {
    let one = Config::new("s".repeat(32), "t".repeat(16), vec![]);
    let two = Config::new("s".repeat(32), "u".repeat(16), vec![]);

    let key_one = derive_key(&one).unwrap();
    let key_two = derive_key(&two).unwrap();
    assert_ne!(key_one.expose_secret(), key_two.expose_secret());
}

#[test]
fn test_empty_context_is_valid() {
    let config = Config::new("s".repeat(32), "t".repeat(16), vec![]);
    derive_key(&config).unwrap();
}

#[test]
fn test_short_secret_is_rejected() {
    let config = Config::new("too short", "t".repeat(16), vec![]);
    let result = derive_key(&config);
    assert!(matches!(result, Err(CryptoError::Config { .. })));
}

#[test]
fn test_short_salt_is_rejected() {
    let config = Config::new("s".repeat(32), "salty", vec![]);
    let result = derive_key(&config);
    assert!(matches!(result, Err(CryptoError::Config { .. })));
}

#[test]
fn test_key_representations_are_consistent() {
    let config = Config::new("s".repeat(32), "t".repeat(16), vec!["repr".into()]);
    let key = derive_key(&config).unwrap();

    let repr = key_representations(&key);
    assert_eq!(repr.hex.len(), 64);
    assert_eq!(repr.hex, key.expose_secret().to_hex());
    assert!(!repr.base64.is_empty());
    assert!(!repr.base64url_no_pad.contains('='));
}
