// tests/digest_tests.rs
use std::str::FromStr;

use field_cipher::{digest_hex, hash, CryptoError, HashAlgorithm};

#[test]
fn test_sha256_known_vector() {
    let hex = hash(Some(HashAlgorithm::Sha256))
        .from_string("Hello World")
        .unwrap();
    assert_eq!(
        hex,
        "a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e"
    );
}

#[test]
fn test_md5_known_vector() {
    let hex = hash(Some(HashAlgorithm::Md5))
        .from_string("Hello World")
        .unwrap();
    assert_eq!(hex, "b10a8db164e0754105b7a99be72e3fe5");
}

#[test]
fn test_default_algorithm_is_sha512() {
    let defaulted = hash(None).from_string("payload").unwrap();
    assert_eq!(defaulted, digest_hex(HashAlgorithm::Sha512, "payload"));
    assert_eq!(defaulted.len(), 128);
}

#[test]
fn test_digest_lengths_per_algorithm() {
    let cases = [
        (HashAlgorithm::Sha1, 40),
        (HashAlgorithm::Sha256, 64),
        (HashAlgorithm::Sha384, 96),
        (HashAlgorithm::Sha512, 128),
        (HashAlgorithm::Md5, 32),
        (HashAlgorithm::Ripemd160, 40),
    ];
    for (algorithm, expected_len) in cases {
        let hex = digest_hex(algorithm, "payload");
        assert_eq!(hex.len(), expected_len, "length mismatch for {algorithm}");
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

#[test]
fn test_digest_is_deterministic() {
    assert_eq!(
        digest_hex(HashAlgorithm::Ripemd160, "stable input"),
        digest_hex(HashAlgorithm::Ripemd160, "stable input"),
    );
}

#[test]
fn test_algorithm_name_parse_roundtrip() {
    let all = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Md5,
        HashAlgorithm::Ripemd160,
    ];
    for algorithm in all {
        assert_eq!(HashAlgorithm::from_str(algorithm.name()).unwrap(), algorithm);
    }
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let result = HashAlgorithm::from_str("blake3");
    assert!(matches!(result, Err(CryptoError::HashFailed { .. })));
}
