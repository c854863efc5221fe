#![allow(clippy::unwrap_used)]

//! Snapshots of the registry listing and configuration error messages.

use roundhash_core::{available_algorithms, HashAlgorithm, HashingError, Rounds};

#[test]
fn available_algorithm_listing() {
    insta::assert_snapshot!(
        available_algorithms().join(","),
        @"md5,sha1,sha224,sha256,sha384,sha512,sha512_224,sha512_256,sha3_224,sha3_256,sha3_384,sha3_512,blake2b,blake2s,blake3"
    );
}

#[test]
fn invalid_algorithm_message_lists_registry() {
    let err = "whirlpool".parse::<HashAlgorithm>().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"whirlpool not one of md5, sha1, sha224, sha256, sha384, sha512, sha512_224, sha512_256, sha3_224, sha3_256, sha3_384, sha3_512, blake2b, blake2s, blake3"
    );
}

#[test]
fn rounds_error_messages() {
    let err = HashingError::InvalidRoundsType {
        found: "string".to_owned(),
    };
    insta::assert_snapshot!(err.to_string(), @"HASHING_ROUNDS must be an integer, found string");

    let err = Rounds::new(0).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"HASHING_ROUNDS out of range: 0 (must be at least 1)");
}
