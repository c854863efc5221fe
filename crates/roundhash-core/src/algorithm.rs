//! Registry of hash algorithms available to the hashing service.
//!
//! The registry is closed and statically linked: every variant of
//! [`HashAlgorithm`] is backed by a digest implementation compiled into
//! this crate (`ring` where it has one, RustCrypto or `blake3` otherwise).
//! Configuration refers to algorithms by their canonical lowercase name.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HashingError;
use crate::streaming::StreamingDigest;

/// Algorithm used when configuration does not name one.
pub const DEFAULT_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha256;

/// A hash function known to the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// MD5 (legacy, collision-broken).
    #[serde(rename = "md5")]
    Md5,
    /// SHA-1 (legacy, collision-broken).
    #[serde(rename = "sha1")]
    Sha1,
    /// SHA-224.
    #[serde(rename = "sha224")]
    Sha224,
    /// SHA-256.
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA-384.
    #[serde(rename = "sha384")]
    Sha384,
    /// SHA-512.
    #[serde(rename = "sha512")]
    Sha512,
    /// SHA-512/224.
    #[serde(rename = "sha512_224")]
    Sha512_224,
    /// SHA-512/256.
    #[serde(rename = "sha512_256")]
    Sha512_256,
    /// SHA3-224.
    #[serde(rename = "sha3_224")]
    Sha3_224,
    /// SHA3-256.
    #[serde(rename = "sha3_256")]
    Sha3_256,
    /// SHA3-384.
    #[serde(rename = "sha3_384")]
    Sha3_384,
    /// SHA3-512.
    #[serde(rename = "sha3_512")]
    Sha3_512,
    /// BLAKE2b with a 512-bit digest.
    #[serde(rename = "blake2b")]
    Blake2b,
    /// BLAKE2s with a 256-bit digest.
    #[serde(rename = "blake2s")]
    Blake2s,
    /// BLAKE3 with the default 256-bit output.
    #[serde(rename = "blake3")]
    Blake3,
}

impl HashAlgorithm {
    /// Every algorithm in the registry, in listing order.
    pub const ALL: [Self; 15] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_224,
        Self::Sha512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Blake2b,
        Self::Blake2s,
        Self::Blake3,
    ];

    /// The algorithms every deployment is guaranteed to have.
    pub const GUARANTEED: [Self; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Canonical configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha512_224 => "sha512_224",
            Self::Sha512_256 => "sha512_256",
            Self::Sha3_224 => "sha3_224",
            Self::Sha3_256 => "sha3_256",
            Self::Sha3_384 => "sha3_384",
            Self::Sha3_512 => "sha3_512",
            Self::Blake2b => "blake2b",
            Self::Blake2s => "blake2s",
            Self::Blake3 => "blake3",
        }
    }

    /// Digest size in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha512_224 | Self::Sha3_224 => 28,
            Self::Sha256 | Self::Sha512_256 | Self::Sha3_256 | Self::Blake2s | Self::Blake3 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b => 64,
        }
    }

    /// Length of the lowercase hex rendering of a digest.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)] // output_len() is at most 64
    pub const fn hex_len(self) -> usize {
        self.output_len() * 2
    }

    /// Whether this algorithm belongs to the guaranteed set.
    #[must_use]
    pub fn is_guaranteed(self) -> bool {
        Self::GUARANTEED.contains(&self)
    }

    /// Start a fresh streaming digest for this algorithm.
    #[must_use]
    pub fn new_digest(self) -> StreamingDigest {
        StreamingDigest::new(self)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| HashingError::invalid_algorithm(s))
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        DEFAULT_ALGORITHM
    }
}

/// Names of every algorithm in the registry.
#[must_use]
pub fn available_algorithms() -> Vec<&'static str> {
    HashAlgorithm::ALL.iter().map(|alg| alg.name()).collect()
}

/// Whether `name` is a registry member. Matching is exact.
#[must_use]
pub fn is_available(name: &str) -> bool {
    HashAlgorithm::ALL.iter().any(|alg| alg.name() == name)
}
