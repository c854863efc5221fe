//! Streaming digest objects produced by the algorithm registry.
//!
//! [`StreamingDigest`] accepts any number of byte-string updates and
//! yields either the raw digest or its lowercase hex rendering. Each
//! algorithm is routed to one backend: `ring::digest` for the SHA-1/SHA-2
//! functions it ships, RustCrypto hashers through [`digest::DynDigest`]
//! for the rest, and `blake3` for BLAKE3.

use core::fmt;

use data_encoding::HEXLOWER;
use digest::DynDigest;
use ring::digest as ring_digest;

use crate::algorithm::HashAlgorithm;

enum Backend {
    Ring(ring_digest::Context),
    RustCrypto(Box<dyn DynDigest>),
    Blake3(Box<blake3::Hasher>),
}

/// Incremental hashing context for one [`HashAlgorithm`].
pub struct StreamingDigest {
    algorithm: HashAlgorithm,
    backend: Backend,
}

impl StreamingDigest {
    /// Create an empty digest context.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let backend = match algorithm {
            HashAlgorithm::Sha1 => {
                Backend::Ring(ring_digest::Context::new(&ring_digest::SHA1_FOR_LEGACY_USE_ONLY))
            }
            HashAlgorithm::Sha256 => Backend::Ring(ring_digest::Context::new(&ring_digest::SHA256)),
            HashAlgorithm::Sha384 => Backend::Ring(ring_digest::Context::new(&ring_digest::SHA384)),
            HashAlgorithm::Sha512 => Backend::Ring(ring_digest::Context::new(&ring_digest::SHA512)),
            HashAlgorithm::Sha512_256 => {
                Backend::Ring(ring_digest::Context::new(&ring_digest::SHA512_256))
            }
            HashAlgorithm::Md5 => Backend::RustCrypto(Box::new(md5::Md5::default())),
            HashAlgorithm::Sha224 => Backend::RustCrypto(Box::new(sha2::Sha224::default())),
            HashAlgorithm::Sha512_224 => Backend::RustCrypto(Box::new(sha2::Sha512_224::default())),
            HashAlgorithm::Sha3_224 => Backend::RustCrypto(Box::new(sha3::Sha3_224::default())),
            HashAlgorithm::Sha3_256 => Backend::RustCrypto(Box::new(sha3::Sha3_256::default())),
            HashAlgorithm::Sha3_384 => Backend::RustCrypto(Box::new(sha3::Sha3_384::default())),
            HashAlgorithm::Sha3_512 => Backend::RustCrypto(Box::new(sha3::Sha3_512::default())),
            HashAlgorithm::Blake2b => Backend::RustCrypto(Box::new(blake2::Blake2b512::default())),
            HashAlgorithm::Blake2s => Backend::RustCrypto(Box::new(blake2::Blake2s256::default())),
            HashAlgorithm::Blake3 => Backend::Blake3(Box::new(blake3::Hasher::new())),
        };
        Self { algorithm, backend }
    }

    /// The algorithm this context computes.
    #[must_use]
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Feed more bytes into the digest.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.backend {
            Backend::Ring(ctx) => ctx.update(data),
            Backend::RustCrypto(hasher) => hasher.update(data),
            Backend::Blake3(hasher) => {
                hasher.update(data);
            }
        }
    }

    /// Consume the context and return the raw digest bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        match self.backend {
            Backend::Ring(ctx) => ctx.finish().as_ref().to_vec(),
            Backend::RustCrypto(hasher) => hasher.finalize().into_vec(),
            Backend::Blake3(hasher) => hasher.finalize().as_bytes().to_vec(),
        }
    }

    /// Consume the context and return the digest as lowercase hex.
    #[must_use]
    pub fn finish_hex(self) -> String {
        HEXLOWER.encode(&self.finish())
    }
}

impl fmt::Debug for StreamingDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingDigest")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Constant-time byte comparison for digest strings.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Length mismatch returns early: the length of a hex digest is determined
/// by the public algorithm choice, only its content is protected.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
