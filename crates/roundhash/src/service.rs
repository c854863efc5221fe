//! The hashing service handed to application code.

use roundhash_core::{
    hash_iterated, verify_iterated, HashAlgorithm, HashParams, HashingError, Rounds,
};

use crate::config::{resolve, ConfigSource};

/// Salted, multi-round hashing bound to application configuration.
///
/// A fresh `Hashing` is unbound and uses the defaults (`sha256`, 1 round).
/// [`bind`](Self::bind) reads `HASHING_METHOD` and `HASHING_ROUNDS` from a
/// [`ConfigSource`], validates both, and replaces the current parameters.
///
/// ```
/// use roundhash::Hashing;
/// use serde_json::json;
///
/// let hashing = Hashing::with_config(&json!({"HASHING_METHOD": "sha256"}))?;
/// let stored = hashing.hash_value("mysecretdata", "abcd");
/// assert!(hashing.check_value(&stored, "mysecretdata", "abcd"));
/// assert!(!hashing.check_value(&stored, "mysecretdata", "efgh"));
/// # Ok::<(), roundhash::HashingError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hashing {
    params: HashParams,
    bound: bool,
}

impl Hashing {
    /// An unbound service using the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a service and bind it to `config` in one step.
    ///
    /// # Errors
    /// Propagates the validation errors of [`bind`](Self::bind).
    pub fn with_config<C: ConfigSource + ?Sized>(config: &C) -> Result<Self, HashingError> {
        let mut hashing = Self::new();
        hashing.bind(config)?;
        Ok(hashing)
    }

    /// A bound service using already-validated parameters.
    #[must_use]
    pub const fn with_params(params: HashParams) -> Self {
        Self {
            params,
            bound: true,
        }
    }

    /// Read, validate and store the hashing configuration.
    ///
    /// May be called again to re-bind. On error the current parameters
    /// are left untouched.
    ///
    /// # Errors
    /// - `HashingError::InvalidAlgorithm` if `HASHING_METHOD` is not in the registry.
    /// - `HashingError::InvalidRoundsType` if `HASHING_ROUNDS` is not an integer.
    /// - `HashingError::InvalidRounds` if `HASHING_ROUNDS` is not a positive `u32`.
    pub fn bind<C: ConfigSource + ?Sized>(&mut self, config: &C) -> Result<(), HashingError> {
        let params = resolve(config).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected hashing configuration");
        })?;

        self.params = params;
        self.bound = true;
        tracing::info!(
            algorithm = %params.algorithm(),
            rounds = params.rounds().get(),
            "hashing configuration bound"
        );
        Ok(())
    }

    /// Hash `value` salted with `salt`, returning lowercase hex.
    ///
    /// Text is hashed as its UTF-8 bytes. Each round digests `salt + input`.
    #[must_use = "the computed hash should be stored or compared"]
    pub fn hash_value(&self, value: &str, salt: &str) -> String {
        self.hash_bytes(value.as_bytes(), salt.as_bytes())
    }

    /// Byte-oriented form of [`hash_value`](Self::hash_value).
    #[must_use = "the computed hash should be stored or compared"]
    pub fn hash_bytes(&self, value: &[u8], salt: &[u8]) -> String {
        hash_iterated(&self.params, value, salt)
    }

    /// Whether `expected_hash` is the hash of `value` salted with `salt`.
    ///
    /// Any mismatch (value, salt, length, case) yields `false`.
    #[must_use = "verification result should be checked"]
    pub fn check_value(&self, expected_hash: &str, value: &str, salt: &str) -> bool {
        self.check_bytes(expected_hash, value.as_bytes(), salt.as_bytes())
    }

    /// Byte-oriented form of [`check_value`](Self::check_value).
    #[must_use = "verification result should be checked"]
    pub fn check_bytes(&self, expected_hash: &str, value: &[u8], salt: &[u8]) -> bool {
        verify_iterated(&self.params, expected_hash, value, salt)
    }

    /// Configured algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.params.algorithm()
    }

    /// Configured round count.
    #[must_use]
    pub const fn rounds(&self) -> Rounds {
        self.params.rounds()
    }

    /// Configured parameters.
    #[must_use]
    pub const fn params(&self) -> HashParams {
        self.params
    }

    /// Whether a configuration has been bound successfully.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.bound
    }
}
