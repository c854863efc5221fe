//! Validated hashing parameters.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::algorithm::HashAlgorithm;
use crate::error::HashingError;

/// Number of times the configured algorithm is applied. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rounds(NonZeroU32);

impl Rounds {
    /// A single application of the hash.
    pub const DEFAULT: Self = Self(NonZeroU32::MIN);

    /// Validate a round count.
    ///
    /// # Errors
    /// Returns `HashingError::InvalidRounds` if `count` is 0.
    pub fn new(count: u32) -> Result<Self, HashingError> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or_else(|| HashingError::InvalidRounds("0 (must be at least 1)".to_owned()))
    }

    /// Validate a signed round count as read from configuration.
    ///
    /// # Errors
    /// Returns `HashingError::InvalidRounds` if `count` is not in `1..=u32::MAX`.
    pub fn from_i64(count: i64) -> Result<Self, HashingError> {
        let count = u32::try_from(count).map_err(|_| {
            HashingError::InvalidRounds(format!("{count} (must be between 1 and {})", u32::MAX))
        })?;
        Self::new(count)
    }

    /// The count as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Rounds {
    type Error = HashingError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Rounds> for u32 {
    fn from(rounds: Rounds) -> Self {
        rounds.get()
    }
}

impl fmt::Display for Rounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Algorithm and round count, validated together.
///
/// Immutable once built. Fields are private so a `HashParams` can only
/// exist in a valid state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashParams {
    algorithm: HashAlgorithm,
    rounds: Rounds,
}

impl HashParams {
    /// Combine an algorithm with a round count.
    #[must_use]
    pub const fn new(algorithm: HashAlgorithm, rounds: Rounds) -> Self {
        Self { algorithm, rounds }
    }

    /// Configured hash algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Configured round count.
    #[must_use]
    pub const fn rounds(&self) -> Rounds {
        self.rounds
    }
}
