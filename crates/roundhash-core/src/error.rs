//! Error types for `roundhash-core`.

use thiserror::Error;

/// Errors produced while validating hashing parameters.
///
/// Hashing and verification themselves never fail once parameters are
/// valid; every variant here is raised at configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashingError {
    /// The configured algorithm name is not in the registry.
    #[error("{name} not one of {}", available.join(", "))]
    InvalidAlgorithm {
        /// The rejected name, rendered as configured.
        name: String,
        /// Every name the registry accepts.
        available: Vec<&'static str>,
    },

    /// The configured round count is not an integer.
    #[error("HASHING_ROUNDS must be an integer, found {found}")]
    InvalidRoundsType {
        /// Kind of value that was supplied (`string`, `float`, `bool`, ...).
        found: String,
    },

    /// The configured round count is an integer but not a usable positive count.
    #[error("HASHING_ROUNDS out of range: {0}")]
    InvalidRounds(String),
}

impl HashingError {
    /// Build an `InvalidAlgorithm` error listing the full registry.
    #[must_use]
    pub fn invalid_algorithm(name: impl Into<String>) -> Self {
        Self::InvalidAlgorithm {
            name: name.into(),
            available: crate::algorithm::available_algorithms(),
        }
    }
}
