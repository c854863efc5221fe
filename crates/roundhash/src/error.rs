//! Error types for `roundhash`.

use roundhash_core::HashingError;
use thiserror::Error;

/// Errors produced while loading configuration from outside the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration values were read but failed validation.
    #[error(transparent)]
    Hashing(#[from] HashingError),

    /// Configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON.
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: String,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file holds JSON that is not an object.
    #[error("config file {0} must contain a JSON object")]
    NotAnObject(String),
}
