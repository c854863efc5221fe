//! `roundhash` — salted, multi-round hashing for application code.
//!
//! Binds the primitives of `roundhash-core` to application configuration:
//! an embedding application hands a [`ConfigSource`] to [`Hashing::bind`]
//! (typically once at startup) and then shares the service for any number
//! of [`Hashing::hash_value`] / [`Hashing::check_value`] calls.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;
pub mod service;

pub use config::{
    load_config_file, resolve, ConfigSource, ConfigStack, EnvConfig, METHOD_KEY, ROUNDS_KEY,
};
pub use error::ConfigError;
pub use roundhash_core::{available_algorithms, HashAlgorithm, HashParams, HashingError, Rounds};
pub use service::Hashing;
