//! `roundhash-core` — salted, multi-round hashing primitives.
//!
//! Pure computation: no I/O, no logging, no global state. Configuration
//! binding and the application-facing service live in the `roundhash`
//! crate.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod algorithm;
pub mod streaming;

pub mod params;

pub mod iterated;

pub use algorithm::{available_algorithms, is_available, HashAlgorithm, DEFAULT_ALGORITHM};
pub use error::HashingError;
pub use iterated::{hash_iterated, verify_iterated};
pub use params::{HashParams, Rounds};
pub use streaming::{constant_time_eq, StreamingDigest};
