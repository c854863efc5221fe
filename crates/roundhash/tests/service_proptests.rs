#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the configured hashing service.

use proptest::prelude::*;
use roundhash::{HashAlgorithm, Hashing};
use serde_json::json;

fn bound_service() -> impl Strategy<Value = Hashing> {
    (proptest::sample::select(HashAlgorithm::ALL.to_vec()), 1i64..6).prop_map(|(alg, rounds)| {
        Hashing::with_config(&json!({
            "HASHING_METHOD": alg.name(),
            "HASHING_ROUNDS": rounds,
        }))
        .unwrap()
    })
}

proptest! {
    /// Binding then hashing then checking always succeeds.
    #[test]
    fn bound_round_trip(hashing in bound_service(), value in ".*", salt in ".*") {
        let stored = hashing.hash_value(&value, &salt);
        prop_assert!(hashing.check_value(&stored, &value, &salt));
    }

    /// Arbitrary strings never verify and never panic.
    #[test]
    fn garbage_hashes_are_rejected(hashing in bound_service(), garbage in ".{0,130}") {
        let stored = hashing.hash_value("value", "salt");
        prop_assume!(garbage != stored);
        prop_assert!(!hashing.check_value(&garbage, "value", "salt"));
    }

    /// Integer round counts in range always bind.
    #[test]
    fn any_positive_rounds_bind(rounds in 1i64..=i64::from(u32::MAX)) {
        let hashing = Hashing::with_config(&json!({"HASHING_ROUNDS": rounds})).unwrap();
        prop_assert_eq!(i64::from(hashing.rounds().get()), rounds);
    }

    /// Non-positive round counts never bind.
    #[test]
    fn non_positive_rounds_rejected(rounds in i64::MIN..=0) {
        let result = Hashing::with_config(&json!({"HASHING_ROUNDS": rounds}));
        prop_assert!(result.is_err());
    }
}
