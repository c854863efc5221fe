//! Salted, iterated hashing and verification.
//!
//! One round digests `salt || input` and renders the result as lowercase
//! hex. Each following round feeds the previous round's hex text back in
//! as the input, with the same salt prefixed again. The salt is applied on
//! every round, not only the first; stored hashes depend on this.

use zeroize::Zeroizing;

use crate::params::HashParams;
use crate::streaming::constant_time_eq;

fn hash_round(params: &HashParams, input: &[u8], salt: &[u8]) -> Zeroizing<String> {
    let mut digest = params.algorithm().new_digest();
    digest.update(salt);
    digest.update(input);
    Zeroizing::new(digest.finish_hex())
}

/// Hash `value` with `salt` under `params`, returning lowercase hex.
///
/// Intermediate round outputs are wiped as soon as the next round has
/// consumed them.
#[must_use = "the computed hash should be stored or compared"]
pub fn hash_iterated(params: &HashParams, value: &[u8], salt: &[u8]) -> String {
    let mut current = hash_round(params, value, salt);
    for _ in 1..params.rounds().get() {
        current = hash_round(params, current.as_bytes(), salt);
    }
    current.as_str().to_owned()
}

/// Recompute the hash of `value`/`salt` and compare it with `expected`.
///
/// Never fails: a wrong value, wrong salt, malformed or truncated
/// `expected` all yield `false`.
#[must_use = "verification result should be checked"]
pub fn verify_iterated(params: &HashParams, expected: &str, value: &[u8], salt: &[u8]) -> bool {
    let computed = Zeroizing::new(hash_iterated(params, value, salt));
    constant_time_eq(computed.as_bytes(), expected.as_bytes())
}
