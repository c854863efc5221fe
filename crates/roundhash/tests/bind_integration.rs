#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! End-to-end tests: configure a service the way an application would,
//! then hash and verify through it.

use std::fs;

use roundhash::{
    load_config_file, ConfigError, ConfigStack, EnvConfig, HashAlgorithm, Hashing, HashingError,
};
use serde_json::{json, Map, Value};
use tempfile::TempDir;

const VALUE: &str = "somethingsecret";
const SALT: &str = "abcd";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Application config starting from `HASHING_METHOD = sha256`.
fn app_config() -> Map<String, Value> {
    let mut config = Map::new();
    config.insert("HASHING_METHOD".to_owned(), json!("sha256"));
    config
}

fn assert_hash_capability(hashing: &Hashing) -> String {
    let stored = hashing.hash_value(VALUE, SALT);
    assert!(hashing.check_value(&stored, VALUE, SALT));
    assert!(!hashing.check_value(&stored, VALUE, "efgh"));
    assert!(!hashing.check_value(&stored, &format!("{VALUE}poop"), SALT));
    stored
}

#[test]
fn sha256_single_round() {
    init_tracing();
    let hashing = Hashing::with_config(&app_config()).unwrap();
    let stored = assert_hash_capability(&hashing);
    assert_eq!(
        stored,
        "9276a1816de510e49f09bda3139c546beec1f9ade08a877e34ba346e4e042e50"
    );
}

#[test]
fn multiple_rounds() {
    init_tracing();
    let single = Hashing::with_config(&app_config()).unwrap();

    let mut config = app_config();
    config.insert("HASHING_ROUNDS".to_owned(), json!(5));
    let hashing = Hashing::with_config(&config).unwrap();

    let stored = assert_hash_capability(&hashing);
    assert_ne!(stored, single.hash_value(VALUE, SALT));
    assert_eq!(
        stored,
        "d59cdcc9043991fe2d7c7b36d30cbed85ff40fb843cdefddfb316cd3bfeef0da"
    );
}

#[test]
fn different_algorithm() {
    init_tracing();
    let mut config = app_config();
    config.insert("HASHING_METHOD".to_owned(), json!("md5"));
    let hashing = Hashing::with_config(&config).unwrap();

    let stored = assert_hash_capability(&hashing);
    assert_eq!(stored.len(), 32);
    assert_eq!(hashing.algorithm(), HashAlgorithm::Md5);
}

#[test]
fn every_registry_algorithm_round_trips() {
    for alg in HashAlgorithm::ALL {
        let config = json!({"HASHING_METHOD": alg.name(), "HASHING_ROUNDS": 3});
        let hashing = Hashing::with_config(&config).unwrap();
        let stored = assert_hash_capability(&hashing);
        assert_eq!(stored.len(), alg.hex_len(), "{alg}");
    }
}

#[test]
fn rounds_not_int() {
    init_tracing();
    let mut config = app_config();
    config.insert("HASHING_ROUNDS".to_owned(), json!("notanint"));
    let err = Hashing::new().bind(&config).unwrap_err();
    assert!(
        matches!(err, HashingError::InvalidRoundsType { .. }),
        "got {err:?}"
    );
}

#[test]
fn algorithm_not_valid() {
    init_tracing();
    let mut config = app_config();
    config.insert("HASHING_METHOD".to_owned(), json!("notahashalgorithm"));
    let err = Hashing::new().bind(&config).unwrap_err();
    match err {
        HashingError::InvalidAlgorithm { name, available } => {
            assert_eq!(name, "notahashalgorithm");
            assert!(available.contains(&"sha256"));
        }
        other => panic!("expected InvalidAlgorithm, got {other:?}"),
    }
}

#[test]
fn default_construction_matches_empty_config() {
    let unbound = Hashing::new();
    let empty = Hashing::with_config(&Map::new()).unwrap();
    assert_eq!(unbound.params(), empty.params());
    assert_eq!(unbound.hash_value(VALUE, SALT), empty.hash_value(VALUE, SALT));
}

#[test]
fn file_then_env_configuration() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.json");
    fs::write(
        &path,
        r#"{"SECRET_KEY": "dev", "HASHING_METHOD": "sha512", "HASHING_ROUNDS": 2}"#,
    )
    .unwrap();

    let file = load_config_file(&path).unwrap();
    let env = EnvConfig::from_vars([("HASHING_ROUNDS", "4")]);
    let stack = ConfigStack::new().with_layer(&file).with_layer(&env);

    let hashing = Hashing::with_config(&stack).unwrap();
    assert_eq!(hashing.algorithm(), HashAlgorithm::Sha512);
    assert_eq!(hashing.rounds().get(), 4);
    assert_hash_capability(&hashing);
}

#[test]
fn invalid_file_values_surface_as_config_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.json");
    fs::write(&path, r#"{"HASHING_ROUNDS": 1.5}"#).unwrap();

    let load_and_bind = || -> Result<Hashing, ConfigError> {
        let file = load_config_file(&path)?;
        Ok(Hashing::with_config(&file)?)
    };
    assert!(matches!(
        load_and_bind(),
        Err(ConfigError::Hashing(HashingError::InvalidRoundsType { .. }))
    ));
}

#[test]
fn stored_hash_survives_rebinding_to_same_config() {
    let config = json!({"HASHING_METHOD": "sha224", "HASHING_ROUNDS": 3});
    let mut hashing = Hashing::with_config(&config).unwrap();
    let stored = hashing.hash_value(VALUE, SALT);

    hashing.bind(&json!({"HASHING_METHOD": "sha1"})).unwrap();
    assert!(!hashing.check_value(&stored, VALUE, SALT));

    hashing.bind(&config).unwrap();
    assert!(hashing.check_value(&stored, VALUE, SALT));
}
