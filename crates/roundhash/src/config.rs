//! Configuration sources for the hashing service.
//!
//! The embedding application owns its configuration; this module only
//! needs a key lookup over it. Two keys are read:
//!
//! | Key              | Type    | Default    |
//! |------------------|---------|------------|
//! | `HASHING_METHOD` | string  | `"sha256"` |
//! | `HASHING_ROUNDS` | integer | `1`        |
//!
//! Values are `serde_json::Value`s so a source can report exactly what it
//! holds and [`resolve`] can reject values of the wrong kind.

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fs;
use std::hash::BuildHasher;
use std::path::Path;

use roundhash_core::{HashParams, HashingError, Rounds, DEFAULT_ALGORITHM};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Key naming the hash algorithm.
pub const METHOD_KEY: &str = "HASHING_METHOD";

/// Key naming the round count.
pub const ROUNDS_KEY: &str = "HASHING_ROUNDS";

/// Prefix shared by every key this crate reads.
const KEY_PREFIX: &str = "HASHING_";

// ── Sources ─────────────────────────────────────────────────────────

/// A mapping from configuration keys to values.
pub trait ConfigSource {
    /// Return the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<Value>;
}

impl<S: BuildHasher> ConfigSource for HashMap<String, Value, S> {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, Value> {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl ConfigSource for Map<String, Value> {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// Only JSON objects hold keys; any other value behaves as an empty mapping.
impl ConfigSource for Value {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(key).cloned())
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn lookup(&self, key: &str) -> Option<Value> {
        (**self).lookup(key)
    }
}

/// Snapshot of `HASHING_*` environment variables.
///
/// Values that parse as a base-10 integer are surfaced as JSON integers,
/// everything else as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    vars: BTreeMap<String, String>,
}

impl EnvConfig {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(k, v): (OsString, OsString)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    /// Build from explicit name/value pairs. Names outside `HASHING_*` are ignored.
    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(KEY_PREFIX))
            .collect();
        Self { vars }
    }

    /// Whether no `HASHING_*` variable was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl ConfigSource for EnvConfig {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.vars.get(key).map(|raw| {
            raw.parse::<i64>()
                .map_or_else(|_| Value::String(raw.clone()), Value::from)
        })
    }
}

/// Several sources consulted in order; later layers override earlier ones.
///
/// The usual stack is file configuration first, environment last.
#[derive(Default)]
pub struct ConfigStack<'a> {
    layers: Vec<&'a dyn ConfigSource>,
}

impl<'a> ConfigStack<'a> {
    /// An empty stack (every key absent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer on top of the existing ones.
    #[must_use]
    pub fn with_layer(mut self, layer: &'a dyn ConfigSource) -> Self {
        self.layers.push(layer);
        self
    }
}

impl ConfigSource for ConfigStack<'_> {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.layers.iter().rev().find_map(|layer| layer.lookup(key))
    }
}

// ── Resolution ──────────────────────────────────────────────────────

/// Read and validate hashing parameters from `source`.
///
/// The algorithm is validated before the round count. Absent keys take
/// their defaults; a present key holding `null` is invalid, not absent.
/// Booleans are not integers here: `HASHING_ROUNDS = true` is rejected
/// with `InvalidRoundsType` rather than read as one round.
///
/// # Errors
/// - `HashingError::InvalidAlgorithm` if `HASHING_METHOD` is not a string
///   naming a registry algorithm.
/// - `HashingError::InvalidRoundsType` if `HASHING_ROUNDS` is not an integer.
/// - `HashingError::InvalidRounds` if `HASHING_ROUNDS` is an integer outside
///   `1..=u32::MAX`.
pub fn resolve<C: ConfigSource + ?Sized>(source: &C) -> Result<HashParams, HashingError> {
    let algorithm = match source.lookup(METHOD_KEY) {
        None => DEFAULT_ALGORITHM,
        Some(Value::String(name)) => name.parse()?,
        Some(other) => return Err(HashingError::invalid_algorithm(other.to_string())),
    };

    let rounds = match source.lookup(ROUNDS_KEY) {
        None => Rounds::DEFAULT,
        Some(value) => rounds_from_value(&value)?,
    };

    Ok(HashParams::new(algorithm, rounds))
}

fn rounds_from_value(value: &Value) -> Result<Rounds, HashingError> {
    match value {
        Value::Number(n) => {
            if let Some(count) = n.as_i64() {
                Rounds::from_i64(count)
            } else if n.is_u64() {
                Err(HashingError::InvalidRounds(format!(
                    "{n} (must be between 1 and {})",
                    u32::MAX
                )))
            } else {
                Err(HashingError::InvalidRoundsType {
                    found: "float".to_owned(),
                })
            }
        }
        other => Err(HashingError::InvalidRoundsType {
            found: value_kind(other).to_owned(),
        }),
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── File I/O ────────────────────────────────────────────────────────

/// Load a configuration mapping from a JSON object file.
///
/// Keys other than `HASHING_*` are kept; the service ignores them.
///
/// # Errors
/// Returns `ConfigError::Io` if the file cannot be read,
/// `ConfigError::Parse` if it is not JSON, and `ConfigError::NotAnObject`
/// if the top-level value is not an object.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<Map<String, Value>, ConfigError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: shown.clone(),
        source,
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: shown.clone(),
        source,
    })?;

    match value {
        Value::Object(map) => {
            tracing::debug!(path = %shown, keys = map.len(), "loaded hashing config file");
            Ok(map)
        }
        _ => Err(ConfigError::NotAnObject(shown)),
    }
}

// ── Tests ───────────────────────────────────────────────────────────
