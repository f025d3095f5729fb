//! Layered value resolution: environment, then file, then caller default.

use super::loader::ConfigLoader;
use super::store::ConfigStore;
use serde::Serialize;
use std::fmt;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "APP";

/// A resolved value.
///
/// Environment and file hits are always [`ConfigValue::Str`]; a default is
/// handed back in whatever variant the caller passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Read-only resolver over a parsed [`ConfigStore`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    loader: ConfigLoader,
}

impl Resolver {
    pub fn new(store: ConfigStore) -> Self {
        Self {
            loader: ConfigLoader::with_store(store),
        }
    }

    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self { loader }
    }

    /// Underlying file values.
    pub fn store(&self) -> &ConfigStore {
        self.loader.store()
    }

    /// File the store was read from, if any.
    pub fn source_path(&self) -> Option<&std::path::Path> {
        self.loader.config_path.as_deref()
    }

    /// Environment variable consulted for `(section, key)`: `APP_<SECTION>_<KEY>`.
    pub fn env_key(section: &str, key: &str) -> String {
        format!(
            "{}_{}_{}",
            ENV_PREFIX,
            section.to_uppercase(),
            key.to_uppercase()
        )
    }

    /// Raw lookup without a default. An environment variable set to the empty
    /// string still counts as present.
    pub fn lookup(&self, section: &str, key: &str) -> Option<String> {
        if let Some(val) = std::env::var_os(Self::env_key(section, key)) {
            return Some(val.to_string_lossy().into_owned());
        }
        self.store().get(section, key).map(str::to_string)
    }

    /// Resolve `(section, key)`, falling back to `default` unchanged.
    pub fn resolve(&self, section: &str, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        match self.lookup(section, key) {
            Some(raw) => ConfigValue::Str(raw),
            None => default.into(),
        }
    }

    pub fn get_str(&self, section: &str, key: &str, default: &str) -> String {
        self.lookup(section, key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Base-10 integer value; anything unparsable yields `default`.
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_str(section, key, &default.to_string())
            .parse()
            .unwrap_or(default)
    }

    /// Boolean value accepting `true/false`, `1/0`, `yes/no`, `on/off` in any
    /// case. Anything else yields `default`.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        parse_bool(&self.get_str(section, key, &default.to_string())).unwrap_or(default)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
