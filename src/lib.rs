//! Echo Deploy Config Library
//!
//! Resolves deployment settings for the flask-echo frontend image from
//! environment variables, an optional `config.ini`, and compiled-in defaults.
//!
//! # Modules
//!
//! - `config`: INI store, file discovery, layered resolver and precomputed settings
//! - `logging`: `tracing` subscriber setup for the `echo-config` binary

pub mod config;
pub mod logging;

// Re-export config types
pub use config::{
    ConfigError, ConfigLoader, ConfigResult, ConfigStore, ConfigValue, Resolver, Settings,
};
