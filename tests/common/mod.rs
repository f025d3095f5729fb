//! Shared test utilities for configuration integration tests.
//!
//! - Temporary deployment directories with a `config/config.ini`
//! - Scoped environment overrides
//! - The list of environment variables the precomputed bindings read

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every environment variable a `Settings` binding reads.
pub const BINDING_ENV_VARS: &[&str] = &[
    "APP_APP_NAME",
    "APP_APP_PORT",
    "APP_APP_DEBUG",
    "APP_SERVER_HOST",
    "APP_SERVER_LOG_PATH",
    "APP_SERVER_CONTAINER_LOG_PATH",
    "APP_DOCKER_IMAGE_NAME",
    "APP_DOCKER_CONTAINER_NAME",
];

/// Remove all binding overrides from the process environment.
pub fn clear_binding_env() {
    for var in BINDING_ENV_VARS {
        std::env::remove_var(var);
    }
}

/// Sets an environment variable for the lifetime of the guard.
pub struct EnvGuard {
    key: String,
    previous: Option<std::ffi::OsString>,
}

impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let previous = std::env::var_os(key);
        std::env::set_var(key, value);
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(v) => std::env::set_var(&self.key, v),
            None => std::env::remove_var(&self.key),
        }
    }
}

/// Working directory laid out the way a deployed container sees it:
/// `<root>/config/config.ini`.
pub struct DeployDir {
    root: TempDir,
}

impl DeployDir {
    pub fn with_config(content: &str) -> Self {
        let dir = Self::empty();
        write_file(&dir.config_file(), content);
        dir
    }

    pub fn empty() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn config_file(&self) -> PathBuf {
        self.path().join("config").join("config.ini")
    }
}

pub fn write_file(path: &Path, content: &str) {
    write_bytes(path, content.as_bytes());
}

pub fn write_bytes(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, content).expect("write config file");
}
