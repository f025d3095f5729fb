//! Deployment configuration for the flask-echo image.
//!
//! Every value is resolved from three layers, highest priority first:
//!
//! 1. Environment variable `APP_<SECTION>_<KEY>` (upper-cased, empty counts)
//! 2. `config.ini` file
//! 3. Caller-supplied default
//!
//! # File Resolution
//!
//! The first existing file wins:
//!
//! 1. `<directory of the running executable>/config.ini`
//! 2. `<current working directory>/config/config.ini`
//!
//! Loading fails open. A missing or unreadable file is logged as a warning and
//! the process continues on environment variables and defaults.
//!
//! # Example
//!
//! ```rust,no_run
//! use echo_deploy_config::config;
//!
//! config::initialize();
//! let settings = config::settings();
//! println!("listening on {}:{}", settings.app_host, settings.app_port);
//!
//! let workers = config::resolver().get_int("server", "workers", 4);
//! # let _ = workers;
//! ```

mod error;
mod loader;
mod resolver;
mod settings;
mod store;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    candidate_paths, discover_in, load_store, read_into, resolve_config_path, ConfigLoader,
    CONFIG_DIR_NAME, CONFIG_FILE_NAME,
};
pub use resolver::{ConfigValue, Resolver, ENV_PREFIX};
pub use settings::{
    Settings, DEFAULT_APP_DEBUG, DEFAULT_APP_HOST, DEFAULT_APP_LOG_PATH, DEFAULT_APP_NAME,
    DEFAULT_APP_PORT, DEFAULT_CONTAINER_LOG_PATH, DEFAULT_DOCKER_CONTAINER_NAME,
    DEFAULT_DOCKER_IMAGE_NAME,
};
pub use store::ConfigStore;

use once_cell::sync::OnceCell;

struct Global {
    resolver: Resolver,
    settings: Settings,
}

static GLOBAL: OnceCell<Global> = OnceCell::new();

fn global() -> &'static Global {
    GLOBAL.get_or_init(|| {
        let resolver = Resolver::from_loader(ConfigLoader::load());
        let settings = Settings::from_resolver(&resolver);
        Global { resolver, settings }
    })
}

/// Load the process-wide configuration. Only the first call does any work.
pub fn initialize() -> &'static Resolver {
    &global().resolver
}

/// Process-wide resolver, initializing on first use.
pub fn resolver() -> &'static Resolver {
    &global().resolver
}

/// Process-wide precomputed bindings.
pub fn settings() -> &'static Settings {
    &global().settings
}

/// Shorthand for `resolver().resolve(..)`.
pub fn get(section: &str, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
    resolver().resolve(section, key, default)
}

/// Print every precomputed binding to stdout.
pub fn print_all() {
    print!("{}", settings());
}

/// Split `section.key` on the first dot.
pub fn split_key_path(path: &str) -> ConfigResult<(&str, &str)> {
    match path.split_once('.') {
        Some((section, key)) if !section.is_empty() && !key.is_empty() => Ok((section, key)),
        _ => Err(ConfigError::InvalidKeyPath(path.to_string())),
    }
}
