//! Configuration file discovery and fail-open loading.

use super::error::{ConfigError, ConfigResult};
use super::store::ConfigStore;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Directory under the working directory holding the fallback config file
pub const CONFIG_DIR_NAME: &str = "config";

/// Loaded store plus the file it came from (if any).
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Path of the file that was read
    pub config_path: Option<PathBuf>,
    /// Parsed contents (possibly partial or empty)
    pub store: ConfigStore,
}

impl ConfigLoader {
    /// Discover and load the config file for the running process.
    ///
    /// Resolution order:
    /// 1. `<directory of the running executable>/config.ini`
    /// 2. `<current working directory>/config/config.ini`
    ///
    /// Never fails: a missing or unreadable file is logged and the store is
    /// left empty (or holds whatever was parsed before the failure).
    pub fn load() -> Self {
        match resolve_config_path() {
            Ok(path) => Self::from_path(path),
            Err(e) => {
                warn!("{e}; using environment variables and defaults only");
                Self::default()
            }
        }
    }

    /// Load a specific file, failing open the same way as [`ConfigLoader::load`].
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut store = ConfigStore::new();
        match read_into(&path, &mut store) {
            Ok(()) => debug!(path = %path.display(), keys = store.len(), "loaded configuration file"),
            Err(e) => warn!(
                sections = store.section_names().len(),
                "{e}; using environment variables, defaults and any sections parsed so far"
            ),
        }
        Self {
            config_path: Some(path),
            store,
        }
    }

    /// Loader over an already built store (no file).
    pub fn with_store(store: ConfigStore) -> Self {
        Self {
            config_path: None,
            store,
        }
    }

    /// Get the parsed store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}

/// Resolve the configuration file for the running process.
pub fn resolve_config_path() -> ConfigResult<PathBuf> {
    let exe_dir = match std::env::current_exe() {
        Ok(exe) => exe.parent().map(Path::to_path_buf),
        Err(e) => {
            debug!("{}", ConfigError::ExecutablePath(e));
            None
        }
    };
    let cwd = match std::env::current_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            debug!("{}", ConfigError::CurrentDir(e));
            None
        }
    };

    discover_in(exe_dir.as_deref(), cwd.as_deref())
}

/// Candidate config paths for the given executable and working directories,
/// in priority order.
pub fn candidate_paths(exe_dir: Option<&Path>, cwd: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(dir) = exe_dir {
        candidates.push(dir.join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = cwd {
        candidates.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    candidates
}

/// Return the first existing candidate file.
pub fn discover_in(exe_dir: Option<&Path>, cwd: Option<&Path>) -> ConfigResult<PathBuf> {
    let tried = candidate_paths(exe_dir, cwd);
    match tried.iter().find(|p| p.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(ConfigError::NotFound { tried }),
    }
}

/// Parse `path` into `store`. The file handle is dropped on every return path.
pub fn read_into(path: &Path, store: &mut ConfigStore) -> ConfigResult<()> {
    let file = File::open(path).map_err(|e| ConfigError::read(path, e))?;
    store
        .read_from(BufReader::new(file))
        .map_err(|e| ConfigError::read(path, e))
}

/// Parse `path` into a fresh store.
pub fn load_store(path: &Path) -> ConfigResult<ConfigStore> {
    let mut store = ConfigStore::new();
    read_into(path, &mut store)?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_exe_dir_wins_over_cwd() {
        let exe = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        write_file(&exe.path().join("config.ini"), "[app]\nname = exe\n");
        write_file(&cwd.path().join("config/config.ini"), "[app]\nname = cwd\n");

        let found = discover_in(Some(exe.path()), Some(cwd.path())).unwrap();
        assert_eq!(found, exe.path().join("config.ini"));
    }

    #[test]
    fn test_falls_back_to_cwd_config_dir() {
        let exe = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        write_file(&cwd.path().join("config/config.ini"), "[app]\nname = cwd\n");

        let found = discover_in(Some(exe.path()), Some(cwd.path())).unwrap();
        assert_eq!(found, cwd.path().join("config").join("config.ini"));
    }

    #[test]
    fn test_cwd_root_config_ini_is_not_a_candidate() {
        let exe = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        write_file(&cwd.path().join("config.ini"), "[app]\nname = wrong\n");

        let err = discover_in(Some(exe.path()), Some(cwd.path())).unwrap_err();
        match err {
            ConfigError::NotFound { tried } => assert_eq!(tried.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_directory_named_config_ini_is_ignored() {
        let exe = TempDir::new().unwrap();
        fs::create_dir_all(exe.path().join("config.ini")).unwrap();

        assert!(discover_in(Some(exe.path()), None).is_err());
    }

    #[test]
    fn test_missing_exe_dir_still_checks_cwd() {
        let cwd = TempDir::new().unwrap();
        write_file(&cwd.path().join("config/config.ini"), "");

        assert!(discover_in(None, Some(cwd.path())).is_ok());
        assert!(matches!(
            discover_in(None, None),
            Err(ConfigError::NotFound { ref tried }) if tried.is_empty()
        ));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        write_file(&path, "[server]\nhost = 127.0.0.1\n");

        let loader = ConfigLoader::from_path(&path);
        assert_eq!(loader.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(loader.store().get("server", "host"), Some("127.0.0.1"));
    }

    #[test]
    fn test_from_path_missing_file_fails_open() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::from_path(dir.path().join("nope.ini"));
        assert!(loader.store().is_empty());
    }

    #[test]
    fn test_load_store_reports_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_store(&dir.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
