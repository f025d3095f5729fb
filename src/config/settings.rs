//! Precomputed deployment bindings consumed by the container tooling.

use super::resolver::Resolver;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_APP_NAME: &str = "flask-echo";
pub const DEFAULT_APP_PORT: i64 = 50100;
pub const DEFAULT_APP_DEBUG: bool = false;
pub const DEFAULT_APP_HOST: &str = "0.0.0.0";
pub const DEFAULT_APP_LOG_PATH: &str = "/app/log";
pub const DEFAULT_CONTAINER_LOG_PATH: &str = "/var/log";
pub const DEFAULT_DOCKER_IMAGE_NAME: &str = "flask-echo";
pub const DEFAULT_DOCKER_CONTAINER_NAME: &str = "flask-echo-container";

/// Resolved deployment values, computed once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// `app.name`
    pub app_name: String,
    /// `app.port`
    pub app_port: i64,
    /// `server.host`
    pub app_host: String,
    /// `app.debug`
    pub app_debug: bool,
    /// `server.log_path`
    pub app_log_path: String,
    /// `server.container_log_path`
    pub container_log_path: String,
    /// `docker.image_name`
    pub docker_image_name: String,
    /// `docker.container_name`
    pub docker_container_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            app_port: DEFAULT_APP_PORT,
            app_host: DEFAULT_APP_HOST.to_string(),
            app_debug: DEFAULT_APP_DEBUG,
            app_log_path: DEFAULT_APP_LOG_PATH.to_string(),
            container_log_path: DEFAULT_CONTAINER_LOG_PATH.to_string(),
            docker_image_name: DEFAULT_DOCKER_IMAGE_NAME.to_string(),
            docker_container_name: DEFAULT_DOCKER_CONTAINER_NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn from_resolver(r: &Resolver) -> Self {
        Self {
            app_name: r.get_str("app", "name", DEFAULT_APP_NAME),
            app_port: r.get_int("app", "port", DEFAULT_APP_PORT),
            app_host: r.get_str("server", "host", DEFAULT_APP_HOST),
            app_debug: r.get_bool("app", "debug", DEFAULT_APP_DEBUG),
            app_log_path: r.get_str("server", "log_path", DEFAULT_APP_LOG_PATH),
            container_log_path: r.get_str("server", "container_log_path", DEFAULT_CONTAINER_LOG_PATH),
            docker_image_name: r.get_str("docker", "image_name", DEFAULT_DOCKER_IMAGE_NAME),
            docker_container_name: r.get_str(
                "docker",
                "container_name",
                DEFAULT_DOCKER_CONTAINER_NAME,
            ),
        }
    }
}

/// Operator-facing dump, one binding per line in a fixed order.
impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Current configuration ===")?;
        writeln!(f, "APP_NAME: {}", self.app_name)?;
        writeln!(f, "APP_PORT: {}", self.app_port)?;
        writeln!(f, "APP_HOST: {}", self.app_host)?;
        writeln!(f, "APP_DEBUG: {}", self.app_debug)?;
        writeln!(f, "APP_LOG_PATH: {}", self.app_log_path)?;
        writeln!(f, "CONTAINER_LOG_PATH: {}", self.container_log_path)?;
        writeln!(f, "DOCKER_IMAGE_NAME: {}", self.docker_image_name)?;
        writeln!(f, "DOCKER_CONTAINER_NAME: {}", self.docker_container_name)
    }
}
