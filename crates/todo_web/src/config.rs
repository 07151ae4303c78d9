//! Configuration management for the web service
//!
//! Supports loading configuration from environment variables with fallback to defaults.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_COOKIE_NAME: &str = "todo_session";
pub const DEFAULT_SESSION_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Name of the cookie carrying the session id
    pub cookie_name: String,
    /// Upper bound on sessions kept by the in-memory store
    pub session_capacity: usize,
    /// When set, sessions are kept as JSON files in this directory instead of in memory
    pub session_dir: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            session_capacity: DEFAULT_SESSION_CAPACITY,
            session_dir: None,
        }
    }
}

impl WebConfig {
    /// Load WebConfig from environment variables
    ///
    /// Environment variables:
    /// - `APP_HOST`: Bind address (default: 127.0.0.1)
    /// - `APP_PORT`: Bind port (default: 8080)
    /// - `APP_WORKERS`: actix worker count (default: 4)
    /// - `SESSION_COOKIE_NAME`: Session cookie name (default: todo_session)
    /// - `SESSION_CAPACITY`: Max in-memory sessions (default: 10000)
    /// - `SESSION_DIR`: Directory for file-backed sessions (default: unset, in-memory)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("APP_HOST")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.host),
            port: lookup("APP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            workers: lookup("APP_WORKERS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.workers),
            cookie_name: lookup("SESSION_COOKIE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.cookie_name),
            session_capacity: lookup("SESSION_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_capacity),
            session_dir: lookup("SESSION_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = WebConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, WebConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_values_read_from_environment() {
        let config = WebConfig::from_lookup(lookup_from(&[
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "9000"),
            ("APP_WORKERS", "2"),
            ("SESSION_COOKIE_NAME", "lists"),
            ("SESSION_CAPACITY", "50"),
            ("SESSION_DIR", "/tmp/sessions"),
        ]));
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.workers, 2);
        assert_eq!(config.cookie_name, "lists");
        assert_eq!(config.session_capacity, 50);
        assert_eq!(config.session_dir, Some(PathBuf::from("/tmp/sessions")));
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = WebConfig::from_lookup(lookup_from(&[
            ("APP_PORT", "not-a-port"),
            ("APP_WORKERS", "0"),
            ("SESSION_DIR", ""),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert!(config.session_dir.is_none());
    }
}
