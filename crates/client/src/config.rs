//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SCRUTIN_API_BASE` - Base URL of the survey service
//!   (default: `http://127.0.0.1:8000`)
//! - `SCRUTIN_SESSION_FILE` - Path of the persisted session file
//!   (default: `$HOME/.scrutin/session.json`, or `.scrutin/session.json`
//!   relative to the working directory when `HOME` is unset)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default origin of the survey service.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Session file path relative to the home directory.
const SESSION_FILE_SUFFIX: &str = ".scrutin/session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the survey service. All request paths are relative to it.
    pub base_url: Url,
    /// Where the session record is persisted.
    pub session_file: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SCRUTIN_API_BASE` is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("SCRUTIN_API_BASE", DEFAULT_API_BASE)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("SCRUTIN_API_BASE".to_string(), e.to_string()))?;

        let session_file = get_optional_env("SCRUTIN_SESSION_FILE")
            .map_or_else(default_session_file, PathBuf::from);

        Ok(Self {
            base_url,
            session_file,
        })
    }

    /// Build a configuration directly, bypassing the environment.
    #[must_use]
    pub const fn new(base_url: Url, session_file: PathBuf) -> Self {
        Self {
            base_url,
            session_file,
        }
    }
}

/// Default session file location: under `$HOME`, or the working directory
/// when no home directory is known.
fn default_session_file() -> PathBuf {
    std::env::var("HOME").map_or_else(
        |_| PathBuf::from(SESSION_FILE_SUFFIX),
        |home| PathBuf::from(home).join(SESSION_FILE_SUFFIX),
    )
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base_parses() {
        let url = DEFAULT_API_BASE.parse::<Url>();
        assert!(url.is_ok());
    }

    #[test]
    fn test_default_session_file_has_suffix() {
        let path = default_session_file();
        assert!(path.ends_with(SESSION_FILE_SUFFIX));
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        let value = get_env_or_default("SCRUTIN_TEST_UNSET_VAR", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_new_bypasses_env() {
        let config = ApiConfig::new(
            "http://localhost:9999".parse().unwrap(),
            PathBuf::from("/tmp/session.json"),
        );
        assert_eq!(config.base_url.as_str(), "http://localhost:9999/");
        assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
    }
}
