//! Runtime configuration for dispatch binaries.
//!
//! # Responsibility
//! - Read database and logging settings from `DISPATCH_*` variables.
//! - Apply defaults and reject unsupported values early.
//!
//! # Invariants
//! - Empty or whitespace-only values are treated as unset.
//! - `log_level` is always a normalized level name.

use crate::logging::{default_log_level, parse_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "DISPATCH_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "DISPATCH_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "DISPATCH_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "dispatch.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds a value the core cannot use.
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved settings for opening storage and starting logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// Logging stays disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let db_path = value(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));

        let log_level = match value(ENV_LOG_LEVEL) {
            Some(raw) => parse_level(&raw).map_err(|message| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                message,
            })?,
            None => default_log_level(),
        };

        let log_dir = match value(ENV_LOG_DIR).map(PathBuf::from) {
            Some(dir) if !dir.is_absolute() => {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    message: format!("must be an absolute path, got `{}`", dir.display()),
                });
            }
            other => other,
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn load(pairs: &[(&str, &str)]) -> Result<CoreConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CoreConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.db_path, PathBuf::from("dispatch.sqlite3"));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = load(&[(ENV_DB_PATH, "  "), (ENV_LOG_LEVEL, "")]).unwrap();
        assert_eq!(config.db_path, PathBuf::from("dispatch.sqlite3"));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn explicit_values_are_normalized() {
        let log_dir = std::env::temp_dir().join("dispatch-logs");
        let log_dir_text = log_dir.to_str().unwrap().to_string();
        let config = load(&[
            (ENV_DB_PATH, "/var/lib/dispatch/main.db"),
            (ENV_LOG_LEVEL, "WARNING"),
            (ENV_LOG_DIR, log_dir_text.as_str()),
        ])
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/var/lib/dispatch/main.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(log_dir));
    }

    #[test]
    fn invalid_level_and_relative_log_dir_are_rejected() {
        let level_err = load(&[(ENV_LOG_LEVEL, "loud")]).unwrap_err();
        assert!(matches!(
            level_err,
            ConfigError::InvalidValue { key, .. } if key == ENV_LOG_LEVEL
        ));

        let dir_err = load(&[(ENV_LOG_DIR, "logs")]).unwrap_err();
        assert!(matches!(
            dir_err,
            ConfigError::InvalidValue { key, .. } if key == ENV_LOG_DIR
        ));
    }
}
