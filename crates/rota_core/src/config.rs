//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Defaults live under the OS temp directory so a bare run never needs setup.

use std::path::PathBuf;

use crate::logging::default_log_level;

pub const DB_PATH_ENV: &str = "ROTA_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "ROTA_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "ROTA_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "rota.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "rota-logs";

/// Resolved locations and levels for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotaConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for RotaConfig {
    fn default() -> Self {
        let temp = std::env::temp_dir();
        Self {
            db_path: temp.join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: temp.join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl RotaConfig {
    /// Reads `ROTA_DB_PATH`, `ROTA_LOG_LEVEL` and `ROTA_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: non_blank(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: non_blank(LOG_DIR_ENV).map_or(defaults.log_dir, PathBuf::from),
        }
    }
}
