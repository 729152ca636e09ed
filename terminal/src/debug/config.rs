//! Logging configuration from environment variables

use std::path::{Path, PathBuf};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "bookswap_terminal=info,warn";

/// Directory used when `BOOKSWAP_LOG_DIR` is unset
pub const DEFAULT_LOG_DIR: &str = "logs";

/// File name prefix of the rotated log
pub const LOG_FILE_PREFIX: &str = "bookswap.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "bookswap_terminal=debug,info")
    pub log_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_dir: std::env::var("BOOKSWAP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR)),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Override the log directory
    pub fn with_log_dir(mut self, log_dir: impl AsRef<Path>) -> Self {
        self.log_dir = log_dir.as_ref().to_path_buf();
        self
    }

    /// Path of today's log file (before the rotation date suffix)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.log_level, "bookswap_terminal=info,warn");
        assert_eq!(config.log_file(), PathBuf::from("logs").join("bookswap.log"));
    }

    #[test]
    fn test_with_log_dir() {
        let config = LogConfig::default().with_log_dir("/tmp/bookswap");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/bookswap"));
    }
}
