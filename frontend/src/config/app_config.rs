//! Application Configuration
//!
//! API location, phone filter prefix and logging settings.

use crate::models::DEFAULT_PHONE_PREFIX;
use config_loader::ConfigError;
use logging::LogLevel;
use std::path::{Path, PathBuf};

/// Directory name under the user config dir
pub const APP_NAME: &str = "hexlabs-users";

/// Configuration file name searched by [`AppConfig::load`]
pub const CONFIG_FILE: &str = "app.conf";

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL template; `{service}` is replaced by the service slug
    pub api_base_url: String,
    /// Prefix matched by the phone filter
    pub phone_prefix: String,
    /// Skip TLS certificate validation (local gateways only)
    pub accept_invalid_certs: bool,
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Echo log lines to stdout
    pub log_to_console: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://{service}.api.hexlabs.org".to_string(),
            phone_prefix: DEFAULT_PHONE_PREFIX.to_string(),
            accept_invalid_certs: false,
            log_path: PathBuf::from("hexlabs-users.log"),
            log_level: LogLevel::Info,
            log_to_console: false,
        }
    }
}

impl AppConfig {
    /// Parses configuration content on top of the defaults
    ///
    /// Format:
    /// ```text
    /// api_base_url=https://{service}.api.hexlabs.org
    /// phone_prefix=470
    /// accept_invalid_certs=false
    /// log_path=hexlabs-users.log
    /// log_level=Info
    /// log_to_console=false
    /// ```
    ///
    /// Unknown keys and unparseable values are reported on stderr and
    /// skipped; malformed lines are an error.
    pub fn from_content(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (key, value) in config_loader::parse_key_values(content)? {
            match key.as_str() {
                "api_base_url" => config.api_base_url = value,
                "phone_prefix" => config.phone_prefix = value,
                "accept_invalid_certs" => {
                    if let Some(flag) = parse_flag(&key, &value) {
                        config.accept_invalid_certs = flag;
                    }
                }
                "log_path" => config.log_path = PathBuf::from(value),
                "log_level" => match value.parse() {
                    Ok(level) => config.log_level = level,
                    Err(e) => eprintln!("Warning: {}, keeping {}", e, config.log_level),
                },
                "log_to_console" => {
                    if let Some(flag) = parse_flag(&key, &value) {
                        config.log_to_console = flag;
                    }
                }
                _ => {
                    eprintln!("Warning: Unknown configuration key '{}' ignored", key);
                }
            }
        }

        Ok(config)
    }

    /// Loads configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = config_loader::load_config_file(path)?;
        Self::from_content(&content)
    }

    /// Searches the usual locations for `app.conf` and falls back to the
    /// defaults when none is found or the file is invalid.
    pub fn load() -> Self {
        match config_loader::find_and_load(APP_NAME, CONFIG_FILE) {
            Ok((path, content)) => match Self::from_content(&content) {
                Ok(config) => {
                    println!("Loaded configuration from: {}", path.display());
                    config
                }
                Err(e) => {
                    eprintln!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                println!("No configuration file found, using defaults");
                Self::default()
            }
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => {
            eprintln!("Warning: '{}' is not a boolean for '{}', ignored", value, key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://{service}.api.hexlabs.org");
        assert_eq!(config.phone_prefix, "470");
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.log_path, PathBuf::from("hexlabs-users.log"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_from_content_overrides() {
        let content = "\
            # Local gateway\n\
            api_base_url=http://localhost:8003\n\
            phone_prefix=404\n\
            accept_invalid_certs=yes\n\
            log_path=/tmp/users.log\n\
            log_level=Debug\n\
            log_to_console=1\n\
        ";

        let config = AppConfig::from_content(content).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8003");
        assert_eq!(config.phone_prefix, "404");
        assert!(config.accept_invalid_certs);
        assert_eq!(config.log_path, PathBuf::from("/tmp/users.log"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.log_to_console);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let content = "log_level=verbose\naccept_invalid_certs=maybe\nunknown_key=1\n";

        let config = AppConfig::from_content(content).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_line_is_error() {
        assert!(AppConfig::from_content("phone_prefix 470").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "phone_prefix=678\n").unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.phone_prefix, "678");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let result = AppConfig::load_from_file(dir.path().join("absent.conf"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
