//! # Config Loader
//!
//! Locates configuration files on disk and parses the `key=value` format
//! used by the desktop apps in this workspace.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_config_file, parse_key_values};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = find_config_file("hexlabs-users", "app.conf")?;
//!     let content = load_config_file(&path)?;
//!
//!     for (key, value) in parse_key_values(&content)? {
//!         println!("{} = {}", key, value);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides config file discovery
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Reads the raw content of a configuration file.
///
/// The content is not parsed; callers decide the format.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Candidate locations for `filename`, in lookup order:
///
/// 1. `CONFIG_PATH` environment variable (if set)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
/// 4. `{user config dir}/{app_name}/{filename}`
pub fn candidate_paths(app_name: &str, filename: &str) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        paths.push(PathBuf::from(path));
    }

    paths.push(PathBuf::from("./config").join(filename));
    paths.push(PathBuf::from("./").join(filename));

    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(app_name).join(filename));
    }

    paths
}

/// Finds the first existing configuration file among [`candidate_paths`].
pub fn find_config_file(app_name: &str, filename: &str) -> Result<PathBuf> {
    let candidates = candidate_paths(app_name, filename);

    if let Some(found) = candidates.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let searched: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
    Err(ConfigError::FileNotFound(format!(
        "'{}' not found. Searched: {}",
        filename,
        searched.join(", ")
    )))
}

/// Finds and reads a configuration file in one step.
pub fn find_and_load(app_name: &str, filename: &str) -> Result<(PathBuf, String)> {
    let path = find_config_file(app_name, filename)?;
    let content = load_config_file(&path)?;
    Ok((path, content))
}

/// Parses `key=value` lines.
///
/// Blank lines and lines starting with `#` are skipped. Keys and values are
/// trimmed; the value is everything after the first `=`.
pub fn parse_key_values(content: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                pairs.push((key.trim().to_string(), value.trim().to_string()));
            }
            _ => {
                return Err(ConfigError::InvalidLine {
                    line: index + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(pairs)
}
