//! Configuration loading and dataset path resolution

use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable consulted when no CLI path is given.
pub const DATA_ENV_VAR: &str = "SONGBOARD_DATA";

/// Compiled-in fallback, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/cleandata.csv";

/// Dataset path resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `SONGBOARD_DATA` environment variable
/// 3. `dataset_path` key in the platform config file
/// 4. Compiled default (fallback)
pub fn resolve_dataset_path(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATA_ENV_VAR) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(config_path) = find_config_file() {
        if let Ok(contents) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&contents) {
                if let Some(path) = config.get("dataset_path").and_then(|v| v.as_str()) {
                    debug!("Dataset path from {}", config_path.display());
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 4: Compiled default
    PathBuf::from(DEFAULT_DATA_PATH)
}

/// Platform config file, if one exists.
///
/// `~/.config/songboard/config.toml` (or the platform equivalent), with
/// `/etc/songboard/config.toml` as a system-wide fallback on Linux.
fn find_config_file() -> Option<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("songboard").join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }
    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/songboard/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }
    None
}
