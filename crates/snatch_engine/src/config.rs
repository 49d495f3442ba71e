use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use snatch_core::HostnameOverrides;
use snatch_logging::{snatch_debug, snatch_info, snatch_warn};
use thiserror::Error;

/// Name of the config file looked up in every candidate directory.
pub const CONFIG_FILE: &str = "config.json";
/// Directory under `~/.config` holding the per-user config file.
pub const CONFIG_DIR: &str = "snatch-info";
/// Earlier name of [`CONFIG_DIR`], still searched after it.
pub const LEGACY_CONFIG_DIR: &str = "bounded-snatch-info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Overrides in effect for a run, plus the file they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub overrides: HostnameOverrides,
    pub source: Option<PathBuf>,
}

/// Config locations in lookup order: working directory, executable
/// directory, `~/.config/snatch-info`, then `~/.config/bounded-snatch-info`.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![Path::new(".").join(CONFIG_FILE)];

    match std::env::current_exe() {
        Ok(exe) => {
            if let Some(dir) = exe.parent() {
                paths.push(dir.join(CONFIG_FILE));
            }
        }
        Err(err) => snatch_warn!("Cannot locate executable directory: {}", err),
    }

    if let Some(home) = dirs::home_dir() {
        let config_home = home.join(".config");
        for dir in [CONFIG_DIR, LEGACY_CONFIG_DIR] {
            paths.push(config_home.join(dir).join(CONFIG_FILE));
        }
    }

    paths
}

/// First candidate that exists as a file.
pub fn find_config(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

/// Load overrides from `explicit` if given, otherwise from the first of
/// [`candidate_paths`] that exists. Finding no file at all is not an error.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match explicit {
        Some(path) if !path.is_file() => Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => load_config_from(&[path.to_path_buf()]),
        None => load_config_from(&candidate_paths()),
    }
}

pub fn load_config_from(candidates: &[PathBuf]) -> Result<LoadedConfig, ConfigError> {
    let Some(path) = find_config(candidates) else {
        snatch_debug!("No config file found in {:?}", candidates);
        return Ok(LoadedConfig::default());
    };

    let overrides = read_overrides(&path)?;
    snatch_info!(
        "Loaded {:?} with {} hostname override(s)",
        path,
        overrides.len()
    );
    Ok(LoadedConfig {
        overrides,
        source: Some(path),
    })
}

pub fn read_overrides(path: &Path) -> Result<HostnameOverrides, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
