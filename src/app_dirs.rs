//! Resolve configuration and data directories for `noted`.
//!
//! Environment overrides (`NOTED_CONFIG_DIR`, `NOTED_DATA_DIR`) take
//! precedence; otherwise the platform-appropriate locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "noted";
const APPLICATION: &str = "noted";

const CONFIG_DIR_ENV: &str = "NOTED_CONFIG_DIR";
const DATA_DIR_ENV: &str = "NOTED_DATA_DIR";

/// Return the configuration directory that holds the vault registry and the
/// user's configuration file.
pub fn get_config_dir() -> Result<PathBuf> {
    resolve(CONFIG_DIR_ENV, |dirs| dirs.config_local_dir().to_path_buf())
}

/// Return the data directory that stores the application log.
pub fn get_data_dir() -> Result<PathBuf> {
    resolve(DATA_DIR_ENV, |dirs| dirs.data_local_dir().to_path_buf())
}

/// Env override first, platform default second. An empty variable counts as
/// unset so shell defaults like `NOTED_CONFIG_DIR=` behave sanely.
fn resolve(env_name: &str, platform: impl FnOnce(&ProjectDirs) -> PathBuf) -> Result<PathBuf> {
    if let Some(value) = env::var_os(env_name) {
        if !value.is_empty() {
            return Ok(PathBuf::from(value));
        }
    }

    let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for noted"))?;
    Ok(platform(&dirs))
}
