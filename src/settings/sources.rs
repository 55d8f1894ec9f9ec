use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, File};

use crate::cli::CliArgs;
use noted::app_dirs;

/// Merge every configuration layer into a single [`Config`].
///
/// Later sources win: default files, then `--config` files in order, then
/// `NOTED__`-prefixed environment variables (`NOTED__UI__THEME=light`).
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("noted")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
    );

    builder.build().context("failed to merge configuration")
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".noted.toml"));
        files.push(current_dir.join("noted.toml"));
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_files_include_current_directory_variants() {
        let files = default_config_files();
        assert!(files.iter().any(|path| path.ends_with(".noted.toml")));
        assert!(files.iter().any(|path| path.ends_with("noted.toml")));
    }
}
