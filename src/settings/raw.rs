use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use config::Config;
use serde::Deserialize;

use noted::app_dirs;
use noted::tui::theme::{self, Theme};

use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    ui: UiSection,
    registry: RegistrySection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RegistrySection {
    path: Option<PathBuf>,
}

/// Validated configuration after every layer has been applied.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) theme_name: String,
    pub(crate) theme: Theme,
    pub(crate) registry_path: PathBuf,
}

impl RawConfig {
    pub(super) fn from_config(config: Config) -> Result<Self> {
        config
            .try_deserialize()
            .context("invalid configuration file")
    }

    /// Apply CLI overrides on top of the merged file/env layers.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let theme_name = cli
            .theme
            .clone()
            .or(self.ui.theme)
            .unwrap_or_else(|| "slate".to_string());
        let Some(theme) = theme::by_name(&theme_name) else {
            bail!(
                "unknown theme '{theme_name}' (available: {})",
                theme::names().join(", ")
            );
        };

        let registry_path = match cli.registry.clone().or(self.registry.path) {
            Some(path) => path,
            None => app_dirs::get_config_dir()?.join("registry.json"),
        };

        Ok(ResolvedConfig {
            theme_name,
            theme,
            registry_path,
        })
    }
}

impl ResolvedConfig {
    /// Print a human-readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("theme: {}", self.theme_name);
        println!("registry: {}", self.registry_path.display());
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn empty_cli(args: &[&str]) -> CliArgs {
        let mut argv = vec!["noted"];
        argv.extend_from_slice(args);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn theme_defaults_to_slate() {
        let resolved = RawConfig::default()
            .resolve(&empty_cli(&["--registry", "/tmp/reg.json"]))
            .expect("resolve");
        assert_eq!(resolved.theme_name, "slate");
    }

    #[test]
    fn cli_theme_overrides_file_theme() {
        let raw = RawConfig {
            ui: UiSection {
                theme: Some("slate".to_string()),
            },
            ..RawConfig::default()
        };
        let resolved = raw
            .resolve(&empty_cli(&["--theme", "light", "--registry", "/tmp/reg.json"]))
            .expect("resolve");
        assert_eq!(resolved.theme_name, "light");
    }

    #[test]
    fn unknown_theme_is_rejected_with_the_available_names() {
        let err = RawConfig::default()
            .resolve(&empty_cli(&["--theme", "neon"]))
            .expect_err("should fail");
        let message = err.to_string();
        assert!(message.contains("neon"));
        assert!(message.contains("slate"));
    }

    #[test]
    fn registry_override_wins_over_the_default_location() {
        let resolved = RawConfig::default()
            .resolve(&empty_cli(&["--registry", "/tmp/reg.json"]))
            .expect("resolve");
        assert_eq!(resolved.registry_path, PathBuf::from("/tmp/reg.json"));
    }
}
