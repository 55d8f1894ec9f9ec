use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use noted::app_dirs;

/// Version banner extended with the directories the binary actually uses,
/// so `--version` doubles as a "where is my registry" answer.
fn long_version() -> &'static str {
    let mut banner = format!("noted {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(banner);
    for (label, dir) in [
        ("config directory", app_dirs::get_config_dir()),
        ("data directory", app_dirs::get_data_dir()),
    ] {
        match dir {
            Ok(path) => {
                let _ = writeln!(banner, "{label}: {}", path.display());
            }
            Err(err) => {
                let _ = writeln!(banner, "{label}: unavailable ({err})");
            }
        }
    }

    Box::leak(banner.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "noted",
    version,
    long_version = long_version(),
    about = "Terminal manager for note vaults",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `noted` binary.
pub(crate) struct CliArgs {
    #[command(subcommand)]
    pub(crate) command: Option<VaultCommand>,
    #[arg(
        long,
        value_name = "NAME_OR_INDEX",
        help = "Set the current vault by display name or 1-based index"
    )]
    pub(crate) open: Option<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "NOTED_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "NAME",
        env = "NOTED_THEME",
        help = "Colour theme for the interactive flow (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(long = "list-themes", help = "List the built-in themes and exit")]
    pub(crate) list_themes: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for the flow outcome"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration before running"
    )]
    pub(crate) print_config: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "Registry file to use instead of the default"
    )]
    pub(crate) registry: Option<PathBuf>,
}

/// Non-interactive vault operations. Without a subcommand the interactive
/// flow runs.
#[derive(Subcommand, Debug)]
pub(crate) enum VaultCommand {
    /// List registered vaults with their 1-based indices
    List,
    /// Show the current vault
    Current,
    /// Register a vault at the given path, creating the directory if needed
    Create { path: String },
}

/// Supported output formats for the flow outcome.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn subcommands_and_flags_parse() {
        let cli = CliArgs::parse_from(["noted", "create", "~/notes"]);
        assert!(matches!(
            cli.command,
            Some(VaultCommand::Create { ref path }) if path == "~/notes"
        ));

        let cli = CliArgs::parse_from(["noted", "--open", "2", "--output", "json"]);
        assert_eq!(cli.open.as_deref(), Some("2"));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.command.is_none());
    }
}
