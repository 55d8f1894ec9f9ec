mod cli;
mod commands;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, VaultCommand, parse_cli, print_json, print_plain};
use noted::registry::FileStore;
use settings::ResolvedConfig;
use workflow::VaultWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in noted::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	noted::logging::initialize()?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let store = FileStore::new(resolved.registry_path.clone());

	match &cli.command {
		Some(VaultCommand::List) => commands::list(&store),
		Some(VaultCommand::Current) => commands::current(&store),
		Some(VaultCommand::Create { path }) => commands::create(&store, path),
		None => match &cli.open {
			Some(target) => commands::open(&store, target),
			None => run_flow(cli.output, resolved, store),
		},
	}
}

/// Run the interactive vault flow and print its outcome in the chosen format.
fn run_flow(format: OutputFormat, settings: ResolvedConfig, store: FileStore) -> Result<()> {
	let workflow = VaultWorkflow::new(settings, store);
	let report = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
