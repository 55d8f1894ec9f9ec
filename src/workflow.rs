//! Glue between resolved settings and the interactive vault flow.

use anyhow::{Context, Result};

use noted::registry::{FileStore, RegistryStore};
use noted::tui::{self, FlowOutcome};
use noted::vault::Vault;

use crate::settings::ResolvedConfig;

/// Outcome of one interactive flow invocation, ready for printing.
pub(crate) struct FlowReport {
	pub(crate) accepted: bool,
	pub(crate) vault: Option<Vault>,
}

/// Runs the interactive flow against the file-backed registry.
pub(crate) struct VaultWorkflow {
	settings: ResolvedConfig,
	store: FileStore,
}

impl VaultWorkflow {
	pub(crate) fn new(settings: ResolvedConfig, store: FileStore) -> Self {
		Self { settings, store }
	}

	/// Run the flow to completion and persist registry edits.
	///
	/// The registry is saved on every exit path, including cancellation and
	/// failure, so deletions made before backing out are kept.
	pub(crate) fn run(self) -> Result<FlowReport> {
		let registry = self
			.store
			.load()
			.context("failed to load vault registry")?;

		let (mut registry, outcome) = tui::run(registry, &self.settings.theme)?;

		let report = match outcome {
			FlowOutcome::Selected(vault) => {
				registry.current_vault_path = vault.path.to_string_lossy().into_owned();
				FlowReport {
					accepted: true,
					vault: Some(vault),
				}
			}
			FlowOutcome::Cancelled => FlowReport {
				accepted: false,
				vault: None,
			},
			FlowOutcome::Failed(err) => {
				self.store
					.save(&registry)
					.context("failed to save vault registry")?;
				return Err(err.into());
			}
		};

		self.store
			.save(&registry)
			.context("failed to save vault registry")?;
		Ok(report)
	}
}
