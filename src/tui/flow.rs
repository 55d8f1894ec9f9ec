//! Top-level state machine driving vault selection, creation, and deletion.

use std::fs;
use std::mem;
use std::path::PathBuf;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::registry::VaultRegistry;
use crate::tui::input::TextInput;
use crate::tui::picker::{DirectoryPicker, PickerResult};
use crate::vault::{Vault, VaultConfig, VaultError};

/// Final outcome of one flow invocation, read exactly once by the caller.
#[derive(Debug)]
pub enum FlowOutcome {
	Selected(Vault),
	Cancelled,
	Failed(VaultError),
}

/// A row in the vault list: either a registered vault or the synthetic
/// trailing "Create New Vault" action.
#[derive(Debug, Clone, PartialEq)]
pub enum VaultEntry {
	Vault { name: String, path: PathBuf },
	CreateAction,
}

/// Screen-level mode of the flow. `Done` is terminal.
pub enum FlowState<'a> {
	Listing,
	PickingDirectory(DirectoryPicker<'a>),
	NamingVault { path: PathBuf },
	ConfirmingDeletion { index: usize },
	Done(FlowOutcome),
}

/// The interactive vault flow.
///
/// Owns the in-memory registry for the duration of one invocation; the
/// caller persists the registry returned by [`VaultFlow::finish`], so
/// deletions survive even when the flow ends in cancellation.
pub struct VaultFlow<'a> {
	pub(crate) registry: VaultRegistry,
	pub(crate) entries: Vec<VaultEntry>,
	pub(crate) selected: usize,
	pub(crate) name_input: TextInput<'a>,
	pub(crate) name_error: Option<VaultError>,
	pub(crate) state: FlowState<'a>,
}

impl<'a> VaultFlow<'a> {
	pub fn new(registry: VaultRegistry) -> Self {
		let mut flow = Self {
			registry,
			entries: Vec::new(),
			selected: 0,
			name_input: TextInput::new("Vault name"),
			name_error: None,
			state: FlowState::Listing,
		};
		flow.rebuild_entries();
		flow
	}

	/// Process one key event to completion. Events arriving after the flow
	/// reached `Done` are ignored.
	pub fn handle_key(&mut self, key: KeyEvent) {
		self.state = match mem::replace(&mut self.state, FlowState::Listing) {
			FlowState::Listing => self.handle_listing_key(key),
			FlowState::PickingDirectory(mut picker) => {
				picker.handle_key(key);
				match picker.resolved() {
					Some(PickerResult::Cancelled) => FlowState::Listing,
					Some(PickerResult::Chosen(path)) => self.enter_naming(path),
					None => FlowState::PickingDirectory(picker),
				}
			}
			FlowState::NamingVault { path } => self.handle_naming_key(key, path),
			FlowState::ConfirmingDeletion { index } => self.handle_confirm_key(key, index),
			done @ FlowState::Done(_) => done,
		};
	}

	/// The outcome, once the flow has terminated.
	pub fn outcome(&self) -> Option<&FlowOutcome> {
		match &self.state {
			FlowState::Done(outcome) => Some(outcome),
			_ => None,
		}
	}

	/// Consume the flow, yielding the (possibly mutated) registry and the
	/// final outcome.
	pub fn finish(self) -> (VaultRegistry, FlowOutcome) {
		let outcome = match self.state {
			FlowState::Done(outcome) => outcome,
			_ => FlowOutcome::Cancelled,
		};
		(self.registry, outcome)
	}

	fn handle_listing_key(&mut self, key: KeyEvent) -> FlowState<'a> {
		match key.code {
			KeyCode::Up => {
				self.selected = self.selected.saturating_sub(1);
				FlowState::Listing
			}
			KeyCode::Down => {
				if self.selected + 1 < self.entries.len() {
					self.selected += 1;
				}
				FlowState::Listing
			}
			KeyCode::Enter => match self.entries[self.selected].clone() {
				VaultEntry::CreateAction => {
					FlowState::PickingDirectory(DirectoryPicker::new())
				}
				VaultEntry::Vault { path, .. } => {
					match self.registry.vaults.iter().find(|v| v.path == path) {
						Some(vault) => {
							let vault = vault.clone();
							tracing::info!(path = %vault.path.display(), "vault selected");
							FlowState::Done(FlowOutcome::Selected(vault))
						}
						None => FlowState::Listing,
					}
				}
			},
			// Delete only applies to real vault entries.
			KeyCode::Char('D')
				if matches!(
					self.entries.get(self.selected),
					Some(VaultEntry::Vault { .. })
				) =>
			{
				FlowState::ConfirmingDeletion {
					index: self.selected,
				}
			}
			KeyCode::Char('q') | KeyCode::Esc => FlowState::Done(FlowOutcome::Cancelled),
			_ => FlowState::Listing,
		}
	}

	fn enter_naming(&mut self, path: PathBuf) -> FlowState<'a> {
		let default_name = path
			.file_name()
			.and_then(|name| name.to_str())
			.unwrap_or_default();
		self.name_input.set_text(default_name);
		self.name_error = None;
		FlowState::NamingVault { path }
	}

	fn handle_naming_key(&mut self, key: KeyEvent, path: PathBuf) -> FlowState<'a> {
		match key.code {
			// Back out to a fresh picker; nothing has been written yet.
			KeyCode::Esc => {
				self.name_error = None;
				FlowState::PickingDirectory(DirectoryPicker::new())
			}
			KeyCode::Enter => {
				let name = self.name_input.text().to_string();
				if name.is_empty() {
					self.name_error =
						Some(VaultError::Validation("name cannot be empty".to_string()));
					FlowState::NamingVault { path }
				} else {
					self.create_vault(name, path)
				}
			}
			_ => {
				if self.name_input.input(key) {
					self.name_error = None;
				}
				FlowState::NamingVault { path }
			}
		}
	}

	/// Create the directory, write the sidecar, and register the vault. The
	/// vault enters the registry only after the sidecar write succeeded.
	fn create_vault(&mut self, name: String, path: PathBuf) -> FlowState<'a> {
		if let Err(err) = fs::create_dir_all(&path) {
			let err = VaultError::filesystem(
				format!("failed to create vault directory {}", path.display()),
				err,
			);
			tracing::error!(error = %err, "vault creation failed");
			return FlowState::Done(FlowOutcome::Failed(err));
		}

		let config = VaultConfig::for_new_vault(&name, &path);
		if let Err(err) = config.write(&path) {
			tracing::error!(error = %err, "vault creation failed");
			return FlowState::Done(FlowOutcome::Failed(err));
		}

		let vault = Vault {
			name,
			path,
			config: Some(config),
		};
		self.registry.add(vault.clone());
		self.rebuild_entries();
		tracing::info!(path = %vault.path.display(), "vault created");
		FlowState::Done(FlowOutcome::Selected(vault))
	}

	fn handle_confirm_key(&mut self, key: KeyEvent, index: usize) -> FlowState<'a> {
		match key.code {
			KeyCode::Char('y') | KeyCode::Char('Y') => {
				self.delete_vault(index);
				FlowState::Listing
			}
			KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => FlowState::Listing,
			_ => FlowState::ConfirmingDeletion { index },
		}
	}

	/// Remove the vault from the registry and delete its sidecar file. The
	/// vault directory and its notes are never touched.
	fn delete_vault(&mut self, index: usize) {
		let Some(vault) = self.registry.remove(index) else {
			return;
		};

		let sidecar = vault.config_path();
		if let Err(err) = fs::remove_file(&sidecar) {
			// Registry removal is the authoritative user-visible action; a
			// missing or unremovable sidecar is not fatal.
			tracing::warn!(
				path = %sidecar.display(),
				error = %err,
				"could not remove vault sidecar"
			);
		}
		tracing::info!(path = %vault.path.display(), "vault deleted");

		self.rebuild_entries();
		if self.selected >= self.entries.len() {
			self.selected = self.entries.len() - 1;
		}
	}

	/// Rebuild the displayed rows: all registered vaults, then the synthetic
	/// create action, always last.
	fn rebuild_entries(&mut self) {
		self.entries = self
			.registry
			.vaults
			.iter()
			.map(|vault| VaultEntry::Vault {
				name: vault.name.clone(),
				path: vault.path.clone(),
			})
			.chain(std::iter::once(VaultEntry::CreateAction))
			.collect();
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::Path;

	use ratatui::crossterm::event::KeyModifiers;

	use super::*;
	use crate::vault::SIDECAR_FILE;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn type_text(flow: &mut VaultFlow, text: &str) {
		for ch in text.chars() {
			flow.handle_key(key(KeyCode::Char(ch)));
		}
	}

	fn registry_with_vaults(paths: &[&Path]) -> VaultRegistry {
		let mut registry = VaultRegistry::default();
		for (i, path) in paths.iter().enumerate() {
			registry.add(Vault::new(format!("vault-{i}"), *path));
		}
		registry
	}

	/// Drive the flow from the listing through the picker into name entry,
	/// targeting `target` (which need not exist yet).
	fn drive_to_naming(flow: &mut VaultFlow, target: &Path) {
		// The create action is the last entry.
		while flow.selected + 1 < flow.entries.len() {
			flow.handle_key(key(KeyCode::Down));
		}
		flow.handle_key(key(KeyCode::Enter));
		assert!(matches!(flow.state, FlowState::PickingDirectory(_)));

		type_text(flow, &target.display().to_string());
		flow.handle_key(key(KeyCode::Enter));
		assert!(matches!(flow.state, FlowState::NamingVault { .. }));
	}

	#[test]
	fn creating_a_vault_writes_the_sidecar_and_terminates() {
		let tmp = tempfile::tempdir().expect("tempdir");
		let target = tmp.path().join("notes");
		let mut flow = VaultFlow::new(VaultRegistry::default());

		drive_to_naming(&mut flow, &target);

		// The name is pre-filled with the final path segment.
		assert_eq!(flow.name_input.text(), "notes");

		// Replace it with an explicit name.
		for _ in 0.."notes".len() {
			flow.handle_key(key(KeyCode::Backspace));
		}
		type_text(&mut flow, "Work");
		flow.handle_key(key(KeyCode::Enter));

		let (registry, outcome) = flow.finish();
		match outcome {
			FlowOutcome::Selected(vault) => {
				assert_eq!(vault.name, "Work");
				assert_eq!(vault.path, target);
			}
			other => panic!("expected Selected, got {other:?}"),
		}

		let sidecar = target.join(SIDECAR_FILE);
		assert!(sidecar.is_file());
		let config = VaultConfig::read(&target).expect("sidecar");
		assert_eq!(config.name, "Work");
		assert!(config.templates_path.starts_with(&target));
		assert!(config.log_path.starts_with(&target));
		assert!(config.history_path.starts_with(&target));

		assert_eq!(registry.len(), 1);
		assert_eq!(registry.vaults[0].path, target);
	}

	#[test]
	fn empty_name_is_a_local_validation_error() {
		let tmp = tempfile::tempdir().expect("tempdir");
		let target = tmp.path().join("notes");
		let mut flow = VaultFlow::new(VaultRegistry::default());

		drive_to_naming(&mut flow, &target);
		for _ in 0.."notes".len() {
			flow.handle_key(key(KeyCode::Backspace));
		}
		flow.handle_key(key(KeyCode::Enter));

		assert!(matches!(flow.state, FlowState::NamingVault { .. }));
		assert!(matches!(
			flow.name_error,
			Some(VaultError::Validation(ref message)) if message == "name cannot be empty"
		));
		assert!(!target.exists());
	}

	#[test]
	fn escaping_name_entry_reenters_a_fresh_picker() {
		let tmp = tempfile::tempdir().expect("tempdir");
		let target = tmp.path().join("notes");
		let mut flow = VaultFlow::new(VaultRegistry::default());

		drive_to_naming(&mut flow, &target);
		flow.handle_key(key(KeyCode::Esc));

		match &flow.state {
			FlowState::PickingDirectory(picker) => {
				assert_eq!(picker.input.text(), "", "picker state must be fresh");
			}
			_ => panic!("expected PickingDirectory"),
		}
		assert!(!target.join(SIDECAR_FILE).exists());
	}

	#[test]
	fn selecting_a_registered_vault_terminates_without_duplicating() {
		let tmp = tempfile::tempdir().expect("tempdir");
		let registry = registry_with_vaults(&[tmp.path()]);
		let mut flow = VaultFlow::new(registry);

		flow.handle_key(key(KeyCode::Enter));

		let (registry, outcome) = flow.finish();
		assert!(matches!(outcome, FlowOutcome::Selected(_)));
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn deletion_removes_one_entry_and_returns_to_the_list() {
		let tmp = tempfile::tempdir().expect("tempdir");
		let first = tmp.path().join("first");
		let second = tmp.path().join("second");
		for dir in [&first, &second] {
			fs::create_dir(dir).expect("mkdir");
			VaultConfig::for_new_vault("v", dir).write(dir).expect("sidecar");
		}

		let mut flow = VaultFlow::new(registry_with_vaults(&[&first, &second]));
		flow.handle_key(key(KeyCode::Char('D')));
		assert!(matches!(
			flow.state,
			FlowState::ConfirmingDeletion { index: 0 }
		));

		flow.handle_key(key(KeyCode::Char('y')));
		assert!(matches!(flow.state, FlowState::Listing));
		assert_eq!(flow.registry.len(), 1);
		assert_eq!(flow.registry.vaults[0].path, second);

		// Only the sidecar is removed; the directory and its notes remain.
		assert!(!first.join(SIDECAR_FILE).exists());
		assert!(first.is_dir());
		assert!(second.join(SIDECAR_FILE).exists());

		assert_eq!(flow.entries.last(), Some(&VaultEntry::CreateAction));
		assert_eq!(flow.entries.len(), 2);
	}

	#[test]
	fn declining_deletion_changes_nothing() {
		let tmp = tempfile::tempdir().expect("tempdir");
		let mut flow = VaultFlow::new(registry_with_vaults(&[tmp.path()]));

		flow.handle_key(key(KeyCode::Char('D')));
		flow.handle_key(key(KeyCode::Char('n')));

		assert!(matches!(flow.state, FlowState::Listing));
		assert_eq!(flow.registry.len(), 1);
	}

	#[test]
	fn delete_is_ignored_on_the_create_action_entry() {
		let mut flow = VaultFlow::new(VaultRegistry::default());
		assert_eq!(flow.entries, vec![VaultEntry::CreateAction]);

		flow.handle_key(key(KeyCode::Char('D')));
		assert!(matches!(flow.state, FlowState::Listing));
	}

	#[test]
	fn quit_cancels_the_whole_flow() {
		let mut flow = VaultFlow::new(VaultRegistry::default());
		flow.handle_key(key(KeyCode::Char('q')));

		let (_, outcome) = flow.finish();
		assert!(matches!(outcome, FlowOutcome::Cancelled));
	}

	#[test]
	fn cancelling_the_picker_returns_to_the_listing() {
		let mut flow = VaultFlow::new(VaultRegistry::default());
		flow.handle_key(key(KeyCode::Enter));
		assert!(matches!(flow.state, FlowState::PickingDirectory(_)));

		flow.handle_key(key(KeyCode::Esc));
		assert!(matches!(flow.state, FlowState::Listing));
		assert!(flow.outcome().is_none());
	}

	#[test]
	fn selection_clamps_to_the_entry_count() {
		let tmp = tempfile::tempdir().expect("tempdir");
		let mut flow = VaultFlow::new(registry_with_vaults(&[tmp.path()]));
		assert_eq!(flow.entries.len(), 2);

		flow.handle_key(key(KeyCode::Up));
		assert_eq!(flow.selected, 0);
		flow.handle_key(key(KeyCode::Down));
		flow.handle_key(key(KeyCode::Down));
		flow.handle_key(key(KeyCode::Down));
		assert_eq!(flow.selected, 1);
	}
}
