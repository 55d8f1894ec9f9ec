//! The ordered collection of known vaults and which one is current.
//!
//! Persistence lives behind the [`RegistryStore`] trait so the interactive
//! flow can be exercised with an in-memory registry while the binary uses the
//! file-backed implementation.

mod store;

use std::path::Path;

use crate::vault::Vault;

pub use store::{FileStore, RegistryStore};

/// In-memory view of the vault registry.
///
/// `vaults` preserves insertion order; CLI commands address entries by
/// 1-based index in that order. A non-empty `current_vault_path` should name
/// the path of some entry, but a stale pointer is tolerated and reported
/// rather than rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VaultRegistry {
	pub vaults: Vec<Vault>,
	pub current_vault_path: String,
}

impl VaultRegistry {
	/// Look up a vault by display name. Names are not unique; the first
	/// match in insertion order wins.
	pub fn by_name(&self, name: &str) -> Option<&Vault> {
		self.vaults.iter().find(|vault| vault.name == name)
	}

	/// Look up a vault by 1-based index.
	pub fn by_index(&self, index: usize) -> Option<&Vault> {
		index.checked_sub(1).and_then(|i| self.vaults.get(i))
	}

	/// Whether some registered vault lives at `path`. Vault identity is path
	/// equality.
	pub fn contains_path(&self, path: &Path) -> bool {
		self.vaults.iter().any(|vault| vault.path == path)
	}

	/// Register a vault, refusing duplicates by path. Returns whether the
	/// vault was inserted.
	pub fn add(&mut self, vault: Vault) -> bool {
		if self.contains_path(&vault.path) {
			return false;
		}
		self.vaults.push(vault);
		true
	}

	/// Remove the vault at a 0-based position, if any.
	pub fn remove(&mut self, index: usize) -> Option<Vault> {
		if index < self.vaults.len() {
			Some(self.vaults.remove(index))
		} else {
			None
		}
	}

	/// The vault the current pointer references, or `None` when the pointer
	/// is unset or stale.
	pub fn current(&self) -> Option<&Vault> {
		if self.current_vault_path.is_empty() {
			return None;
		}
		self.vaults
			.iter()
			.find(|vault| vault.path == Path::new(&self.current_vault_path))
	}

	pub fn len(&self) -> usize {
		self.vaults.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vaults.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	fn sample() -> VaultRegistry {
		let mut registry = VaultRegistry::default();
		registry.add(Vault::new("Work", "/v/work"));
		registry.add(Vault::new("Personal", "/v/personal"));
		registry
	}

	#[test]
	fn add_is_idempotent_by_path() {
		let mut registry = sample();
		assert!(!registry.add(Vault::new("Renamed", "/v/work")));
		assert_eq!(registry.len(), 2);
	}

	#[test]
	fn index_lookup_is_one_based() {
		let registry = sample();
		assert_eq!(registry.by_index(1).map(|v| v.name.as_str()), Some("Work"));
		assert_eq!(
			registry.by_index(2).map(|v| v.name.as_str()),
			Some("Personal")
		);
		assert!(registry.by_index(0).is_none());
		assert!(registry.by_index(3).is_none());
	}

	#[test]
	fn remove_shifts_subsequent_entries() {
		let mut registry = sample();
		let removed = registry.remove(0).expect("removed");
		assert_eq!(removed.name, "Work");
		assert_eq!(registry.len(), 1);
		assert_eq!(registry.vaults[0].name, "Personal");
		assert!(registry.remove(5).is_none());
	}

	#[test]
	fn stale_current_pointer_resolves_to_none() {
		let mut registry = sample();
		registry.current_vault_path = "/v/work".to_string();
		assert_eq!(registry.current().map(|v| v.name.as_str()), Some("Work"));

		registry.current_vault_path = "/v/gone".to_string();
		assert!(registry.current().is_none());

		registry.current_vault_path = String::new();
		assert!(registry.current().is_none());
	}

	#[test]
	fn contains_path_is_reflexive_on_equality() {
		let registry = sample();
		assert!(registry.contains_path(&PathBuf::from("/v/work")));
		assert!(!registry.contains_path(&PathBuf::from("/v/other")));
	}
}
