//! File-backed persistence for the vault registry.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::VaultRegistry;
use crate::vault::{Vault, VaultConfig};

/// Persistence contract for the registry. The on-disk encoding is owned by
/// the implementation; callers only see [`VaultRegistry`].
pub trait RegistryStore {
	fn load(&self) -> Result<VaultRegistry>;
	fn save(&self, registry: &VaultRegistry) -> Result<()>;
}

/// On-disk representation: display names and paths only. Sidecar configs are
/// re-read from the vault directories on load.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
	vaults: Vec<StoredVault>,
	current_vault: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredVault {
	name: String,
	path: PathBuf,
}

/// JSON registry file, by default at `<config_dir>/registry.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}
}

impl RegistryStore for FileStore {
	fn load(&self) -> Result<VaultRegistry> {
		let json = match fs::read_to_string(&self.path) {
			Ok(json) => json,
			Err(err) if err.kind() == ErrorKind::NotFound => {
				return Ok(VaultRegistry::default());
			}
			Err(err) => {
				return Err(err).with_context(|| {
					format!("failed to read vault registry at {}", self.path.display())
				});
			}
		};
		let file: RegistryFile = serde_json::from_str(&json).with_context(|| {
			format!("failed to parse vault registry at {}", self.path.display())
		})?;

		let vaults = file
			.vaults
			.into_iter()
			.map(|stored| {
				let config = match VaultConfig::read(&stored.path) {
					Ok(config) => Some(config),
					Err(err) => {
						tracing::debug!(
							path = %stored.path.display(),
							error = %err,
							"vault sidecar unreadable, continuing without it"
						);
						None
					}
				};
				Vault {
					name: stored.name,
					path: stored.path,
					config,
				}
			})
			.collect();

		Ok(VaultRegistry {
			vaults,
			current_vault_path: file.current_vault,
		})
	}

	fn save(&self, registry: &VaultRegistry) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).with_context(|| {
				format!("failed to create config directory {}", parent.display())
			})?;
		}

		let file = RegistryFile {
			vaults: registry
				.vaults
				.iter()
				.map(|vault| StoredVault {
					name: vault.name.clone(),
					path: vault.path.clone(),
				})
				.collect(),
			current_vault: registry.current_vault_path.clone(),
		};
		let mut json = serde_json::to_string_pretty(&file)?;
		json.push('\n');
		fs::write(&self.path, json).with_context(|| {
			format!("failed to write vault registry to {}", self.path.display())
		})?;
		tracing::debug!(path = %self.path.display(), vaults = registry.len(), "registry saved");
		Ok(())
	}
}
