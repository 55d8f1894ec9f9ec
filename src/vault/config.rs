//! Sidecar configuration written into each vault directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VaultError;

/// File name of the sidecar configuration inside a vault directory.
pub const SIDECAR_FILE: &str = "vault.json";

/// File extensions a fresh vault accepts.
pub const DEFAULT_SUPPORTED_TYPES: [&str; 2] = [".md", ".pdf"];

/// Glob patterns a fresh vault ignores.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 2] = [".git", "node_modules"];

/// Per-vault metadata stored at `<vault>/vault.json`.
///
/// The `templates_path`, `log_path`, and `history_path` fields are always
/// derived as subpaths of the owning vault directory at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultConfig {
	pub name: String,
	pub templates_path: PathBuf,
	pub log_path: PathBuf,
	pub history_path: PathBuf,
	pub supported_types: Vec<String>,
	pub ignore_patterns: Vec<String>,
	pub created_at: DateTime<Utc>,
	pub modified_at: DateTime<Utc>,
	pub metadata: BTreeMap<String, String>,
	pub settings: BTreeMap<String, serde_json::Value>,
}

impl VaultConfig {
	/// Build the default configuration for a vault being created now.
	pub fn for_new_vault(name: &str, vault_dir: &Path) -> Self {
		let now = Utc::now();
		Self {
			name: name.to_string(),
			templates_path: vault_dir.join("templates"),
			log_path: vault_dir.join("vault.log"),
			history_path: vault_dir.join("history.log"),
			supported_types: DEFAULT_SUPPORTED_TYPES.map(String::from).to_vec(),
			ignore_patterns: DEFAULT_IGNORE_PATTERNS.map(String::from).to_vec(),
			created_at: now,
			modified_at: now,
			metadata: BTreeMap::new(),
			settings: BTreeMap::new(),
		}
	}

	/// Location of the sidecar file for a vault rooted at `vault_dir`.
	pub fn sidecar_path(vault_dir: &Path) -> PathBuf {
		vault_dir.join(SIDECAR_FILE)
	}

	/// Write this configuration as pretty-printed JSON into `vault_dir`.
	pub fn write(&self, vault_dir: &Path) -> Result<PathBuf, VaultError> {
		let path = Self::sidecar_path(vault_dir);
		let mut json = serde_json::to_string_pretty(self).map_err(|err| {
			VaultError::filesystem(
				format!("failed to encode vault config for {}", path.display()),
				err.into(),
			)
		})?;
		json.push('\n');
		fs::write(&path, json).map_err(|err| {
			VaultError::filesystem(
				format!("failed to write vault config to {}", path.display()),
				err,
			)
		})?;
		Ok(path)
	}

	/// Read the sidecar configuration back from `vault_dir`.
	pub fn read(vault_dir: &Path) -> Result<Self, VaultError> {
		let path = Self::sidecar_path(vault_dir);
		let json = fs::read_to_string(&path).map_err(|err| {
			VaultError::filesystem(
				format!("failed to read vault config from {}", path.display()),
				err,
			)
		})?;
		serde_json::from_str(&json).map_err(|err| {
			VaultError::filesystem(
				format!("failed to parse vault config at {}", path.display()),
				err.into(),
			)
		})
	}
}
