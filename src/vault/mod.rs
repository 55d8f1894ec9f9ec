//! Vault data model and error kinds.
//!
//! A vault is a user-designated directory of notes plus a small sidecar
//! configuration file stored inside it. Vault identity is the directory path;
//! the name is a display label and is not guaranteed unique.

mod config;

use std::path::PathBuf;

use thiserror::Error;

pub use config::{
	DEFAULT_IGNORE_PATTERNS, DEFAULT_SUPPORTED_TYPES, SIDECAR_FILE, VaultConfig,
};

/// Error kinds surfaced by vault and path operations.
#[derive(Debug, Error)]
pub enum VaultError {
	/// The home directory could not be determined.
	#[error("could not determine home directory")]
	Environment,
	/// Recoverable user-input problem; re-prompt instead of aborting.
	#[error("{0}")]
	Validation(String),
	/// Directory creation or sidecar write failed.
	#[error("{context}")]
	Filesystem {
		context: String,
		#[source]
		source: std::io::Error,
	},
}

impl VaultError {
	pub(crate) fn filesystem(context: impl Into<String>, source: std::io::Error) -> Self {
		Self::Filesystem {
			context: context.into(),
			source,
		}
	}
}

/// A registered vault: display name, directory path, and the sidecar
/// configuration when it could be read.
#[derive(Debug, Clone, PartialEq)]
pub struct Vault {
	pub name: String,
	pub path: PathBuf,
	pub config: Option<VaultConfig>,
}

impl Vault {
	pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
			config: None,
		}
	}

	/// Location of this vault's sidecar configuration file.
	pub fn config_path(&self) -> PathBuf {
		VaultConfig::sidecar_path(&self.path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_path_is_inside_the_vault_directory() {
		let vault = Vault::new("Work", "/home/u/notes");
		assert_eq!(
			vault.config_path(),
			PathBuf::from("/home/u/notes").join(SIDECAR_FILE)
		);
	}
}
