//! Non-interactive vault subcommands.

use std::fs;

use anyhow::{Context, Result, bail};

use noted::paths;
use noted::registry::RegistryStore;
use noted::vault::{Vault, VaultConfig};

/// Print all registered vaults with 1-based indices, marking the current one.
pub(crate) fn list(store: &dyn RegistryStore) -> Result<()> {
	let registry = store.load()?;
	if registry.is_empty() {
		println!("No vaults registered. Run `noted` to create one.");
		return Ok(());
	}

	let current = registry.current().map(|vault| vault.path.clone());
	for (position, vault) in registry.vaults.iter().enumerate() {
		let marker = if current.as_deref() == Some(vault.path.as_path()) {
			"*"
		} else {
			" "
		};
		println!(
			"{marker} {}. {} ({})",
			position + 1,
			vault.name,
			vault.path.display()
		);
	}
	Ok(())
}

/// Print the current vault. A stale pointer is reported, not an error.
pub(crate) fn current(store: &dyn RegistryStore) -> Result<()> {
	let registry = store.load()?;
	match registry.current() {
		Some(vault) => println!("{} ({})", vault.name, vault.path.display()),
		None if registry.current_vault_path.is_empty() => println!("No current vault set"),
		None => println!(
			"Current vault {} not found in vaults list",
			registry.current_vault_path
		),
	}
	Ok(())
}

/// Create and register a vault at `raw_path`, then make it current. The
/// directory is created if missing; an already-registered path is only made
/// current.
pub(crate) fn create(store: &dyn RegistryStore, raw_path: &str) -> Result<()> {
	let path = paths::expand_path(raw_path)?;

	let mut registry = store.load()?;
	if registry.contains_path(&path) {
		registry.current_vault_path = path.to_string_lossy().into_owned();
		store.save(&registry)?;
		println!("Vault at {} already registered; set as current", path.display());
		return Ok(());
	}

	fs::create_dir_all(&path)
		.with_context(|| format!("failed to create vault directory {}", path.display()))?;

	let name = path
		.file_name()
		.and_then(|segment| segment.to_str())
		.unwrap_or("vault")
		.to_string();
	let config = VaultConfig::for_new_vault(&name, &path);
	config.write(&path)?;

	let mut vault = Vault::new(name, path);
	vault.config = Some(config);
	registry.current_vault_path = vault.path.to_string_lossy().into_owned();
	registry.add(vault.clone());
	store.save(&registry)?;
	tracing::info!(path = %vault.path.display(), "vault created");

	println!("Created vault {} ({})", vault.name, vault.path.display());
	Ok(())
}

/// Set the current vault by display name or 1-based index.
pub(crate) fn open(store: &dyn RegistryStore, target: &str) -> Result<()> {
	let mut registry = store.load()?;
	let found = match target.parse::<usize>() {
		Ok(index) => registry.by_index(index),
		Err(_) => registry.by_name(target),
	};
	let Some(vault) = found else {
		bail!("no vault named or numbered '{target}'");
	};

	let (name, path) = (vault.name.clone(), vault.path.clone());
	registry.current_vault_path = path.to_string_lossy().into_owned();
	store.save(&registry)?;

	println!("Current vault: {name} ({})", path.display());
	Ok(())
}
