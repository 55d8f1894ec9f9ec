//! Filesystem path helpers shared by the vault flow and the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use directories::UserDirs;

use crate::vault::VaultError;

/// Return the user's home directory.
///
/// Fails with [`VaultError::Environment`] when the home directory cannot be
/// determined; callers decide whether to degrade or surface the error.
pub fn home_dir() -> Result<PathBuf, VaultError> {
	UserDirs::new()
		.map(|dirs| dirs.home_dir().to_path_buf())
		.ok_or(VaultError::Environment)
}

/// Expand a leading `~` to the user's home directory.
///
/// Inputs without the marker are returned unchanged. The error is propagated,
/// never silently defaulted, so that user-typed paths are not rewritten to an
/// unexpected location.
pub fn expand_path(input: &str) -> Result<PathBuf, VaultError> {
	if input.starts_with('~') {
		expand_with_home(input, &home_dir()?)
	} else {
		Ok(PathBuf::from(input))
	}
}

fn expand_with_home(input: &str, home: &Path) -> Result<PathBuf, VaultError> {
	let rest = &input[1..];
	// `Path::join` would discard `home` for a rooted right-hand side.
	let rest = rest.strip_prefix('/').unwrap_or(rest);
	if rest.is_empty() {
		Ok(home.to_path_buf())
	} else {
		Ok(home.join(rest))
	}
}

/// List the immediate subdirectories of `base`, sorted lexicographically by
/// full path.
///
/// Any read failure (missing directory, permission denied) degrades to a
/// single-element list containing `base` itself: the listing is a browsing
/// aid, and an empty dead-end screen would be worse than a stale one.
pub fn list_subdirectories(base: &Path) -> Vec<PathBuf> {
	let Ok(entries) = fs::read_dir(base) else {
		return vec![base.to_path_buf()];
	};

	let mut dirs: Vec<PathBuf> = entries
		.filter_map(Result::ok)
		.filter(|entry| entry.file_type().map(|ty| ty.is_dir()).unwrap_or(false))
		.map(|entry| base.join(entry.file_name()))
		.collect();
	dirs.sort();
	dirs
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::Path;

	use super::*;

	#[test]
	fn expand_leaves_plain_paths_untouched() {
		let expanded = expand_path("/var/notes").expect("expand");
		assert_eq!(expanded, Path::new("/var/notes"));
	}

	#[test]
	fn expand_joins_home_for_tilde_prefix() {
		let home = Path::new("/home/u");
		assert_eq!(
			expand_with_home("~/notes", home).expect("expand"),
			Path::new("/home/u/notes")
		);
		assert_eq!(expand_with_home("~", home).expect("expand"), home);
	}

	#[test]
	fn subdirectories_are_sorted_and_exclude_files() {
		let tmp = tempfile::tempdir().expect("tempdir");
		fs::create_dir(tmp.path().join("beta")).expect("mkdir");
		fs::create_dir(tmp.path().join("alpha")).expect("mkdir");
		fs::write(tmp.path().join("note.md"), "x").expect("write");

		let dirs = list_subdirectories(tmp.path());
		assert_eq!(
			dirs,
			vec![tmp.path().join("alpha"), tmp.path().join("beta")]
		);
	}

	#[test]
	fn unreadable_base_degrades_to_itself() {
		let missing = Path::new("/definitely/not/a/real/dir");
		assert_eq!(list_subdirectories(missing), vec![missing.to_path_buf()]);
	}
}
