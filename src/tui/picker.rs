//! Directory picker: a self-contained sub-state-machine for choosing a
//! filesystem directory by typing a path prefix or navigating a live-filtered
//! list of subdirectories.

use std::path::{Path, PathBuf};

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::paths;
use crate::tui::input::TextInput;
use crate::vault::VaultError;

/// Terminal result of the picker, read once by the owning flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerResult {
	Chosen(PathBuf),
	Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PickerState {
	Browsing,
	Resolved(PickerResult),
}

/// Nested state machine for choosing a directory.
///
/// A fresh instance is created on each entry into creation mode, so no state
/// leaks between attempts.
pub struct DirectoryPicker<'a> {
	pub(crate) input: TextInput<'a>,
	/// Unfiltered listing of the initial root, shown while the input is empty.
	root_dirs: Vec<PathBuf>,
	/// Directory to list when the typed path's parent is the filesystem root
	/// or unresolvable.
	fallback_root: PathBuf,
	pub(crate) candidates: Vec<PathBuf>,
	pub(crate) highlighted: usize,
	pub(crate) last_error: Option<VaultError>,
	state: PickerState,
}

impl<'a> DirectoryPicker<'a> {
	/// Picker rooted at the user's home directory, falling back to `/` when
	/// the home directory cannot be determined. Browsing is best-effort;
	/// confirm-time expansion still reports the environment error.
	pub fn new() -> Self {
		let root = paths::home_dir().unwrap_or_else(|_| PathBuf::from("/"));
		Self::with_root(root)
	}

	/// Picker rooted at an explicit directory.
	pub fn with_root(root: PathBuf) -> Self {
		let root_dirs = paths::list_subdirectories(&root);
		Self {
			input: TextInput::new("~/Documents"),
			candidates: root_dirs.clone(),
			root_dirs,
			fallback_root: root,
			highlighted: 0,
			last_error: None,
			state: PickerState::Browsing,
		}
	}

	/// Process one key event. No-op once the picker has resolved.
	pub fn handle_key(&mut self, key: KeyEvent) {
		if self.state != PickerState::Browsing {
			return;
		}
		match key.code {
			KeyCode::Esc => {
				self.state = PickerState::Resolved(PickerResult::Cancelled);
			}
			KeyCode::Enter => self.confirm(),
			KeyCode::Up => {
				self.highlighted = self.highlighted.saturating_sub(1);
			}
			KeyCode::Down => {
				if self.highlighted + 1 < self.candidates.len() {
					self.highlighted += 1;
				}
			}
			_ => {
				if self.input.input(key) {
					self.refilter();
				}
			}
		}
	}

	/// The terminal result, once reached.
	pub fn resolved(&self) -> Option<PickerResult> {
		match &self.state {
			PickerState::Resolved(result) => Some(result.clone()),
			PickerState::Browsing => None,
		}
	}

	fn confirm(&mut self) {
		if let Some(path) = self.candidates.get(self.highlighted) {
			self.state = PickerState::Resolved(PickerResult::Chosen(path.clone()));
			return;
		}

		// No candidates: fall back to the raw input text.
		let raw = self.input.text().to_string();
		if raw.is_empty() {
			self.last_error = Some(VaultError::Validation("path cannot be empty".to_string()));
			return;
		}
		match paths::expand_path(&raw) {
			Ok(path) => {
				self.state = PickerState::Resolved(PickerResult::Chosen(path));
			}
			Err(err) => {
				self.last_error = Some(err);
			}
		}
	}

	fn refilter(&mut self) {
		self.last_error = None;
		let typed = self.input.text().to_string();
		self.candidates = self.filter_candidates(&typed);
		self.clamp_highlight();
	}

	/// Candidates whose full path starts with the expanded input, listed from
	/// the parent of the typed path. A trailing separator descends instead:
	/// the typed directory itself is listed, and every child shares the typed
	/// prefix. A non-empty input that matches nothing yields a single
	/// synthetic entry equal to the expanded text, treating it as a literal
	/// target that may not exist yet.
	fn filter_candidates(&self, typed: &str) -> Vec<PathBuf> {
		if typed.is_empty() {
			return self.root_dirs.clone();
		}

		let base = paths::expand_path(typed).unwrap_or_else(|_| PathBuf::from(typed));
		let parent = if typed.ends_with(std::path::MAIN_SEPARATOR) {
			base.clone()
		} else {
			match base.parent() {
				Some(parent) if parent != Path::new("/") && !parent.as_os_str().is_empty() => {
					parent.to_path_buf()
				}
				_ => self.fallback_root.clone(),
			}
		};

		let prefix = base.to_string_lossy().into_owned();
		let mut filtered: Vec<PathBuf> = paths::list_subdirectories(&parent)
			.into_iter()
			.filter(|dir| dir.to_string_lossy().starts_with(&prefix))
			.collect();
		if filtered.is_empty() {
			filtered.push(base);
		}
		filtered
	}

	fn clamp_highlight(&mut self) {
		if self.candidates.is_empty() {
			self.highlighted = 0;
		} else if self.highlighted >= self.candidates.len() {
			self.highlighted = self.candidates.len() - 1;
		}
	}
}
