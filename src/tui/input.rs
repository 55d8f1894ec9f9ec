//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::TextArea;

/// Thin wrapper that keeps the textarea configured for one-line entry.
///
/// Navigation and confirm/cancel keys are intercepted by the owning state
/// machine before they reach [`TextInput::input`], so the buffer never grows
/// a second line.
pub struct TextInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> TextInput<'a> {
	pub fn new(placeholder: &str) -> Self {
		let mut textarea = TextArea::default();
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(placeholder);
		textarea.set_block(Block::bordered());
		Self { textarea }
	}

	/// The current buffer contents.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the buffer, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		self.textarea.select_all();
		self.textarea.cut();
		self.textarea.insert_str(text);
	}

	/// Feed a key event into the buffer. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_to_the_buffer() {
		let mut input = TextInput::new("");
		assert!(input.input(key(KeyCode::Char('h'))));
		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "hi");

		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "h");
	}

	#[test]
	fn set_text_replaces_previous_contents() {
		let mut input = TextInput::new("");
		input.set_text("first");
		input.set_text("second");
		assert_eq!(input.text(), "second");

		input.input(key(KeyCode::Char('!')));
		assert_eq!(input.text(), "second!");
	}
}
