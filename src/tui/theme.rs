//! Color themes for the vault flow screens.
//!
//! Themes are purely a rendering concern: the state machines never inspect
//! styles, so swapping themes cannot change flow behavior.

use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the vault flow screens.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Screen titles and prompts.
	pub header: Style,
	/// Unselected list rows.
	pub item: Style,
	/// The highlighted list row.
	pub selected: Style,
	/// The synthetic "Create New Vault" entry.
	pub action: Style,
	/// Help bars and secondary text such as vault paths.
	pub help: Style,
	pub error: Style,
}

fn slate() -> Theme {
	Theme {
		header: Style::new()
			.fg(Color::Indexed(63))
			.add_modifier(Modifier::BOLD),
		item: Style::new(),
		selected: Style::new()
			.fg(Color::Indexed(230))
			.bg(Color::Indexed(63))
			.add_modifier(Modifier::BOLD),
		action: Style::new()
			.fg(Color::Indexed(99))
			.add_modifier(Modifier::BOLD),
		help: Style::new().fg(Color::Indexed(245)),
		error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
	}
}

fn light() -> Theme {
	Theme {
		header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
		item: Style::new().fg(Color::Black),
		selected: Style::new()
			.fg(Color::White)
			.bg(Color::Blue)
			.add_modifier(Modifier::BOLD),
		action: Style::new()
			.fg(Color::Magenta)
			.add_modifier(Modifier::BOLD),
		help: Style::new().fg(Color::DarkGray),
		error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
	}
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	match name {
		"slate" | "default" => Some(slate()),
		"light" => Some(light()),
		_ => None,
	}
}

/// Names of the built-in themes, in display order.
#[must_use]
pub fn names() -> &'static [&'static str] {
	&["slate", "light"]
}
