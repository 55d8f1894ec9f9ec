//! Terminal runtime and event loop for the vault flow.

use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::registry::VaultRegistry;
use crate::tui::flow::{FlowOutcome, VaultFlow};
use crate::tui::theme::Theme;

/// Run the vault flow to completion on the real terminal.
///
/// Returns the mutated registry alongside the outcome so the caller can
/// persist registry edits (deletions in particular) regardless of how the
/// flow ended.
pub fn run(registry: VaultRegistry, theme: &Theme) -> Result<(VaultRegistry, FlowOutcome)> {
	let mut terminal = ratatui::init();
	let result = event_loop(&mut terminal, registry, theme);
	ratatui::restore();
	result
}

fn event_loop(
	terminal: &mut DefaultTerminal,
	registry: VaultRegistry,
	theme: &Theme,
) -> Result<(VaultRegistry, FlowOutcome)> {
	let mut flow = VaultFlow::new(registry);

	loop {
		terminal.draw(|frame| flow.draw(frame, theme))?;

		if flow.outcome().is_some() {
			return Ok(flow.finish());
		}

		if event::poll(Duration::from_millis(50))? {
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					flow.handle_key(key);
				}
				_ => {}
			}
		}
	}
}
