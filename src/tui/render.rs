use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::flow::{FlowState, VaultEntry, VaultFlow};
use super::theme::Theme;

const LISTING_HELP: &str = "↑/↓ move · enter select · D delete · q quit";
const PICKER_HELP: &str = "type to filter · ↑/↓ move · enter confirm · esc back";
const NAMING_HELP: &str = "enter confirm · esc back";

impl VaultFlow<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame, theme: &Theme) {
		match &mut self.state {
			FlowState::Listing => {
				draw_listing(frame, theme, &self.entries, self.selected);
			}
			FlowState::PickingDirectory(picker) => {
				let [header, input, list, help] = screen_layout(frame.area());
				frame.render_widget(
					Paragraph::new("Where should the vault live?").style(theme.header),
					header,
				);
				picker.input.render(frame, input);

				let items: Vec<ListItem> = picker
					.candidates
					.iter()
					.map(|dir| {
						ListItem::new(truncate_left(
							&dir.display().to_string(),
							list.width.saturating_sub(2) as usize,
						))
					})
					.collect();
				let mut state = ListState::default().with_selected(Some(picker.highlighted));
				frame.render_stateful_widget(
					List::new(items)
						.style(theme.item)
						.highlight_style(theme.selected),
					list,
					&mut state,
				);

				let footer = match &picker.last_error {
					Some(err) => Line::from(Span::styled(err.to_string(), theme.error)),
					None => Line::from(Span::styled(PICKER_HELP, theme.help)),
				};
				frame.render_widget(Paragraph::new(footer), help);
			}
			FlowState::NamingVault { path } => {
				let [header, input, list, help] = screen_layout(frame.area());
				frame.render_widget(
					Paragraph::new("Name the new vault").style(theme.header),
					header,
				);
				self.name_input.render(frame, input);
				frame.render_widget(
					Paragraph::new(Span::styled(
						truncate_left(&path.display().to_string(), list.width as usize),
						theme.help,
					)),
					list,
				);

				let footer = match &self.name_error {
					Some(err) => Line::from(Span::styled(err.to_string(), theme.error)),
					None => Line::from(Span::styled(NAMING_HELP, theme.help)),
				};
				frame.render_widget(Paragraph::new(footer), help);
			}
			FlowState::ConfirmingDeletion { index } => {
				let index = *index;
				draw_listing(frame, theme, &self.entries, self.selected);
				draw_confirm_dialog(frame, theme, &self.entries, index);
			}
			FlowState::Done(_) => {}
		}
	}
}

fn draw_listing(frame: &mut Frame, theme: &Theme, entries: &[VaultEntry], selected: usize) {
	let [header, _, list, help] = screen_layout(frame.area());
	frame.render_widget(Paragraph::new("Select a vault").style(theme.header), header);

	let width = list.width.saturating_sub(2) as usize;
	let items: Vec<ListItem> = entries
		.iter()
		.map(|entry| match entry {
			VaultEntry::Vault { name, path } => {
				let line = format!("{name}  {}", path.display());
				ListItem::new(truncate_left(&line, width))
			}
			VaultEntry::CreateAction => {
				ListItem::new(Span::styled("+ Create New Vault", theme.action))
			}
		})
		.collect();

	let mut state = ListState::default().with_selected(Some(selected));
	frame.render_stateful_widget(
		List::new(items)
			.style(theme.item)
			.highlight_style(theme.selected),
		list,
		&mut state,
	);

	frame.render_widget(
		Paragraph::new(Span::styled(LISTING_HELP, theme.help)),
		help,
	);
}

fn draw_confirm_dialog(frame: &mut Frame, theme: &Theme, entries: &[VaultEntry], index: usize) {
	let name = match entries.get(index) {
		Some(VaultEntry::Vault { name, .. }) => name.as_str(),
		_ => return,
	};

	let area = centered_rect(frame.area(), 50, 5);
	frame.render_widget(Clear, area);

	let body = vec![
		Line::from(Span::styled(
			format!("Delete vault \"{name}\" from the registry?"),
			theme.header,
		)),
		Line::from(Span::styled("The notes on disk are kept.", theme.help)),
		Line::from(Span::styled("y confirm · n cancel", theme.help)),
	];
	frame.render_widget(
		Paragraph::new(body)
			.alignment(Alignment::Center)
			.block(Block::bordered().border_style(theme.error)),
		area,
	);
}

fn screen_layout(area: Rect) -> [Rect; 4] {
	Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(3),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(area)
}

/// Fit `text` into `width` columns, keeping the tail and replacing the cut
/// head with an ellipsis. Paths are more recognizable from the right.
fn truncate_left(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let budget = width - 1;
	let mut tail_width = 0;
	let mut start = text.len();
	for (idx, ch) in text.char_indices().rev() {
		let ch_width = ch.width().unwrap_or(0);
		if tail_width + ch_width > budget {
			break;
		}
		tail_width += ch_width;
		start = idx;
	}
	format!("…{}", &text[start..])
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}
