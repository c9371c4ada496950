//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a standard help bar with the given text.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_DASHBOARD: &str =
    "Tab: panel | /: search | e: add employee | n: apply leave | a/x: approve/reject | s: summary | r: refresh | ?: help";

pub const HELP_TEXT_FILTER: &str = "Type to search | Enter: keep | Esc: clear";

pub const HELP_TEXT_SUMMARY: &str = "j/k: select | s: new query | r: reload | h: back | ?: help";
