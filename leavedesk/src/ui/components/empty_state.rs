//! Shared empty state component for consistent "no data" messages.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render an empty state message with consistent styling.
///
/// Used when a list/table has no data to display.
///
/// # Arguments
/// * `block` - The panel block, so focus styling survives an empty panel
/// * `message` - The message to display (e.g., "No employees")
/// * `hint` - Optional hint text below the message
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    block: Block<'_>,
    message: &str,
    hint: Option<&str>,
) {
    render_message(f, area, block, message, theme::loading_style(), hint);
}

/// Render a loading state message with consistent styling.
///
/// Used when data is being loaded and no cached data exists.
pub fn render_loading_state(f: &mut Frame, area: Rect, block: Block<'_>, message: &str) {
    render_message(f, area, block, message, theme::loading_style(), None);
}

/// Render a failed load inline as "Error: {message}"
pub fn render_error_state(f: &mut Frame, area: Rect, block: Block<'_>, error: &str) {
    let message = format!("Error: {}", error);
    render_message(
        f,
        area,
        block,
        &message,
        theme::error_style(),
        Some("Press 'r' to retry"),
    );
}

fn render_message(
    f: &mut Frame,
    area: Rect,
    block: Block<'_>,
    message: &str,
    style: Style,
    hint: Option<&str>,
) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(message, style))];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint_text,
            theme::help_text_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(paragraph, area);
}

/// Bordered panel block with a title
pub fn panel_block(title: impl Into<String>, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.into())
        .border_style(theme::panel_border_style(focused))
}
