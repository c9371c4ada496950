//! Search input shown above the dashboard while a panel is in filter mode.

use ratatui::prelude::Rect;
use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::Panel;
use crate::ui::theme;

/// Render the search field for the focused panel with the current query.
pub fn render_filter_input(f: &mut Frame, area: Rect, panel: Panel, query: &str) {
    let target = match panel {
        Panel::Employees => "Search employees",
        Panel::Leaves => "Search leave requests",
    };

    let input = Paragraph::new(format!("{}█", query))
        .style(theme::loading_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (Enter: apply, Esc: clear)", target)),
        );

    f.render_widget(input, area);
}
