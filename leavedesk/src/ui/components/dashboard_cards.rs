use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::DashboardCounts;
use crate::ui::theme;

/// Headline cards: employee total and the three status counts
pub fn render(f: &mut Frame, area: Rect, counts: &DashboardCounts) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let cards = [
        ("Employees", counts.employees as u64, theme::COLOR_TITLE),
        ("Pending", counts.statuses.pending, theme::COLOR_PENDING),
        ("Approved", counts.statuses.approved, theme::COLOR_APPROVED),
        ("Rejected", counts.statuses.rejected, theme::COLOR_REJECTED),
    ];

    for ((label, value, color), area) in cards.into_iter().zip(card_chunks.iter()) {
        render_card(f, *area, &value.to_string(), label, color);
    }
}

fn render_card(f: &mut Frame, area: Rect, value: &str, label: &str, color: Color) {
    let block = Block::default().borders(Borders::ALL).title(label);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let paragraph = Paragraph::new(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}
