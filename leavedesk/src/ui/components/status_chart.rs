//! Bar chart of leave request statuses.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup},
};

use crate::state::chart::StatusChart;
use crate::ui::{components::empty_state::panel_block, theme};

/// Draw the chart's live instance. Nothing is counted here; the counts were
/// taken when the instance was created.
pub fn render(f: &mut Frame, area: Rect, chart: &StatusChart) {
    let block = panel_block("Status", false);

    let Some(instance) = chart.instance() else {
        f.render_widget(block, area);
        return;
    };

    let colors = [
        theme::COLOR_PENDING,
        theme::COLOR_APPROVED,
        theme::COLOR_REJECTED,
    ];

    let bars: Vec<Bar> = instance
        .counts
        .bars()
        .into_iter()
        .zip(colors)
        .map(|((label, value), color)| {
            Bar::default()
                .value(value)
                .label(Line::from(label))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let bar_chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(3);

    f.render_widget(bar_chart, area);
}
