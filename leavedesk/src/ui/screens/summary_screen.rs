use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};

use crate::state::{LoadingState, SummaryState};
use crate::ui::{
    components::{
        empty_state::{self, panel_block},
        help_bar, screen_title,
        status_badge::StatusBadge,
    },
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &SummaryState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = match state.employee_id {
        Some(employee_id) => format!(
            "Monthly Summary: employee {} ({:04}-{:02})",
            employee_id, state.year, state.month
        ),
        None => "Monthly Summary".to_string(),
    };
    screen_title::render_screen_title(f, title_area, &title, &state.loading);

    render_content(f, content_area, state);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_SUMMARY);
}

fn render_content(f: &mut Frame, area: Rect, state: &SummaryState) {
    let block = panel_block("Leave Records", true);

    match &state.loading {
        LoadingState::Error(error) => {
            empty_state::render_error_state(f, area, block, error);
            return;
        }
        LoadingState::Loading(_) if state.rows.is_empty() => {
            empty_state::render_loading_state(f, area, block, "Loading summary...");
            return;
        }
        _ => {}
    }

    if state.rows.is_empty() {
        empty_state::render_empty_state(f, area, block, "No records for this period", None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Type"),
        Cell::from(Text::from("Days").right_aligned()),
        Cell::from("Status"),
        Cell::from("Applied On"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.request_id.to_string()),
                Cell::from(utils::or_dash(row.leave_type.as_deref())),
                Cell::from(Text::from(utils::format_days(row.days)).right_aligned()),
                Cell::from(StatusBadge::span(row.status.as_deref())),
                Cell::from(row.applied_on.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(10),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}
