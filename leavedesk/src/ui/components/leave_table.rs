use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};

use crate::state::{LeavesPanel, LoadingState};
use crate::ui::{
    components::{
        empty_state::{self, panel_block},
        status_badge::StatusBadge,
    },
    theme, utils,
};
use leave_api::endpoints::leave::LeaveRequest;

/// Action cell for requests still awaiting a decision
pub const ACTION_CONTROLS: &str = "[a] Approve  [x] Reject";

pub fn render(f: &mut Frame, area: Rect, panel: &LeavesPanel, focused: bool) {
    let filtered = panel.filtered_leaves();

    let title = if panel.filter_query.is_empty() {
        "Leave Requests".to_string()
    } else {
        format!("Leave Requests ({} filtered)", filtered.len())
    };
    let block = panel_block(title, focused);

    if let LoadingState::Error(error) = &panel.loading {
        empty_state::render_error_state(f, area, block, error);
        return;
    }

    if panel.loading.is_loading() {
        empty_state::render_loading_state(f, area, block, "Loading leave requests...");
        return;
    }

    if filtered.is_empty() {
        let message = if panel.filter_query.is_empty() {
            "No leaves yet"
        } else {
            "No matching leave requests"
        };
        empty_state::render_empty_state(f, area, block, message, None);
        return;
    }

    let header = Row::new(vec![
        "ID", "Emp", "Type", "Start", "End", "Days", "Status", "Action",
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = filtered.iter().map(|leave| leave_row(leave)).collect();

    let highlight = if focused {
        theme::selection_style()
    } else {
        Style::default()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(4),
            Constraint::Length(9),
            Constraint::Length(ACTION_CONTROLS.len() as u16),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(highlight);

    f.render_stateful_widget(table, area, &mut panel.table_state.borrow_mut());
}

fn leave_row(leave: &LeaveRequest) -> Row<'static> {
    let action = if leave.is_pending() {
        Cell::from(ACTION_CONTROLS).style(theme::help_text_style())
    } else {
        Cell::from("")
    };

    Row::new(vec![
        Cell::from(leave.request_id.to_string()),
        Cell::from(leave.employee_id.to_string()),
        Cell::from(utils::or_dash(leave.leave_type.as_deref())),
        Cell::from(utils::format_date(leave.start_date)),
        Cell::from(utils::format_date(leave.end_date)),
        Cell::from(Text::from(utils::format_days(leave.days)).right_aligned()),
        Cell::from(StatusBadge::span(leave.status.as_deref())),
        action,
    ])
}
