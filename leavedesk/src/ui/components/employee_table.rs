use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};

use crate::state::{EmployeesPanel, LoadingState};
use crate::ui::{
    components::empty_state::{self, panel_block},
    theme, utils,
};

pub fn render(f: &mut Frame, area: Rect, panel: &EmployeesPanel, focused: bool) {
    let filtered = panel.filtered_employees();

    let title = if panel.filter_query.is_empty() {
        "Employees".to_string()
    } else {
        format!("Employees ({} filtered)", filtered.len())
    };
    let block = panel_block(title, focused);

    if let LoadingState::Error(error) = &panel.loading {
        empty_state::render_error_state(f, area, block, error);
        return;
    }

    // Covers reloads too, not just the first load
    if panel.loading.is_loading() {
        empty_state::render_loading_state(f, area, block, "Loading employees...");
        return;
    }

    if filtered.is_empty() {
        let message = if panel.filter_query.is_empty() {
            "No employees"
        } else {
            "No matching employees"
        };
        empty_state::render_empty_state(f, area, block, message, None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from(Text::from("Balance").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = filtered
        .iter()
        .map(|employee| {
            Row::new(vec![
                Cell::from(employee.employee_id.to_string()),
                Cell::from(employee.name.clone()),
                Cell::from(
                    Text::from(utils::format_days(employee.total_leave_balance)).right_aligned(),
                ),
            ])
        })
        .collect();

    let highlight = if focused {
        theme::selection_style()
    } else {
        Style::default()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(highlight);

    f.render_stateful_widget(table, area, &mut panel.table_state.borrow_mut());
}
