use ratatui::prelude::*;

use crate::state::{AppState, InputMode, Panel};
use crate::ui::{
    components::{
        dashboard_cards, employee_table, filter_input, help_bar, leave_table, loading_indicator,
        notice, screen_title, status_chart,
    },
    layouts,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let filtering = *state.focused_input_mode() == InputMode::Filter;
    let areas = layouts::dashboard_layout(f.area(), filtering);

    let loading =
        loading_indicator::combined([&state.employees.loading, &state.leaves.loading]);
    screen_title::render_screen_title(f, areas.title, "Leave Dashboard", &loading);

    if let Some(filter_area) = areas.filter {
        let query = match state.focus {
            Panel::Employees => &state.employees.filter_query,
            Panel::Leaves => &state.leaves.filter_query,
        };
        filter_input::render_filter_input(f, filter_area, state.focus, query);
    }

    dashboard_cards::render(f, areas.cards, &state.counts);

    employee_table::render(
        f,
        areas.employees,
        &state.employees,
        state.focus == Panel::Employees,
    );
    leave_table::render(
        f,
        areas.leaves,
        &state.leaves,
        state.focus == Panel::Leaves,
    );
    status_chart::render(f, areas.chart, &state.leaves.chart);

    notice::render(f, areas.notice, state.notice.as_ref());

    let help_text = if filtering {
        help_bar::HELP_TEXT_FILTER
    } else {
        help_bar::HELP_TEXT_DASHBOARD
    };
    help_bar::render_help_bar(f, areas.help, help_text);
}
