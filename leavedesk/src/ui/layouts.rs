//! Reusable layout builders for consistent screen structure.
//!
//! These functions provide standard layouts that all screens should use
//! to ensure consistent margins, spacing, and element positioning.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    CHART_HEIGHT, EMPLOYEE_PANEL_PERCENT, FILTER_INPUT_HEIGHT, HELP_BAR_HEIGHT, NOTICE_HEIGHT,
    SCREEN_MARGIN, SUMMARY_CARD_HEIGHT, TITLE_HEIGHT,
};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Areas of the dashboard, top to bottom
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub title: Rect,
    pub filter: Option<Rect>,
    pub cards: Rect,
    pub employees: Rect,
    pub leaves: Rect,
    pub chart: Rect,
    pub notice: Rect,
    pub help: Rect,
}

/// Dashboard layout: title, optional filter input, cards, the two panels with
/// the chart under the leave table, a notice line and the help bar.
pub fn dashboard_layout(area: Rect, with_filter: bool) -> DashboardAreas {
    let filter_height = if with_filter { FILTER_INPUT_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(filter_height),
            Constraint::Length(SUMMARY_CARD_HEIGHT),
            Constraint::Min(8),
            Constraint::Length(NOTICE_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(EMPLOYEE_PANEL_PERCENT),
            Constraint::Percentage(100 - EMPLOYEE_PANEL_PERCENT),
        ])
        .split(chunks[3]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(CHART_HEIGHT)])
        .split(panels[1]);

    DashboardAreas {
        title: chunks[0],
        filter: with_filter.then_some(chunks[1]),
        cards: chunks[2],
        employees: panels[0],
        leaves: right[0],
        chart: right[1],
        notice: chunks[4],
        help: chunks[5],
    }
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub mod popup_sizes {
    /// Form popup (60% x 60%)
    pub const FORM: (u16, u16) = (60, 60);

    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}
