use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::state::{AppState, InputMode, Panel};
use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, state: &AppState) {
    let help_items = get_help_items(state);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    // Screen-specific help
    match state.current_screen() {
        Screen::Dashboard => {
            items.push(("Tab", "Switch between employees and leave requests"));
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("/", "Search the focused panel"));
            if *state.focused_input_mode() == InputMode::Filter {
                items.push(("Type", "Search by name or id"));
                items.push(("Enter", "Exit search (keep results)"));
                items.push(("Esc", "Clear search"));
                items.push(("Backspace", "Delete last character"));
            }
            items.push(("e", "Add employee"));
            items.push(("n", "Apply for leave"));
            if state.focus == Panel::Leaves {
                items.push(("a", "Approve selected pending request"));
                items.push(("x", "Reject selected pending request"));
            }
            items.push(("s", "Monthly summary"));
            items.push(("r", "Refresh employees and leave requests"));
        }
        Screen::Summary(..) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("s", "Query another month"));
            items.push(("r", "Reload summary"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
        }
    }

    // Global help
    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("h/←", "Navigate back"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "Navigate to top of list"));
    items.push(("G", "Navigate to bottom of list"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}
