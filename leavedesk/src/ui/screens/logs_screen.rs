use ratatui::{
    prelude::*,
    widgets::{Row, Table},
};
use tracing::Level;

use crate::log_buffer::{LogBuffer, LogEntry};
use crate::state::{LoadingState, LogsState};
use crate::ui::{
    components::{
        empty_state::{self, panel_block},
        help_bar, screen_title,
    },
    layouts, theme,
};

const TARGET_WIDTH: usize = 25;

pub fn render(f: &mut Frame, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = format!("Session Logs ({} entries)", state.total_entries);
    screen_title::render_screen_title(f, title_area, &title, &LoadingState::NotStarted);
    render_logs(f, content_area, state, log_buffer);
    render_help(f, help_area, state);
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let entries = log_buffer.get_entries();
    let total = entries.len();

    if total == 0 {
        empty_state::render_empty_state(f, area, panel_block("Logs", true), "No logs yet", None);
        return;
    }

    // Newest entries sit at the bottom; the offset counts rows scrolled up from there
    let inner_height = area.height.saturating_sub(4) as usize;
    let end = total.saturating_sub(state.scroll_offset);
    let start = end.saturating_sub(inner_height);

    let rows: Vec<Row> = entries[start..end].iter().map(log_row).collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(TARGET_WIDTH as u16),
        Constraint::Min(30),
    ];

    let table = Table::new(rows, widths)
        .block(panel_block(
            format!(" Logs [{}-{} of {}] ", start + 1, end, total),
            true,
        ))
        .header(
            Row::new(vec!["Time", "Level", "Target", "Message"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

fn log_row(entry: &LogEntry) -> Row<'static> {
    let (level_str, level_style) = match entry.level {
        Level::ERROR => ("ERROR", theme::error_style()),
        Level::WARN => ("WARN ", Style::default().fg(theme::COLOR_LOADING)),
        Level::INFO => ("INFO ", Style::default().fg(theme::COLOR_SUCCESS)),
        Level::DEBUG => ("DEBUG", Style::default().fg(Color::Blue)),
        Level::TRACE => ("TRACE", Style::default().fg(theme::COLOR_MUTED)),
    };

    Row::new(vec![
        entry.timestamp.format("%H:%M:%S%.3f").to_string(),
        level_str.to_string(),
        truncate_target(&entry.target, TARGET_WIDTH),
        entry.message.clone(),
    ])
    .style(level_style)
}

fn render_help(f: &mut Frame, area: Rect, state: &LogsState) {
    let scroll_info = if state.scroll_offset > 0 {
        format!(" (scrolled {} from bottom)", state.scroll_offset)
    } else {
        String::new()
    };

    let help_text = format!(
        "j/k: scroll | G: bottom | gg: top | PgUp/PgDn: page | h: back | ?: help{}",
        scroll_info
    );

    help_bar::render_help_bar(f, area, &help_text);
}

/// Keep the tail of long module paths, which is the informative part
fn truncate_target(target: &str, max_len: usize) -> String {
    let len = target.chars().count();
    if len <= max_len {
        target.to_string()
    } else {
        let tail: String = target.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}
