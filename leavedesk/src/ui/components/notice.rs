use ratatui::{prelude::*, widgets::Paragraph};

use crate::state::{Notice, NoticeKind};
use crate::ui::theme;

/// One-line banner for the latest write result. Draws nothing when there is no notice.
pub fn render(f: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Success => theme::COLOR_SUCCESS,
        NoticeKind::Error => theme::COLOR_ERROR,
    };

    let paragraph = Paragraph::new(Span::styled(
        notice.text.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
