use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::state::forms::FormState;
use crate::ui::{layouts, theme};

const LABEL_WIDTH: usize = 15;

pub fn render_form_popup(f: &mut Frame, form: &FormState) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::FORM,
        form.kind.title(),
        theme::info_border_style(),
    );

    let mut lines: Vec<Line> = vec![Line::from("")];

    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focused;
        let label = Span::styled(
            format!("{:>width$}: ", field.label, width = LABEL_WIDTH),
            theme::header_style(),
        );

        let value = if field.value.is_empty() && !focused {
            Span::styled(field.placeholder.to_string(), theme::placeholder_style())
        } else if focused {
            Span::styled(format!("{}█", field.value), theme::form_field_focused_style())
        } else {
            Span::styled(field.value.clone(), theme::form_field_style())
        };

        lines.push(Line::from(vec![label, value]));
        lines.push(Line::from(""));
    }

    if let Some(error) = &form.validation_error {
        lines.push(Line::from(Span::styled(error.as_str(), theme::error_style())));
    } else if form.submitting {
        lines.push(Line::from(Span::styled("Submitting...", theme::loading_style())));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab/↓: next field | Shift+Tab/↑: previous | Enter: submit | Esc: cancel",
        theme::help_text_style(),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner);
}
