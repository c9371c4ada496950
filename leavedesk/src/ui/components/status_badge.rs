//! Colored status badge for leave requests and summary rows.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Pending,
    Approved,
    Rejected,
}

impl StatusBadge {
    /// Match a status case-insensitively. Anything unrecognized, including a
    /// missing status, is shown as pending.
    pub fn from_status(status: Option<&str>) -> Self {
        match status.map(str::to_lowercase).as_deref() {
            Some("approved") => Self::Approved,
            Some("rejected") => Self::Rejected,
            _ => Self::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn style(&self) -> Style {
        let color = match self {
            Self::Pending => theme::COLOR_PENDING,
            Self::Approved => theme::COLOR_APPROVED,
            Self::Rejected => theme::COLOR_REJECTED,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Always one of the three fixed labels, whatever the service sent
    pub fn span(status: Option<&str>) -> Span<'static> {
        let badge = Self::from_status(status);
        Span::styled(badge.label(), badge.style())
    }
}
