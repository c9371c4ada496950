use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::forms::FormKind;
use crate::state::*;
use crate::ui::screens::Screen;
use leave_api::endpoints::Decision;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: An open form takes every key
    if state.form.is_some() {
        return handle_form_keys(event);
    }

    // Priority 2: Filter mode on the focused dashboard panel
    if state.is_on_dashboard() && *state.focused_input_mode() == InputMode::Filter {
        return match key {
            Key::Enter => Some(AppCommand::ExitFilterMode),
            Key::Backspace => Some(AppCommand::DeleteFilterChar),
            Key::Char(c) => Some(AppCommand::AppendFilterChar(c)),
            Key::Esc => Some(AppCommand::ClearFilter),
            _ => None,
        };
    }

    // Priority 3: Check if we're currently showing the help popup
    // This must come before screen-specific Esc handling so help popup takes precedence
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 4: Screen-specific Esc handling
    if matches!(key, Key::Esc) {
        return match state.current_screen() {
            Screen::Dashboard => {
                if focused_query(state).is_empty() && state.notice.is_some() {
                    Some(AppCommand::DismissNotice)
                } else {
                    Some(AppCommand::ClearFilter)
                }
            }
            Screen::Summary(..) | Screen::Logs(..) => Some(AppCommand::NavigateBack),
        };
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            // 'g' followed by 'g' -> navigate to top of table
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Navigate to bottom: 'G' (Shift+g)
        (_, Key::Char('G') | Key::End) => Some(AppCommand::NavigateToBottom),
        (_, Key::Home) => Some(AppCommand::NavigateToTop),

        // Global back navigation (left/h)
        (_, Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // Dashboard
        (Screen::Dashboard, Key::Tab | Key::BackTab) => Some(AppCommand::SwitchPanel),
        (Screen::Dashboard, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Dashboard, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Dashboard, Key::Char('/')) => Some(AppCommand::EnterFilterMode),
        (Screen::Dashboard, Key::Char('e')) => Some(AppCommand::OpenForm(FormKind::AddEmployee)),
        (Screen::Dashboard, Key::Char('n')) => Some(AppCommand::OpenForm(FormKind::ApplyLeave)),
        (Screen::Dashboard, Key::Char('s')) => {
            Some(AppCommand::OpenForm(FormKind::MonthlySummary))
        }
        (Screen::Dashboard, Key::Char('r')) => Some(AppCommand::Refresh),
        (Screen::Dashboard, Key::Char('a')) => decide_selected(state, Decision::Approved),
        (Screen::Dashboard, Key::Char('x')) => decide_selected(state, Decision::Rejected),

        // Summary screen
        (Screen::Summary(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Summary(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Summary(..), Key::Char('s')) => {
            Some(AppCommand::OpenForm(FormKind::MonthlySummary))
        }
        (Screen::Summary(..), Key::Char('r')) => Some(AppCommand::ReloadSummary),

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),

        // Ignore other keys
        _ => None,
    }
}

fn handle_form_keys(event: KeyEvent) -> Option<AppCommand> {
    match event.key {
        Key::Esc => Some(AppCommand::CloseForm),
        Key::Tab | Key::Down => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Enter => Some(AppCommand::SubmitForm),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),
        // Ctrl+U clears the field, readline style
        Key::Char('u') if event.modifiers.ctrl => Some(AppCommand::ClearFormField),
        Key::Char(_) if event.modifiers.ctrl => None,
        Key::Char(c) => Some(AppCommand::AppendFormFieldChar(c)),
        _ => None,
    }
}

/// Approve/reject only apply to a selected request that is still exactly "Pending"
fn decide_selected(state: &AppState, decision: Decision) -> Option<AppCommand> {
    if state.focus != Panel::Leaves {
        return None;
    }

    state
        .leaves
        .selected_leave()
        .filter(|leave| leave.is_pending())
        .map(|leave| AppCommand::UpdateLeaveStatus {
            request_id: leave.request_id,
            decision,
        })
}

fn focused_query(state: &AppState) -> &str {
    match state.focus {
        Panel::Employees => state.employees.filter_query.as_str(),
        Panel::Leaves => state.leaves.filter_query.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FormState;
    use chrono::NaiveDate;
    use leave_api::endpoints::leave::LeaveRequest;

    fn leave(id: i64, status: &str) -> LeaveRequest {
        LeaveRequest {
            request_id: id.into(),
            employee_id: 7.into(),
            leave_type: Some("Casual".to_string()),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            days: 3.0,
            status: Some(status.to_string()),
        }
    }

    /// Dashboard with the leaves panel focused and the first row selected
    fn leaves_state(leaves: Vec<LeaveRequest>) -> AppState {
        let mut state = AppState::new();
        state.focus = Panel::Leaves;
        state.leaves.leaves = leaves;
        state.leaves.clamp_selection();
        state
    }

    fn key(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    // ============================================================================
    // Global Commands
    // ============================================================================

    #[test]
    fn test_quit_command() {
        let state = AppState::new();
        assert_eq!(key(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_help_toggle() {
        let state = AppState::new();
        assert_eq!(key(&state, Key::Char('?')), Some(AppCommand::ToggleHelp));
    }

    #[test]
    fn test_help_visible_blocks_other_commands() {
        let mut state = AppState::new();
        state.help_visible = true;

        assert_eq!(key(&state, Key::Char('j')), None);
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::ToggleHelp));
        assert_eq!(key(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_g_sequences() {
        let mut state = AppState::new();
        assert_eq!(key(&state, Key::Char('g')), Some(AppCommand::SetPendingKey('g')));

        state.pending_key = Some('g');
        assert_eq!(key(&state, Key::Char('g')), Some(AppCommand::NavigateToTop));
        assert_eq!(key(&state, Key::Char('l')), Some(AppCommand::NavigateToLogs));
        assert_eq!(key(&state, Key::Char('z')), Some(AppCommand::ClearPendingKey));
    }

    // ============================================================================
    // Dashboard
    // ============================================================================

    #[test]
    fn test_dashboard_bindings() {
        let state = AppState::new();
        assert_eq!(key(&state, Key::Tab), Some(AppCommand::SwitchPanel));
        assert_eq!(key(&state, Key::Char('j')), Some(AppCommand::SelectNext));
        assert_eq!(key(&state, Key::Up), Some(AppCommand::SelectPrevious));
        assert_eq!(key(&state, Key::Char('/')), Some(AppCommand::EnterFilterMode));
        assert_eq!(key(&state, Key::Char('r')), Some(AppCommand::Refresh));
        assert_eq!(
            key(&state, Key::Char('e')),
            Some(AppCommand::OpenForm(FormKind::AddEmployee))
        );
        assert_eq!(
            key(&state, Key::Char('n')),
            Some(AppCommand::OpenForm(FormKind::ApplyLeave))
        );
        assert_eq!(
            key(&state, Key::Char('s')),
            Some(AppCommand::OpenForm(FormKind::MonthlySummary))
        );
    }

    #[test]
    fn test_approve_and_reject_selected_pending_leave() {
        let state = leaves_state(vec![leave(101, "Pending")]);
        assert_eq!(
            key(&state, Key::Char('a')),
            Some(AppCommand::UpdateLeaveStatus {
                request_id: 101.into(),
                decision: Decision::Approved,
            })
        );
        assert_eq!(
            key(&state, Key::Char('x')),
            Some(AppCommand::UpdateLeaveStatus {
                request_id: 101.into(),
                decision: Decision::Rejected,
            })
        );
    }

    #[test]
    fn test_decisions_ignored_unless_exactly_pending() {
        for status in ["Approved", "Rejected", "pending", "On hold"] {
            let state = leaves_state(vec![leave(101, status)]);
            assert_eq!(key(&state, Key::Char('a')), None, "status {}", status);
            assert_eq!(key(&state, Key::Char('x')), None, "status {}", status);
        }
    }

    #[test]
    fn test_decisions_need_leaves_focus() {
        let mut state = leaves_state(vec![leave(101, "Pending")]);
        state.focus = Panel::Employees;
        assert_eq!(key(&state, Key::Char('a')), None);
    }

    #[test]
    fn test_esc_clears_filter_or_dismisses_notice() {
        let mut state = AppState::new();
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::ClearFilter));

        state.show_notice("Leave approved", NoticeKind::Success);
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::DismissNotice));

        state.employees.filter_query = "asha".to_string();
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::ClearFilter));
    }

    #[test]
    fn test_filter_mode_captures_keys() {
        let mut state = AppState::new();
        state.employees.input_mode = InputMode::Filter;

        assert_eq!(key(&state, Key::Char('q')), Some(AppCommand::AppendFilterChar('q')));
        assert_eq!(key(&state, Key::Backspace), Some(AppCommand::DeleteFilterChar));
        assert_eq!(key(&state, Key::Enter), Some(AppCommand::ExitFilterMode));
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::ClearFilter));
    }

    // ============================================================================
    // Forms
    // ============================================================================

    #[test]
    fn test_form_captures_keys() {
        let mut state = AppState::new();
        state.form = Some(FormState::new(FormKind::AddEmployee));

        assert_eq!(key(&state, Key::Char('q')), Some(AppCommand::AppendFormFieldChar('q')));
        assert_eq!(
            key(&state, Key::Tab),
            Some(AppCommand::NavigateFormField { forward: true })
        );
        assert_eq!(
            key(&state, Key::BackTab),
            Some(AppCommand::NavigateFormField { forward: false })
        );
        assert_eq!(key(&state, Key::Enter), Some(AppCommand::SubmitForm));
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::CloseForm));
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('u')), &state),
            Some(AppCommand::ClearFormField)
        );
    }

    // ============================================================================
    // Other screens
    // ============================================================================

    #[test]
    fn test_summary_bindings() {
        let mut state = AppState::new();
        state.show_summary(SummaryState::default());

        assert_eq!(key(&state, Key::Char('r')), Some(AppCommand::ReloadSummary));
        assert_eq!(key(&state, Key::Char('j')), Some(AppCommand::SelectNext));
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::NavigateBack));
        assert_eq!(key(&state, Key::Char('a')), None);
    }

    #[test]
    fn test_logs_bindings() {
        let mut state = AppState::new();
        state.navigate_to(Screen::Logs(LogsState::default()));

        assert_eq!(key(&state, Key::Char('k')), Some(AppCommand::ScrollLogsUp));
        assert_eq!(key(&state, Key::PageDown), Some(AppCommand::ScrollLogsPageDown));
        assert_eq!(key(&state, Key::Char('h')), Some(AppCommand::NavigateBack));
    }
}
