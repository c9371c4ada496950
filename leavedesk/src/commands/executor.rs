use crate::background::{data_loader::DataLoader, BackgroundTask, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::forms::*;
use crate::state::validators;
use crate::state::*;
use crate::ui::screens::Screen;
use chrono::Datelike;
use leave_api::endpoints::Decision;
use leave_api::Request;

/// Log entries per page on the logs screen
const LOG_PAGE_SIZE: usize = 20;

/// Execute a command by updating state and spawning the background tasks it needs
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    for task in apply_command(command, state) {
        let data_loader = data_loader.clone();
        let task_id = task.task_id();
        let is_write = task.is_write();
        let future = async move {
            data_loader.run(task).await;
        };
        if is_write {
            task_manager.spawn_unique_task(&task_id, future);
        } else {
            task_manager.spawn_task(task_id, future);
        }
    }
}

/// Execute a command synchronously, without spawning anything.
///
/// Returns the background tasks a real run would have spawned.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Vec<BackgroundTask> {
    apply_command(command, state)
}

/// Apply a command to state and return the network work it requires
fn apply_command(command: AppCommand, state: &mut AppState) -> Vec<BackgroundTask> {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    let tasks = match command {
        // Selection
        AppCommand::SelectNext => {
            with_selection(state, |list| list.select_next());
            vec![]
        }
        AppCommand::SelectPrevious => {
            with_selection(state, |list| list.select_prev());
            vec![]
        }
        AppCommand::NavigateToTop => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                // Scroll to oldest logs (top)
                logs_state.scroll_offset = logs_state.total_entries.saturating_sub(1);
            } else {
                with_selection(state, |list| list.select_first());
            }
            vec![]
        }
        AppCommand::NavigateToBottom => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = 0;
            } else {
                with_selection(state, |list| list.select_last());
            }
            vec![]
        }

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
            vec![]
        }
        AppCommand::SwitchPanel => {
            state.focus = state.focus.other();
            tracing::debug!("Focus moved to {:?} panel", state.focus);
            vec![]
        }

        // Data loading
        AppCommand::LoadEmployees => {
            state.employees.loading = LoadingState::loading();
            vec![BackgroundTask::LoadEmployees]
        }
        AppCommand::LoadLeaves => {
            state.leaves.loading = LoadingState::loading();
            vec![BackgroundTask::LoadLeaves]
        }
        AppCommand::Refresh => {
            state.employees.loading = LoadingState::loading();
            state.leaves.loading = LoadingState::loading();
            vec![BackgroundTask::LoadEmployees, BackgroundTask::LoadLeaves]
        }
        AppCommand::ReloadSummary => reload_summary(state),

        // Forms
        AppCommand::OpenForm(kind) => {
            state.form = Some(prefilled_form(kind, state));
            state.help_visible = false;
            vec![]
        }
        AppCommand::CloseForm => {
            state.form = None;
            vec![]
        }
        AppCommand::NavigateFormField { forward } => {
            if let Some(form) = state.form.as_mut() {
                if forward {
                    form.focus_next();
                } else {
                    form.focus_previous();
                }
            }
            vec![]
        }
        AppCommand::AppendFormFieldChar(c) => {
            if let Some(form) = state.form.as_mut() {
                form.push_char(c);
            }
            vec![]
        }
        AppCommand::DeleteFormFieldChar => {
            if let Some(form) = state.form.as_mut() {
                form.pop_char();
            }
            vec![]
        }
        AppCommand::ClearFormField => {
            if let Some(form) = state.form.as_mut() {
                form.clear_focused();
            }
            vec![]
        }
        AppCommand::SubmitForm => submit_form(state),

        // Leave decisions
        AppCommand::UpdateLeaveStatus {
            request_id,
            decision,
        } => {
            let still_pending = state
                .leaves
                .leaves
                .iter()
                .any(|leave| leave.request_id == request_id && leave.is_pending());
            if still_pending {
                let req = match decision {
                    Decision::Approved => Request::leave().approve(request_id),
                    Decision::Rejected => Request::leave().reject(request_id),
                };
                vec![BackgroundTask::UpdateLeaveStatus(req)]
            } else {
                tracing::warn!("Leave {} is not pending, ignoring {}", request_id, decision);
                vec![]
            }
        }

        // Filter mode
        AppCommand::EnterFilterMode => {
            match state.focus {
                Panel::Employees => state.employees.input_mode = InputMode::Filter,
                Panel::Leaves => state.leaves.input_mode = InputMode::Filter,
            }
            vec![]
        }
        AppCommand::ExitFilterMode => {
            match state.focus {
                Panel::Employees => state.employees.input_mode = InputMode::Normal,
                Panel::Leaves => state.leaves.input_mode = InputMode::Normal,
            }
            vec![]
        }
        AppCommand::AppendFilterChar(c) => {
            update_filter(state, |query| query.push(c));
            vec![]
        }
        AppCommand::DeleteFilterChar => {
            update_filter(state, |query| {
                query.pop();
            });
            vec![]
        }
        AppCommand::ClearFilter => {
            update_filter(state, String::clear);
            match state.focus {
                Panel::Employees => state.employees.input_mode = InputMode::Normal,
                Panel::Leaves => state.leaves.input_mode = InputMode::Normal,
            }
            vec![]
        }

        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            vec![]
        }
        AppCommand::DismissNotice => {
            state.notice = None;
            vec![]
        }

        // Log screen
        AppCommand::NavigateToLogs => {
            tracing::info!("Navigating to logs screen");
            state.navigate_to(Screen::Logs(LogsState::default()));
            vec![]
        }
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                // Scroll up = show older logs (increase offset from bottom)
                if logs_state.scroll_offset < logs_state.total_entries.saturating_sub(1) {
                    logs_state.scroll_offset += 1;
                }
            }
            vec![]
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.scroll_offset.saturating_sub(1);
            }
            vec![]
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = (logs_state.scroll_offset + LOG_PAGE_SIZE)
                    .min(logs_state.total_entries.saturating_sub(1));
            }
            vec![]
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
            vec![]
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.total_entries.saturating_sub(1);
            }
            vec![]
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = 0;
            }
            vec![]
        }

        // Key sequence state
        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
            vec![]
        }
        AppCommand::ClearPendingKey => vec![],

        AppCommand::Quit => {
            state.should_quit = true;
            vec![]
        }
    };

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key {
        state.pending_key = None;
    }

    tasks
}

/// Run a selection change against whatever list the current screen shows
fn with_selection(state: &mut AppState, select: fn(&mut dyn Scrollable)) {
    let focus = state.focus;
    match state.current_screen_mut() {
        Screen::Summary(summary) => select(summary),
        Screen::Logs(_) => {} // Uses scroll commands instead
        Screen::Dashboard => match focus {
            Panel::Employees => select(&mut state.employees),
            Panel::Leaves => select(&mut state.leaves),
        },
    }
}

/// Edit the focused panel's query and re-derive everything that depends on it
fn update_filter(state: &mut AppState, edit: impl FnOnce(&mut String)) {
    match state.focus {
        Panel::Employees => {
            edit(&mut state.employees.filter_query);
            state.employees.select_first();
            state.employees.clamp_selection();
        }
        Panel::Leaves => {
            edit(&mut state.leaves.filter_query);
            state.leaves.select_first();
            state.leaves.clamp_selection();
            state.leaves.redraw_chart();
        }
    }
}

/// New form for `kind`, with the employee id taken from whatever is selected
fn prefilled_form(kind: FormKind, state: &AppState) -> FormState {
    let form = FormState::new(kind);

    if let (FormKind::MonthlySummary, Screen::Summary(summary)) = (kind, state.current_screen()) {
        if let Some(employee_id) = summary.employee_id {
            return form
                .with_value(SUMMARY_EMPLOYEE_ID, employee_id.to_string())
                .with_value(SUMMARY_MONTH, summary.month.to_string())
                .with_value(SUMMARY_YEAR, summary.year.to_string());
        }
    }

    let selected_employee = match state.focus {
        Panel::Employees => state.employees.selected_employee().map(|e| e.employee_id),
        Panel::Leaves => state.leaves.selected_leave().map(|l| l.employee_id),
    };

    match (kind, selected_employee) {
        (FormKind::ApplyLeave, Some(id)) => form.with_value(LEAVE_EMPLOYEE_ID, id.to_string()),
        (FormKind::MonthlySummary, Some(id)) => {
            form.with_value(SUMMARY_EMPLOYEE_ID, id.to_string())
        }
        _ => form,
    }
}

fn submit_form(state: &mut AppState) -> Vec<BackgroundTask> {
    let Some(form) = state.form.as_mut() else {
        return vec![];
    };
    if form.submitting {
        tracing::debug!("Form already submitting, ignoring");
        return vec![];
    }

    match form.kind {
        FormKind::AddEmployee => match validators::validate_new_employee(form) {
            Ok(req) => {
                form.submitting = true;
                vec![BackgroundTask::AddEmployee(req)]
            }
            Err(error) => {
                form.validation_error = Some(error);
                vec![]
            }
        },
        FormKind::ApplyLeave => match validators::validate_leave_application(form) {
            Ok(req) => {
                form.submitting = true;
                vec![BackgroundTask::ApplyLeave(req)]
            }
            Err(error) => {
                form.validation_error = Some(error);
                vec![]
            }
        },
        FormKind::MonthlySummary => {
            let today = chrono::Local::now().date_naive();
            match validators::validate_summary_query(form, today) {
                Ok(req) => {
                    state.form = None;
                    state.show_summary(SummaryState {
                        employee_id: Some(req.employee_id()),
                        month: req.month(),
                        year: req.query_year().unwrap_or(today.year()),
                        loading: LoadingState::loading(),
                        ..Default::default()
                    });
                    vec![BackgroundTask::LoadSummary(req)]
                }
                Err(error) => {
                    form.validation_error = Some(error);
                    vec![]
                }
            }
        }
    }
}

fn reload_summary(state: &mut AppState) -> Vec<BackgroundTask> {
    let Screen::Summary(summary) = state.current_screen_mut() else {
        return vec![];
    };
    let Some(employee_id) = summary.employee_id else {
        return vec![];
    };

    summary.loading = LoadingState::loading();
    let req = Request::summary().monthly(employee_id, summary.month, summary.year);
    vec![BackgroundTask::LoadSummary(req)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use leave_api::endpoints::{employees::Employee, leave::LeaveRequest, EmployeeId};
    use std::sync::Arc;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            employee_id: id.into(),
            name: name.to_string(),
            total_leave_balance: 20.0,
        }
    }

    fn leave(id: i64, employee_id: i64, status: &str) -> LeaveRequest {
        LeaveRequest {
            request_id: id.into(),
            employee_id: employee_id.into(),
            leave_type: Some("Casual".to_string()),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            days: 3.0,
            status: Some(status.to_string()),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.employees.employees = vec![employee(7, "Asha"), employee(8, "Ravi")];
        state.employees.clamp_selection();
        state.leaves.leaves = vec![
            leave(101, 7, "Pending"),
            leave(102, 8, "Approved"),
            leave(103, 8, "Rejected"),
        ];
        state.leaves.clamp_selection();
        state.leaves.redraw_chart();
        state.recompute_counts();
        state
    }

    fn type_into_form(state: &mut AppState, text: &str) {
        for c in text.chars() {
            execute_command_sync(AppCommand::AppendFormFieldChar(c), state);
        }
    }

    // ============================================================================
    // Loading
    // ============================================================================

    #[test]
    fn test_refresh_loads_both_stores() {
        let mut state = AppState::new();
        let tasks = execute_command_sync(AppCommand::Refresh, &mut state);

        assert_eq!(
            tasks,
            vec![BackgroundTask::LoadEmployees, BackgroundTask::LoadLeaves]
        );
        assert!(state.employees.loading.is_loading());
        assert!(state.leaves.loading.is_loading());
    }

    // ============================================================================
    // Selection and focus
    // ============================================================================

    #[test]
    fn test_selection_follows_focus() {
        let mut state = loaded_state();
        execute_command_sync(AppCommand::SelectNext, &mut state);
        assert_eq!(state.employees.selected_employee().unwrap().name, "Ravi");
        assert_eq!(state.leaves.table_state.borrow().selected(), Some(0));

        execute_command_sync(AppCommand::SwitchPanel, &mut state);
        execute_command_sync(AppCommand::NavigateToBottom, &mut state);
        assert_eq!(
            state.leaves.selected_leave().map(|l| l.request_id.inner()),
            Some(103)
        );
    }

    #[test]
    fn test_pending_key_cleared_by_next_command() {
        let mut state = AppState::new();
        execute_command_sync(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));

        execute_command_sync(AppCommand::NavigateToTop, &mut state);
        assert_eq!(state.pending_key, None);
    }

    // ============================================================================
    // Filtering
    // ============================================================================

    #[test]
    fn test_leave_filter_redraws_chart_without_touching_counts() {
        let mut state = loaded_state();
        state.focus = Panel::Leaves;
        let counts = state.counts;
        let created = state.leaves.chart.created();

        execute_command_sync(AppCommand::EnterFilterMode, &mut state);
        for c in "approved".chars() {
            execute_command_sync(AppCommand::AppendFilterChar(c), &mut state);
        }

        assert_eq!(state.leaves.filtered_leaves().len(), 1);
        assert_eq!(state.leaves.chart.counts().map(|c| c.approved), Some(1));
        assert_eq!(state.leaves.chart.counts().map(|c| c.total()), Some(1));
        assert_eq!(state.leaves.chart.created(), created + 8);
        assert_eq!(state.counts, counts);
    }

    #[test]
    fn test_clear_filter_restores_list_and_exits_filter_mode() {
        let mut state = loaded_state();
        execute_command_sync(AppCommand::EnterFilterMode, &mut state);
        execute_command_sync(AppCommand::AppendFilterChar('z'), &mut state);
        assert!(state.employees.filtered_employees().is_empty());
        assert_eq!(state.employees.table_state.borrow().selected(), None);

        execute_command_sync(AppCommand::ClearFilter, &mut state);
        assert_eq!(state.employees.filtered_employees().len(), 2);
        assert_eq!(state.employees.input_mode, InputMode::Normal);
        assert_eq!(state.employees.table_state.borrow().selected(), Some(0));
    }

    #[test]
    fn test_each_panel_keeps_its_own_query() {
        let mut state = loaded_state();
        execute_command_sync(AppCommand::AppendFilterChar('a'), &mut state);
        execute_command_sync(AppCommand::SwitchPanel, &mut state);
        execute_command_sync(AppCommand::AppendFilterChar('s'), &mut state);

        assert_eq!(state.employees.filter_query, "a");
        assert_eq!(state.leaves.filter_query, "s");
    }

    // ============================================================================
    // Forms
    // ============================================================================

    #[test]
    fn test_add_employee_submit() {
        let mut state = loaded_state();
        execute_command_sync(AppCommand::OpenForm(FormKind::AddEmployee), &mut state);
        type_into_form(&mut state, "Mei");
        execute_command_sync(AppCommand::NavigateFormField { forward: true }, &mut state);
        type_into_form(&mut state, "12");

        let tasks = execute_command_sync(AppCommand::SubmitForm, &mut state);
        assert_eq!(
            tasks,
            vec![BackgroundTask::AddEmployee(
                Request::employees().create("Mei", 12.0)
            )]
        );
        assert!(state.form.as_ref().unwrap().submitting);

        // A second Enter while in flight does nothing
        assert!(execute_command_sync(AppCommand::SubmitForm, &mut state).is_empty());
    }

    #[test]
    fn test_invalid_form_stays_open_with_error() {
        let mut state = AppState::new();
        execute_command_sync(AppCommand::OpenForm(FormKind::AddEmployee), &mut state);

        let tasks = execute_command_sync(AppCommand::SubmitForm, &mut state);
        assert!(tasks.is_empty());
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.validation_error.as_deref(), Some("Name required"));
        assert!(!form.submitting);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_apply_leave_prefills_selected_employee() {
        let mut state = loaded_state();
        execute_command_sync(AppCommand::SelectNext, &mut state);
        execute_command_sync(AppCommand::OpenForm(FormKind::ApplyLeave), &mut state);
        assert_eq!(state.form.as_ref().unwrap().value(LEAVE_EMPLOYEE_ID), "8");

        // From the leaves panel the request's employee is used
        execute_command_sync(AppCommand::CloseForm, &mut state);
        execute_command_sync(AppCommand::SwitchPanel, &mut state);
        execute_command_sync(AppCommand::OpenForm(FormKind::ApplyLeave), &mut state);
        assert_eq!(state.form.as_ref().unwrap().value(LEAVE_EMPLOYEE_ID), "7");
    }

    #[test]
    fn test_apply_leave_submit_defaults_type() {
        let mut state = AppState::new();
        state.form = Some(
            FormState::new(FormKind::ApplyLeave)
                .with_value(LEAVE_EMPLOYEE_ID, "7")
                .with_value(LEAVE_START, "2024-05-01")
                .with_value(LEAVE_END, "2024-05-03"),
        );

        let tasks = execute_command_sync(AppCommand::SubmitForm, &mut state);
        let expected = Request::leave().apply(
            EmployeeId::new(7),
            "Casual",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
        );
        assert_eq!(tasks, vec![BackgroundTask::ApplyLeave(expected)]);
    }

    #[test]
    fn test_summary_submit_opens_summary_screen() {
        let mut state = AppState::new();
        state.form = Some(
            FormState::new(FormKind::MonthlySummary)
                .with_value(SUMMARY_EMPLOYEE_ID, "7")
                .with_value(SUMMARY_MONTH, "5")
                .with_value(SUMMARY_YEAR, "2024"),
        );

        let tasks = execute_command_sync(AppCommand::SubmitForm, &mut state);
        assert_eq!(
            tasks,
            vec![BackgroundTask::LoadSummary(Request::summary().monthly(
                7.into(),
                5,
                2024
            ))]
        );
        assert!(state.form.is_none());

        let Screen::Summary(summary) = state.current_screen() else {
            panic!("Expected summary screen");
        };
        assert_eq!(summary.employee_id, Some(EmployeeId::new(7)));
        assert_eq!((summary.month, summary.year), (5, 2024));
        assert!(summary.loading.is_loading());

        // Reload reuses the same query
        let tasks = execute_command_sync(AppCommand::ReloadSummary, &mut state);
        assert_eq!(
            tasks,
            vec![BackgroundTask::LoadSummary(Request::summary().monthly(
                7.into(),
                5,
                2024
            ))]
        );

        // Reopening the form from the summary screen keeps the query
        execute_command_sync(AppCommand::OpenForm(FormKind::MonthlySummary), &mut state);
        assert_eq!(state.form.as_ref().unwrap().value(SUMMARY_YEAR), "2024");
    }

    // ============================================================================
    // Decisions
    // ============================================================================

    #[test]
    fn test_approve_pending_leave() {
        let mut state = loaded_state();
        let tasks = execute_command_sync(
            AppCommand::UpdateLeaveStatus {
                request_id: 101.into(),
                decision: Decision::Approved,
            },
            &mut state,
        );
        assert_eq!(
            tasks,
            vec![BackgroundTask::UpdateLeaveStatus(
                Request::leave().approve(101.into())
            )]
        );
    }

    #[test]
    fn test_decision_on_settled_leave_is_ignored() {
        let mut state = loaded_state();
        let tasks = execute_command_sync(
            AppCommand::UpdateLeaveStatus {
                request_id: 102.into(),
                decision: Decision::Rejected,
            },
            &mut state,
        );
        assert!(tasks.is_empty());
    }

    // ============================================================================
    // Logs
    // ============================================================================

    #[test]
    fn test_log_scrolling_is_bounded() {
        let mut state = AppState::new();
        execute_command_sync(AppCommand::NavigateToLogs, &mut state);
        if let Screen::Logs(logs) = state.current_screen_mut() {
            logs.total_entries = 30;
        }

        execute_command_sync(AppCommand::ScrollLogsPageUp, &mut state);
        execute_command_sync(AppCommand::ScrollLogsPageUp, &mut state);
        let Screen::Logs(logs) = state.current_screen() else {
            panic!("Expected logs screen");
        };
        assert_eq!(logs.scroll_offset, 29);

        execute_command_sync(AppCommand::NavigateToBottom, &mut state);
        let Screen::Logs(logs) = state.current_screen() else {
            panic!("Expected logs screen");
        };
        assert_eq!(logs.scroll_offset, 0);
    }

    // ============================================================================
    // Spawning
    // ============================================================================

    /// Answer every connection concurrently: the first POST /employees succeeds,
    /// later ones fail, and GET /employees is answered after a short delay
    async fn serve_employee_writes() -> String {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let posts = Arc::new(AtomicUsize::new(0));

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = listener.accept().await.unwrap();
                let posts = posts.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    let header_end = loop {
                        let n = socket.read(&mut chunk).await.unwrap();
                        assert!(n > 0, "connection closed before headers");
                        buf.extend_from_slice(&chunk[..n]);
                        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                            break pos + 4;
                        }
                    };
                    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
                    let content_length = head
                        .lines()
                        .filter_map(|line| line.split_once(':'))
                        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    while buf.len() < header_end + content_length {
                        let n = socket.read(&mut chunk).await.unwrap();
                        if n == 0 {
                            break;
                        }
                        buf.extend_from_slice(&chunk[..n]);
                    }

                    let request_line = head.lines().next().unwrap_or_default().to_string();
                    let (status, body) = if request_line.starts_with("POST /employees") {
                        if posts.fetch_add(1, Ordering::SeqCst) == 0 {
                            ("201 Created", r#"{"employee_id": 7, "name": "Asha"}"#)
                        } else {
                            ("500 Internal Server Error", r#"{"error": "database locked"}"#)
                        }
                    } else if request_line.starts_with("GET /employees") {
                        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                        (
                            "200 OK",
                            r#"[{"employee_id": 7, "name": "Asha", "total_leave_balance": 20}]"#,
                        )
                    } else {
                        ("200 OK", "[]")
                    };

                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    socket.write_all(response.as_bytes()).await.unwrap();
                    socket.shutdown().await.unwrap();
                });
            }
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_second_add_does_not_cancel_first_reload() {
        use crate::events::{DataEvent, Store};
        use crate::state::reducer::reduce_data_event;
        use leave_api::Client;

        let base_url = serve_employee_writes().await;
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let loader = DataLoader::new(Arc::new(Client::new(base_url)), tx);
        let mut manager = BackgroundTaskManager::new();
        let mut state = AppState::new();

        state.form = Some(FormState::new(FormKind::AddEmployee).with_value(EMPLOYEE_NAME, "Asha"));
        execute_command(AppCommand::SubmitForm, &mut state, &mut manager, &loader);

        // Wait until the first add has landed and its reload is in flight
        loop {
            let event = rx.recv().await.unwrap();
            let reloading = matches!(
                event,
                DataEvent::LoadStarted {
                    store: Store::Employees
                }
            );
            reduce_data_event(&mut state, event);
            if reloading {
                break;
            }
        }
        assert!(state.employees.loading.is_loading());

        state.form = Some(FormState::new(FormKind::AddEmployee).with_value(EMPLOYEE_NAME, "Ravi"));
        execute_command(AppCommand::SubmitForm, &mut state, &mut manager, &loader);

        let mut second_failed = false;
        tokio::time::timeout(std::time::Duration::from_secs(5), async {
            loop {
                let event = rx.recv().await.unwrap();
                second_failed |= matches!(event, DataEvent::EmployeeAddFailed { .. });
                let loaded = matches!(event, DataEvent::EmployeesLoaded { .. });
                reduce_data_event(&mut state, event);
                if loaded {
                    break;
                }
            }
        })
        .await
        .expect("first reload should finish");

        assert!(second_failed);
        assert!(!state.employees.loading.is_loading());
        assert_eq!(state.employees.employees.len(), 1);
        assert_eq!(state.employees.employees[0].name, "Asha");
    }
}
