use super::{AppState, LoadingState, NoticeKind, Scrollable, SummaryState};
use crate::events::{DataEvent, Store};
use crate::state::forms::FormKind;
use crate::ui::screens::Screen;
use leave_api::endpoints::Decision;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        // Reload kicked off by a background write
        DataEvent::LoadStarted { store } => match store {
            Store::Employees => state.employees.loading = LoadingState::loading(),
            Store::Leaves => state.leaves.loading = LoadingState::loading(),
        },

        // Stores loaded from API
        DataEvent::EmployeesLoaded { employees } => {
            tracing::debug!("Loaded {} employees", employees.len());
            state.employees.employees = employees;
            state.employees.loading = LoadingState::Loaded;
            state.employees.clamp_selection();
            state.recompute_counts();
        }

        DataEvent::LeavesLoaded { leaves } => {
            tracing::debug!("Loaded {} leave requests", leaves.len());
            state.leaves.leaves = leaves;
            state.leaves.loading = LoadingState::Loaded;
            state.leaves.clamp_selection();
            state.leaves.redraw_chart();
            state.recompute_counts();
        }

        // Load failures stay inline in the panel
        DataEvent::EmployeesLoadFailed { error } => {
            tracing::error!("Failed to load employees: {}", error);
            state.employees.loading = LoadingState::Error(error);
        }

        DataEvent::LeavesLoadFailed { error } => {
            tracing::error!("Failed to load leave requests: {}", error);
            state.leaves.loading = LoadingState::Error(error);
        }

        // Writes
        DataEvent::EmployeeAdded { employee } => {
            close_form(state, FormKind::AddEmployee);
            state.show_notice(
                format!("Employee added: ID {}", employee.employee_id),
                NoticeKind::Success,
            );
        }

        DataEvent::LeaveApplied { leave } => {
            close_form(state, FormKind::ApplyLeave);
            state.show_notice(
                format!("Leave requested: ID {}", leave.request_id),
                NoticeKind::Success,
            );
        }

        DataEvent::LeaveStatusUpdated {
            request_id,
            decision,
            ack,
        } => {
            if ack.is_no_change() {
                tracing::info!("Leave {} already had status {}", request_id, decision);
            }
            let text = match decision {
                Decision::Approved => "Leave approved",
                Decision::Rejected => "Leave rejected",
            };
            state.show_notice(text, NoticeKind::Success);
        }

        DataEvent::EmployeeAddFailed { error } | DataEvent::LeaveApplyFailed { error } => {
            if let Some(form) = state.form.as_mut() {
                form.submitting = false;
            }
            state.show_notice(error, NoticeKind::Error);
        }

        DataEvent::LeaveStatusUpdateFailed { request_id, error } => {
            tracing::warn!("Status update for leave {} failed", request_id);
            state.show_notice(error, NoticeKind::Error);
        }

        // Summary screen
        DataEvent::SummaryLoaded {
            employee_id,
            month,
            year,
            rows,
        } => {
            if let Screen::Summary(summary) = state.current_screen_mut() {
                let current = summary.employee_id == Some(employee_id)
                    && summary.month == month
                    && year == Some(summary.year);
                if current {
                    summary.rows = rows;
                    summary.loading = LoadingState::Loaded;
                    summary.clamp_selection();
                } else {
                    tracing::debug!("Dropping stale summary for employee {}", employee_id);
                }
            }
        }

        DataEvent::SummaryLoadFailed { error } => {
            tracing::error!("Failed to load summary: {}", error);
            if let Screen::Summary(SummaryState { loading, .. }) = state.current_screen_mut() {
                *loading = LoadingState::Error(error);
            }
        }
    }
}

fn close_form(state: &mut AppState, kind: FormKind) {
    if state.form.as_ref().is_some_and(|form| form.kind == kind) {
        state.form = None;
    }
}
