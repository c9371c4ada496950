use crate::state::forms::FormKind;
use leave_api::endpoints::{
    employees::{CreatedEmployee, Employee},
    leave::{AppliedLeave, LeaveRequest, StatusUpdate},
    summary::SummaryRow,
    Decision, EmployeeId, RequestId,
};

/// The two collections the dashboard keeps in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Employees,
    Leaves,
}

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,
    SwitchPanel,

    // Data loading
    LoadEmployees,
    LoadLeaves,
    Refresh,
    ReloadSummary,

    // Forms
    OpenForm(FormKind),
    CloseForm,
    NavigateFormField { forward: bool },
    AppendFormFieldChar(char),
    DeleteFormFieldChar,
    ClearFormField,
    SubmitForm,

    // Leave decisions
    UpdateLeaveStatus {
        request_id: RequestId,
        decision: Decision,
    },

    // Filter mode
    EnterFilterMode,
    ExitFilterMode,
    AppendFilterChar(char),
    DeleteFilterChar,
    ClearFilter,

    ToggleHelp,
    DismissNotice,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    /// A reload was kicked off from inside a background task
    LoadStarted {
        store: Store,
    },

    EmployeesLoaded {
        employees: Vec<Employee>,
    },
    EmployeesLoadFailed {
        error: String,
    },

    LeavesLoaded {
        leaves: Vec<LeaveRequest>,
    },
    LeavesLoadFailed {
        error: String,
    },

    EmployeeAdded {
        employee: CreatedEmployee,
    },
    EmployeeAddFailed {
        error: String,
    },

    LeaveApplied {
        leave: AppliedLeave,
    },
    LeaveApplyFailed {
        error: String,
    },

    LeaveStatusUpdated {
        request_id: RequestId,
        decision: Decision,
        ack: StatusUpdate,
    },
    LeaveStatusUpdateFailed {
        request_id: RequestId,
        error: String,
    },

    SummaryLoaded {
        employee_id: EmployeeId,
        month: u32,
        /// `None` when the query left the year to the service
        year: Option<i32>,
        rows: Vec<SummaryRow>,
    },
    SummaryLoadFailed {
        error: String,
    },
}
