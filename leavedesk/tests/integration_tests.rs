use chrono::NaiveDate;
use leave_api::endpoints::{
    employees::{CreatedEmployee, Employee},
    leave::{LeaveRequest, StatusUpdate},
    summary::SummaryRow,
    Decision, EmployeeId,
};
use leave_api::Request;
use leavedesk::background::BackgroundTask;
use leavedesk::events::{DataEvent, Store};
use leavedesk::input::{Key, KeyEvent};
use leavedesk::state::{forms::FormKind, InputMode, LoadingState, Panel};
use leavedesk::testing::TestApp;
use leavedesk::ui::components::leave_table::ACTION_CONTROLS;
use leavedesk::ui::screens::Screen;
use std::time::Duration;

const WIDTH: u16 = 160;
const HEIGHT: u16 = 40;

fn employee(id: i64, name: &str, balance: f64) -> Employee {
    Employee {
        employee_id: id.into(),
        name: name.to_string(),
        total_leave_balance: balance,
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

/// A dashboard with Asha and one pending request loaded
fn loaded_app() -> TestApp {
    let mut app = TestApp::new();
    app.send_data_event(DataEvent::EmployeesLoaded {
        employees: vec![employee(7, "Asha", 18.0)],
    });
    app.send_data_event(DataEvent::LeavesLoaded {
        leaves: vec![leave(101, 7, "Pending")],
    });
    app
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();
    app.assert_not_quit();

    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();
    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);
    assert!(app.render(WIDTH, HEIGHT).contains("Help"));

    app.send_key(Key::Char('?'));
    assert!(!app.state().help_visible);
}

#[test]
fn test_loaded_employee_is_rendered() {
    let app = loaded_app();
    let screen = app.render(WIDTH, HEIGHT);

    assert!(screen.contains("Leave Dashboard"));
    assert!(screen.contains("Asha"));
    assert!(screen.contains("18"));
    assert_eq!(app.state().counts.employees, 1);
}

#[test]
fn test_empty_stores_show_placeholders() {
    let mut app = TestApp::new();
    app.send_data_event(DataEvent::EmployeesLoaded { employees: vec![] });
    app.send_data_event(DataEvent::LeavesLoaded { leaves: vec![] });

    let screen = app.render(WIDTH, HEIGHT);
    assert!(screen.contains("No employees"));
    assert!(screen.contains("No leaves yet"));
}

#[test]
fn test_load_failure_is_shown_in_panel() {
    let mut app = TestApp::new();
    app.send_data_event(DataEvent::LeavesLoadFailed {
        error: "500 Internal Server Error: boom".to_string(),
    });

    assert!(matches!(app.state().leaves.loading, LoadingState::Error(_)));
    assert!(app.render(WIDTH, HEIGHT).contains("boom"));
}

#[test]
fn test_reload_shows_placeholder_over_old_rows() {
    let mut app = loaded_app();
    app.send_data_event(DataEvent::LoadStarted {
        store: Store::Employees,
    });
    app.send_data_event(DataEvent::LoadStarted {
        store: Store::Leaves,
    });

    let screen = app.render(WIDTH, HEIGHT);
    assert!(screen.contains("Loading employees..."));
    assert!(screen.contains("Loading leave requests..."));
    assert!(!screen.contains("Asha"));

    app.send_data_event(DataEvent::EmployeesLoaded {
        employees: vec![employee(7, "Asha", 18.0)],
    });
    let screen = app.render(WIDTH, HEIGHT);
    assert!(screen.contains("Asha"));
    assert!(!screen.contains("Loading employees..."));
}

#[test]
fn test_approve_flow() {
    let mut app = loaded_app();
    assert!(app.render(WIDTH, HEIGHT).contains(ACTION_CONTROLS));

    // Decisions act on the leaves panel
    app.send_key(Key::Tab);
    assert_eq!(app.state().focus, Panel::Leaves);
    app.send_key(Key::Char('a'));

    assert_eq!(
        app.last_spawned_task(),
        Some(&BackgroundTask::UpdateLeaveStatus(
            Request::leave().approve(101.into())
        ))
    );

    // The service acknowledges, then the reload brings the new status
    app.send_data_event(DataEvent::LeaveStatusUpdated {
        request_id: 101.into(),
        decision: Decision::Approved,
        ack: StatusUpdate {
            new_status: Some("Approved".to_string()),
            ..Default::default()
        },
    });
    app.send_data_event(DataEvent::LoadStarted {
        store: Store::Leaves,
    });
    app.send_data_event(DataEvent::LeavesLoaded {
        leaves: vec![leave(101, 7, "Approved")],
    });

    app.assert_notice("Leave approved");
    let screen = app.render(WIDTH, HEIGHT);
    assert!(!screen.contains(ACTION_CONTROLS));
    assert!(screen.contains("Leave approved"));
    assert_eq!(app.state().counts.statuses.approved, 1);
    assert_eq!(app.state().counts.statuses.pending, 0);
}

#[test]
fn test_reject_from_employee_panel_does_nothing() {
    let mut app = loaded_app();
    app.send_key(Key::Char('x'));
    assert!(app.spawned_tasks().is_empty());
}

#[test]
fn test_failed_decision_shows_error_notice() {
    let mut app = loaded_app();
    app.send_data_event(DataEvent::LeaveStatusUpdateFailed {
        request_id: 101.into(),
        error: "404 Not Found: no such request".to_string(),
    });

    let notice = app.state().notice.as_ref().unwrap();
    assert!(notice.text.contains("no such request"));
    assert!(app.render(WIDTH, HEIGHT).contains(ACTION_CONTROLS));
}

#[test]
fn test_search_without_hits_keeps_chart_and_counts() {
    let mut app = TestApp::new();
    app.send_data_event(DataEvent::LeavesLoaded {
        leaves: vec![
            leave(101, 7, "Pending"),
            leave(102, 7, "Approved"),
            leave(103, 8, "Rejected"),
        ],
    });
    let counts = app.state().counts;

    app.send_key(Key::Tab);
    app.send_key(Key::Char('/'));
    assert_eq!(app.state().leaves.input_mode, InputMode::Filter);
    app.type_text("zzz");

    let leaves = &app.state().leaves;
    assert!(leaves.filtered_leaves().is_empty());
    assert_eq!(leaves.chart.counts().map(|c| c.total()), Some(3));
    assert_eq!(app.state().counts, counts);
    assert!(app.render(WIDTH, HEIGHT).contains("No matching leave requests"));

    // Esc clears the query and restores the list
    app.send_key(Key::Esc);
    assert_eq!(app.state().leaves.filtered_leaves().len(), 3);
    assert_eq!(app.state().leaves.input_mode, InputMode::Normal);
}

#[test]
fn test_employee_search_without_hits() {
    let mut app = loaded_app();
    app.send_key(Key::Char('/'));
    app.type_text("nobody");
    app.send_key(Key::Enter);

    assert_eq!(app.state().employees.input_mode, InputMode::Normal);
    assert!(app.render(WIDTH, HEIGHT).contains("No matching employees"));
}

#[test]
fn test_gg_goes_to_top() {
    let mut app = TestApp::new();
    app.send_data_event(DataEvent::EmployeesLoaded {
        employees: vec![
            employee(1, "Asha", 18.0),
            employee(2, "Ravi", 20.0),
            employee(3, "Mei", 12.0),
        ],
    });

    app.send_key(Key::Char('G'));
    assert_eq!(
        app.state().employees.selected_employee().map(|e| e.name.as_str()),
        Some("Mei")
    );

    app.send_keys(&[Key::Char('g'), Key::Char('g')]);
    assert_eq!(
        app.state().employees.selected_employee().map(|e| e.name.as_str()),
        Some("Asha")
    );
    assert_eq!(app.state().pending_key, None);
}

#[test]
fn test_notice_expires_on_tick() {
    let mut app = TestApp::with_notice_timeout(Duration::from_millis(4200));
    app.send_data_event(DataEvent::EmployeeAdded {
        employee: CreatedEmployee {
            employee_id: 9.into(),
            name: Some("Mei".to_string()),
            total_leave_balance: Some(20.0),
        },
    });
    app.assert_notice("Employee added: ID 9");
    let shown_at = app.state().notice.as_ref().unwrap().shown_at;

    app.tick(shown_at + Duration::from_millis(1000));
    assert!(app.state().notice.is_some());

    app.tick(shown_at + Duration::from_millis(4200));
    assert!(app.state().notice.is_none());
}

#[test]
fn test_add_employee_form_flow() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('e'));
    assert_eq!(
        app.state().form.as_ref().map(|f| f.kind),
        Some(FormKind::AddEmployee)
    );

    // Submitting empty keeps the form open with an inline error
    app.send_key(Key::Enter);
    assert!(app.spawned_tasks().is_empty());
    assert!(app.render(WIDTH, HEIGHT).contains("Name required"));

    app.type_text("Mei");
    app.send_key(Key::Tab);
    app.type_text("1x");
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('u')));
    app.type_text("12");
    app.send_key(Key::Enter);

    assert_eq!(
        app.spawned_tasks(),
        &[BackgroundTask::AddEmployee(
            Request::employees().create("Mei", 12.0)
        )]
    );
    assert!(app.state().form.as_ref().unwrap().submitting);

    app.send_data_event(DataEvent::EmployeeAdded {
        employee: CreatedEmployee {
            employee_id: 9.into(),
            name: Some("Mei".to_string()),
            total_leave_balance: Some(12.0),
        },
    });
    assert!(app.state().form.is_none());
    app.assert_notice("Employee added: ID 9");
}

#[test]
fn test_failed_submit_reopens_form_for_editing() {
    let mut app = loaded_app();
    app.send_key(Key::Char('n'));
    app.send_key(Key::Tab);
    app.send_key(Key::Tab);
    app.type_text("2024-05-01");
    app.send_key(Key::Tab);
    app.type_text("2024-05-03");
    app.send_key(Key::Enter);

    assert_eq!(
        app.last_spawned_task(),
        Some(&BackgroundTask::ApplyLeave(Request::leave().apply(
            EmployeeId::new(7),
            "Casual",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
        )))
    );

    app.send_data_event(DataEvent::LeaveApplyFailed {
        error: "400 Bad Request: Insufficient leave balance".to_string(),
    });
    assert!(!app.state().form.as_ref().unwrap().submitting);
    assert!(app
        .state()
        .notice
        .as_ref()
        .unwrap()
        .text
        .contains("Insufficient leave balance"));
}

#[test]
fn test_summary_flow() {
    let mut app = loaded_app();
    app.send_key(Key::Char('s'));
    assert_eq!(
        app.state().form.as_ref().map(|f| f.kind),
        Some(FormKind::MonthlySummary)
    );

    // Employee id comes from the selection
    app.send_key(Key::Tab);
    app.type_text("5");
    app.send_key(Key::Tab);
    app.type_text("2024");
    app.send_key(Key::Enter);

    assert_eq!(
        app.last_spawned_task(),
        Some(&BackgroundTask::LoadSummary(Request::summary().monthly(
            7.into(),
            5,
            2024
        )))
    );
    app.assert_screen_type(std::mem::discriminant(&Screen::Summary(Default::default())));

    // A response for another query is dropped
    app.send_data_event(DataEvent::SummaryLoaded {
        employee_id: 8.into(),
        month: 5,
        year: Some(2024),
        rows: vec![],
    });
    assert!(app.render(WIDTH, HEIGHT).contains("Loading summary..."));

    app.send_data_event(DataEvent::SummaryLoaded {
        employee_id: 7.into(),
        month: 5,
        year: Some(2024),
        rows: vec![SummaryRow {
            request_id: 101.into(),
            leave_type: Some("Casual".to_string()),
            days: 3.0,
            status: Some("approved".to_string()),
            applied_on: "2024-04-28".to_string(),
        }],
    });
    let screen = app.render(WIDTH, HEIGHT);
    assert!(screen.contains("Monthly Summary: employee 7 (2024-05)"));
    assert!(screen.contains("2024-04-28"));
    assert!(screen.contains("Approved"));
    assert!(!screen.contains("approved"));

    // Esc returns to the dashboard with data intact
    app.send_key(Key::Esc);
    app.assert_on_dashboard();
    assert_eq!(app.state().employees.employees.len(), 1);
}

#[test]
fn test_logs_screen_round_trip() {
    let mut app = TestApp::new();
    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    app.assert_screen_type(std::mem::discriminant(&Screen::Logs(Default::default())));

    app.send_key(Key::Char('h'));
    app.assert_on_dashboard();
}
