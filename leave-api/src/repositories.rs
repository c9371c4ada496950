use crate::endpoints::{
    Decision, EmployeeId, RequestId,
    employees::{CreateEmployee, ListEmployees},
    leave::{ApplyLeave, ListLeave, UpdateLeaveStatus},
    summary::MonthlySummary,
};
use chrono::NaiveDate;

pub struct EmployeeRepository;

impl EmployeeRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListEmployees {
        ListEmployees::default()
    }

    pub fn create(&self, name: impl Into<String>, total_leave_balance: f64) -> CreateEmployee {
        CreateEmployee::new(name).total_leave_balance(total_leave_balance)
    }
}

pub struct LeaveRepository;

impl LeaveRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListLeave {
        ListLeave::default()
    }

    pub fn apply(
        &self,
        employee_id: EmployeeId,
        leave_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ApplyLeave {
        ApplyLeave::new(employee_id, start_date, end_date).leave_type(leave_type)
    }

    pub fn approve(&self, request_id: RequestId) -> UpdateLeaveStatus {
        UpdateLeaveStatus::new(request_id, Decision::Approved)
    }

    pub fn reject(&self, request_id: RequestId) -> UpdateLeaveStatus {
        UpdateLeaveStatus::new(request_id, Decision::Rejected)
    }
}

pub struct SummaryRepository;

impl SummaryRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn monthly(&self, employee_id: EmployeeId, month: u32, year: i32) -> MonthlySummary {
        MonthlySummary::new(employee_id, month).year(year)
    }
}
