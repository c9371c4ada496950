use crate::state::forms::*;
use chrono::{Datelike, NaiveDate};
use leave_api::endpoints::{
    employees::{CreateEmployee, DEFAULT_LEAVE_BALANCE},
    leave::{ApplyLeave, DEFAULT_LEAVE_TYPE},
    summary::MonthlySummary,
    EmployeeId,
};
use leave_api::Request;

/// Validate the add-employee form and build the request
pub fn validate_new_employee(form: &FormState) -> Result<CreateEmployee, String> {
    let name = form.value(EMPLOYEE_NAME).trim();
    if name.is_empty() {
        return Err("Name required".to_string());
    }

    let balance = validate_balance(form.value(EMPLOYEE_BALANCE))?;

    Ok(Request::employees().create(name, balance))
}

/// Validate the apply-leave form and build the request.
///
/// Start and end are not compared; the service owns range checks.
pub fn validate_leave_application(form: &FormState) -> Result<ApplyLeave, String> {
    let employee_id = form.value(LEAVE_EMPLOYEE_ID).trim();
    let start = form.value(LEAVE_START).trim();
    let end = form.value(LEAVE_END).trim();
    if employee_id.is_empty() || start.is_empty() || end.is_empty() {
        return Err("Fill all fields".to_string());
    }

    let employee_id = validate_employee_id(employee_id)?;
    let start_date = validate_date(start, "Start date")?;
    let end_date = validate_date(end, "End date")?;

    let leave_type = match form.value(LEAVE_TYPE).trim() {
        "" => DEFAULT_LEAVE_TYPE,
        other => other,
    };

    Ok(Request::leave().apply(employee_id, leave_type, start_date, end_date))
}

/// Validate the summary form; a blank year means the year of `today`
pub fn validate_summary_query(
    form: &FormState,
    today: NaiveDate,
) -> Result<MonthlySummary, String> {
    let employee_id = form.value(SUMMARY_EMPLOYEE_ID).trim();
    let month = form.value(SUMMARY_MONTH).trim();
    if employee_id.is_empty() || month.is_empty() {
        return Err("Fill all fields".to_string());
    }

    let employee_id = validate_employee_id(employee_id)?;
    let month = validate_month(month)?;

    let year = match form.value(SUMMARY_YEAR).trim() {
        "" => today.year(),
        year => year
            .parse::<i32>()
            .map_err(|_| format!("Invalid year: {}", year))?,
    };

    Ok(Request::summary().monthly(employee_id, month, year))
}

fn validate_employee_id(input: &str) -> Result<EmployeeId, String> {
    input
        .parse::<EmployeeId>()
        .map_err(|_| "Employee ID must be a number".to_string())
}

/// Blank means the service default; anything else must be a finite number
fn validate_balance(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_LEAVE_BALANCE);
    }

    match input.parse::<f64>() {
        Ok(balance) if balance.is_finite() => Ok(balance),
        _ => Err("Leave balance must be a number".to_string()),
    }
}

fn validate_date(input: &str, field: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| format!("{} must be YYYY-MM-DD", field))
}

fn validate_month(input: &str) -> Result<u32, String> {
    match input.parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err("Month must be between 1 and 12".to_string()),
    }
}
