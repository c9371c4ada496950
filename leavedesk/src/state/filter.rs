//! Substring search over the in-memory stores.
//!
//! Every function here borrows the store and returns a derived list; nothing
//! is ever removed from or reordered in the source collection.

use leave_api::endpoints::{employees::Employee, leave::LeaveRequest};

/// Employees whose name or id contains `query`, ignoring case
pub fn filter_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    let query = query.to_lowercase();
    employees
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&query) || e.employee_id.to_string().contains(&query)
        })
        .collect()
}

/// Leave requests whose request id, employee id, type or status contains `query`, ignoring case.
///
/// A missing type or status is searched as the empty string.
pub fn filter_leaves<'a>(leaves: &'a [LeaveRequest], query: &str) -> Vec<&'a LeaveRequest> {
    let query = query.to_lowercase();

    fn optional_match(value: Option<&str>, query: &str) -> bool {
        value.unwrap_or_default().to_lowercase().contains(query)
    }

    leaves
        .iter()
        .filter(|r| {
            r.request_id.to_string().contains(&query)
                || r.employee_id.to_string().contains(&query)
                || optional_match(r.leave_type.as_deref(), &query)
                || optional_match(r.status.as_deref(), &query)
        })
        .collect()
}

/// The list the status chart is drawn from.
///
/// Falls back to the whole store when the filtered list is empty, so a search
/// with no hits still charts every request.
pub fn chart_source<'a>(
    filtered: &[&'a LeaveRequest],
    all: &'a [LeaveRequest],
) -> Vec<&'a LeaveRequest> {
    if filtered.is_empty() {
        all.iter().collect()
    } else {
        filtered.to_vec()
    }
}
