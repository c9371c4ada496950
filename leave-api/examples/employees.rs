use leave_api::{Client, DEFAULT_BASE_URL, LeaveApiError, Request};

#[tokio::main]
pub async fn main() -> Result<(), LeaveApiError> {
    let client = Client::new(DEFAULT_BASE_URL);

    let req = Request::employees().list();

    let employees = client.send(req).await?;
    for employee in employees {
        println!(
            "{:>4}  {:<24} {}",
            employee.employee_id, employee.name, employee.total_leave_balance
        );
    }
    Ok(())
}
