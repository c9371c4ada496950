use super::BackgroundTask;
use crate::events::{DataEvent, Store};
use leave_api::{
    endpoints::{
        employees::CreateEmployee,
        leave::{ApplyLeave, UpdateLeaveStatus},
        summary::MonthlySummary,
    },
    Client, Request,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs requests against the leave service and reports back as data events
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    pub async fn run(&self, task: BackgroundTask) {
        match task {
            BackgroundTask::LoadEmployees => self.load_employees().await,
            BackgroundTask::LoadLeaves => self.load_leaves().await,
            BackgroundTask::AddEmployee(req) => self.add_employee(req).await,
            BackgroundTask::ApplyLeave(req) => self.apply_leave(req).await,
            BackgroundTask::UpdateLeaveStatus(req) => self.update_leave_status(req).await,
            BackgroundTask::LoadSummary(req) => self.load_summary(req).await,
        }
    }

    fn emit(&self, event: DataEvent) {
        // The receiver only goes away during shutdown
        let _ = self.data_tx.send(event);
    }

    pub async fn load_employees(&self) {
        tracing::info!("Loading employees");
        match self.api_client.send(Request::employees().list()).await {
            Ok(employees) => {
                tracing::info!("Loaded {} employees from API", employees.len());
                self.emit(DataEvent::EmployeesLoaded { employees });
            }
            Err(e) => {
                tracing::error!("Failed to load employees from API: {}", e);
                self.emit(DataEvent::EmployeesLoadFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn load_leaves(&self) {
        tracing::info!("Loading leave requests");
        match self.api_client.send(Request::leave().list()).await {
            Ok(leaves) => {
                tracing::info!("Loaded {} leave requests from API", leaves.len());
                self.emit(DataEvent::LeavesLoaded { leaves });
            }
            Err(e) => {
                tracing::error!("Failed to load leave requests from API: {}", e);
                self.emit(DataEvent::LeavesLoadFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn add_employee(&self, req: CreateEmployee) {
        tracing::info!("Adding employee {}", req.name());
        match self.api_client.send(req).await {
            Ok(employee) => {
                tracing::info!("Employee created: {}", employee.employee_id);
                self.emit(DataEvent::EmployeeAdded { employee });
                self.reload(&[Store::Employees, Store::Leaves]).await;
            }
            Err(e) => {
                tracing::error!("Failed to add employee: {}", e);
                self.emit(DataEvent::EmployeeAddFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn apply_leave(&self, req: ApplyLeave) {
        tracing::info!("Applying leave for employee {}", req.employee_id());
        match self.api_client.send(req).await {
            Ok(leave) => {
                tracing::info!("Leave request created: {}", leave.request_id);
                self.emit(DataEvent::LeaveApplied { leave });
                self.reload(&[Store::Leaves, Store::Employees]).await;
            }
            Err(e) => {
                tracing::error!("Failed to apply leave: {}", e);
                self.emit(DataEvent::LeaveApplyFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn update_leave_status(&self, req: UpdateLeaveStatus) {
        let request_id = req.request_id();
        let decision = req.decision();
        tracing::info!("Setting leave {} to {}", request_id, decision);

        match self.api_client.send(req).await {
            Ok(ack) => {
                tracing::info!(
                    "Leave {} status update acknowledged: {:?}",
                    request_id,
                    ack.new_status.as_deref().or(ack.status.as_deref())
                );
                self.emit(DataEvent::LeaveStatusUpdated {
                    request_id,
                    decision,
                    ack,
                });
                self.reload(&[Store::Leaves, Store::Employees]).await;
            }
            Err(e) => {
                tracing::error!("Failed to update leave {}: {}", request_id, e);
                self.emit(DataEvent::LeaveStatusUpdateFailed {
                    request_id,
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn load_summary(&self, req: MonthlySummary) {
        let employee_id = req.employee_id();
        let month = req.month();
        let year = req.query_year();
        tracing::info!("Loading summary for employee {} month {}", employee_id, month);

        match self.api_client.send(req).await {
            Ok(rows) => {
                tracing::info!("Loaded {} summary rows", rows.len());
                self.emit(DataEvent::SummaryLoaded {
                    employee_id,
                    month,
                    year,
                    rows,
                });
            }
            Err(e) => {
                tracing::error!("Failed to load summary: {}", e);
                self.emit(DataEvent::SummaryLoadFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    /// Reload stores one after another, in the given order
    async fn reload(&self, stores: &[Store]) {
        for store in stores {
            self.emit(DataEvent::LoadStarted { store: *store });
            match store {
                Store::Employees => self.load_employees().await,
                Store::Leaves => self.load_leaves().await,
            }
        }
    }
}
