pub mod data_loader;

use leave_api::endpoints::{
    employees::CreateEmployee,
    leave::{ApplyLeave, UpdateLeaveStatus},
    summary::MonthlySummary,
};
use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Network work requested by a command, run off the UI loop
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundTask {
    LoadEmployees,
    LoadLeaves,
    AddEmployee(CreateEmployee),
    ApplyLeave(ApplyLeave),
    UpdateLeaveStatus(UpdateLeaveStatus),
    LoadSummary(MonthlySummary),
}

impl BackgroundTask {
    /// Writes carry their own follow-up reload, so they are never replaced
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Self::AddEmployee(_) | Self::ApplyLeave(_) | Self::UpdateLeaveStatus(_)
        )
    }

    /// Loads sharing an id replace each other
    pub fn task_id(&self) -> String {
        match self {
            Self::LoadEmployees => "load_employees".to_string(),
            Self::LoadLeaves => "load_leaves".to_string(),
            Self::AddEmployee(_) => "add_employee".to_string(),
            Self::ApplyLeave(_) => "apply_leave".to_string(),
            Self::UpdateLeaveStatus(req) => format!("update_leave_{}", req.request_id()),
            Self::LoadSummary(_) => "load_summary".to_string(),
        }
    }
}

/// Manages background tasks for data loading
/// Tracks running tasks and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
    next_seq: u64,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Spawn a background task
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Drop handles of tasks that already ran to completion
        self.tasks.retain(|_, handle| !handle.is_finished());

        if let Some(handle) = self.tasks.remove(&task_id) {
            tracing::debug!("Cancelling running task {}", task_id);
            handle.abort();
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    /// Spawn a task that no later task can cancel, whatever its id
    pub fn spawn_unique_task<F>(&mut self, task_id: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());

        self.next_seq += 1;
        let key = format!("{}#{}", task_id, self.next_seq);
        tracing::debug!("Spawning task {}", key);
        self.tasks.insert(key, tokio::spawn(future));
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
