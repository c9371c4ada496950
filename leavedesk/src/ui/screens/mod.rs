pub mod dashboard_screen;
pub mod logs_screen;
pub mod summary_screen;

use crate::state::{LogsState, SummaryState};

#[derive(Debug, Clone)]
pub enum Screen {
    Dashboard,
    Summary(SummaryState),
    Logs(LogsState),
}
