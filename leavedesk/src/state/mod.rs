pub mod chart;
pub mod filter;
pub mod forms;
pub mod reducer;
pub mod validators;

use crate::ui::screens::Screen;
use chart::{StatusChart, StatusCounts};
use forms::FormState;
use leave_api::endpoints::{employees::Employee, leave::LeaveRequest, summary::SummaryRow};
use leave_api::endpoints::EmployeeId;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

impl LoadingState {
    pub fn loading() -> Self {
        LoadingState::Loading(ThrobberState::default())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// The dashboard panel that receives selection, filter and action keys
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Employees,
    Leaves,
}

impl Panel {
    pub fn other(&self) -> Self {
        match self {
            Panel::Employees => Panel::Leaves,
            Panel::Leaves => Panel::Employees,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient banner shown after a write, hidden once it is older than the notice timeout
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub shown_at: Instant,
}

/// Headline numbers, always over the full stores
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardCounts {
    pub employees: usize,
    pub statuses: StatusCounts,
}

impl DashboardCounts {
    pub fn from_stores(employees: &[Employee], leaves: &[LeaveRequest]) -> Self {
        Self {
            employees: employees.len(),
            statuses: StatusCounts::tally(leaves),
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct EmployeesPanel {
    pub employees: Vec<Employee>,
    pub loading: LoadingState,
    pub table_state: RefCell<TableState>,
    pub input_mode: InputMode,
    pub filter_query: String,
}

impl EmployeesPanel {
    pub fn filtered_employees(&self) -> Vec<&Employee> {
        filter::filter_employees(&self.employees, &self.filter_query)
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        let selected = self.table_state.borrow().selected()?;
        self.filtered_employees().get(selected).copied()
    }
}

#[derive(Default, Debug, Clone)]
pub struct LeavesPanel {
    pub leaves: Vec<LeaveRequest>,
    pub loading: LoadingState,
    pub table_state: RefCell<TableState>,
    pub input_mode: InputMode,
    pub filter_query: String,
    pub chart: StatusChart,
}

impl LeavesPanel {
    pub fn filtered_leaves(&self) -> Vec<&LeaveRequest> {
        filter::filter_leaves(&self.leaves, &self.filter_query)
    }

    pub fn selected_leave(&self) -> Option<&LeaveRequest> {
        let selected = self.table_state.borrow().selected()?;
        self.filtered_leaves().get(selected).copied()
    }

    /// Redraw the status chart from the current filter
    pub fn redraw_chart(&mut self) {
        let filtered = filter::filter_leaves(&self.leaves, &self.filter_query);
        let source = filter::chart_source(&filtered, &self.leaves);
        self.chart.redraw(source);
    }
}

#[derive(Default, Debug, Clone)]
pub struct SummaryState {
    pub employee_id: Option<EmployeeId>,
    pub month: u32,
    pub year: i32,
    pub rows: Vec<SummaryRow>,
    pub loading: LoadingState,
    pub table_state: RefCell<TableState>,
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    // Stores and their panels
    pub employees: EmployeesPanel,
    pub leaves: LeavesPanel,
    pub counts: DashboardCounts,
    pub focus: Panel,

    // Overlays
    pub form: Option<FormState>,
    pub notice: Option<Notice>,
    pub notice_timeout: Duration,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Dashboard],

            employees: EmployeesPanel::default(),
            leaves: LeavesPanel::default(),
            counts: DashboardCounts::default(),
            focus: Panel::default(),

            form: None,
            notice: None,
            notice_timeout: Duration::from_millis(4200),

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    pub fn with_notice_timeout(mut self, timeout: Duration) -> Self {
        self.notice_timeout = timeout;
        self
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already on the dashboard");
            false
        }
    }

    /// Replace the summary screen on top of the stack, or push a new one
    pub fn show_summary(&mut self, summary: SummaryState) {
        if let Screen::Summary(current) = self.current_screen_mut() {
            *current = summary;
        } else {
            self.navigate_to(Screen::Summary(summary));
        }
    }

    pub fn is_on_dashboard(&self) -> bool {
        matches!(self.current_screen(), Screen::Dashboard)
    }

    pub fn focused_input_mode(&self) -> &InputMode {
        match self.focus {
            Panel::Employees => &self.employees.input_mode,
            Panel::Leaves => &self.leaves.input_mode,
        }
    }

    pub fn recompute_counts(&mut self) {
        self.counts = DashboardCounts::from_stores(&self.employees.employees, &self.leaves.leaves);
    }

    pub fn show_notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        let text = text.into();
        match kind {
            NoticeKind::Success => tracing::info!("{}", text),
            NoticeKind::Error => tracing::warn!("{}", text),
        }
        self.notice = Some(Notice {
            text,
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Drop the notice once it has been visible for the notice timeout
    pub fn expire_notice(&mut self, now: Instant) {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.notice_timeout);
        if expired {
            self.notice = None;
        }
    }

    /// Advance every visible spinner
    pub fn tick_throbbers(&mut self) {
        let summary_loading = match self.current_screen_mut() {
            Screen::Summary(summary) => Some(&mut summary.loading),
            _ => None,
        };
        if let Some(LoadingState::Loading(throbber)) = summary_loading {
            throbber.calc_next();
        }

        for loading in [&mut self.employees.loading, &mut self.leaves.loading] {
            if let LoadingState::Loading(throbber) = loading {
                throbber.calc_next();
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let mut table_state = self.table_state().borrow_mut();
        if self.num_items() > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select_last();
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }

    fn select_first(&mut self) {
        if self.num_items() > 0 {
            self.table_state().borrow_mut().select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let num_items = self.num_items();
        if num_items > 0 {
            self.table_state().borrow_mut().select(Some(num_items - 1));
        }
    }

    /// Keep the selection inside the list after its contents change
    fn clamp_selection(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        match table_state.selected() {
            _ if num_items == 0 => table_state.select(None),
            None => table_state.select(Some(0)),
            Some(i) if i >= num_items => table_state.select(Some(num_items - 1)),
            Some(_) => {}
        }
    }
}

impl Scrollable for EmployeesPanel {
    fn num_items(&self) -> usize {
        self.filtered_employees().len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for LeavesPanel {
    fn num_items(&self) -> usize {
        self.filtered_leaves().len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for SummaryState {
    fn num_items(&self) -> usize {
        self.rows.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
