use crate::app_core::{AppCore, DataEventHandler};
use crate::background::BackgroundTask;
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use crate::ui::screens::Screen;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::time::{Duration, Instant};

/// Mock data event handler for tests (no real async tasks)
///
/// Commands run through execute_command_sync; the background work they ask
/// for is recorded instead of spawned.
#[derive(Default)]
pub struct MockDataHandler {
    pub spawned: Vec<BackgroundTask>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        let tasks = executor::execute_command_sync(command, state);
        self.spawned.extend(tasks);
    }
}

/// Render a buffer as text, one line per row, trailing blanks trimmed
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
    log_buffer: LogBuffer,
}

impl TestApp {
    /// Create a new test app with mock handler
    pub fn new() -> Self {
        Self::with_state(AppState::new())
    }

    pub fn with_notice_timeout(timeout: Duration) -> Self {
        Self::with_state(AppState::new().with_notice_timeout(timeout))
    }

    fn with_state(state: AppState) -> Self {
        Self {
            core: AppCore::with_state(MockDataHandler::new(), state),
            log_buffer: LogBuffer::new(100),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Run a command as if a key had produced it
    pub fn execute(&mut self, command: AppCommand) {
        self.core.execute(command);
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn tick(&mut self, now: Instant) {
        self.core.handle_tick(now);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Every background task requested so far, in order
    pub fn spawned_tasks(&self) -> &[BackgroundTask] {
        &self.core.handler().spawned
    }

    pub fn last_spawned_task(&self) -> Option<&BackgroundTask> {
        self.spawned_tasks().last()
    }

    /// Draw the whole app onto an in-memory terminal and return its text
    pub fn render(&self, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|f| crate::ui::render_app(f, self.state(), &self.log_buffer))
            .expect("test backend never fails");
        buffer_to_string(terminal.backend().buffer())
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    pub fn assert_on_dashboard(&self) {
        self.assert_screen_type(std::mem::discriminant(&Screen::Dashboard));
    }

    pub fn assert_notice(&self, expected: &str) {
        let notice = self.state().notice.as_ref().map(|n| n.text.as_str());
        assert_eq!(notice, Some(expected), "Unexpected notice");
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
