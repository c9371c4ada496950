use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app_core::{AppCore, DataEventHandler};
use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::{executor, AppCommand};
use crate::config::Settings;
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging_with_buffer;
use crate::state::AppState;
use crate::ui::screens::Screen;
use leave_api::Client;

/// Runs commands for real: state changes plus spawned requests
struct LiveHandler {
    task_manager: BackgroundTaskManager,
    data_loader: DataLoader,
}

impl DataEventHandler for LiveHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        // Don't log when on logs screen to avoid feedback loop
        if !matches!(state.current_screen(), Screen::Logs(_)) {
            tracing::info!("Executing command: {:?}", command);
        }
        executor::execute_command(command, state, &mut self.task_manager, &self.data_loader);
    }
}

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        // Create log buffer before initializing logging
        let log_buffer = LogBuffer::new(5000);
        let log_path =
            init_logging_with_buffer(log_buffer.clone(), self.settings.log_dir.as_deref())?;

        tracing::info!("leavedesk starting, logging to {}", log_path.display());
        tracing::info!("Using leave service at {}", self.settings.api_base_url);

        let api_client = match self.settings.request_timeout() {
            Some(timeout) => Client::with_timeout(&self.settings.api_base_url, timeout)?,
            None => Client::new(&self.settings.api_base_url),
        };

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();
        let handler = LiveHandler {
            task_manager: BackgroundTaskManager::new(),
            data_loader: DataLoader::new(Arc::new(api_client), data_tx),
        };
        let ui_state = AppState::new().with_notice_timeout(self.settings.notice_timeout());
        let mut core = AppCore::with_state(handler, ui_state);

        let mut terminal = self.init()?;
        let mut event_stream = EventStream::new();

        tracing::info!("Loading employees and leave requests");
        core.execute(AppCommand::LoadEmployees);
        core.execute(AppCommand::LoadLeaves);

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            // Update total_entries for logs screen if active
            if let Screen::Logs(logs_state) = core.state_mut().current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, core.state(), &log_buffer);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    core.handle_tick(Instant::now());
                }
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            if !matches!(core.state().current_screen(), Screen::Logs(_)) {
                                tracing::debug!("Key press: {:?}", key);
                            }
                            core.handle_key(KeyEvent::from(key));
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }

            // Check if we should quit
            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        // Dropping the core cancels in-flight requests
        drop(core);

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
