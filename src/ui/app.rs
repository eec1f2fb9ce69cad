//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::events::WorkerMessage;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::navigation::Page;
use crate::ui::splash::render_splash;
use crate::workers::{RefreshHandle, RefreshTrigger};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The analytics dashboard.
    Dashboard,
}

/// What a key press asks the dashboard to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    Quit,
    Refresh,
    CycleWindow,
    ToggleTheme,
    SelectPage(Page),
    NextPage,
    MoveRow(isize),
    MoveZone(isize),
    OpenDetails,
    CloseDetails,
}

/// Maps a key to its dashboard action. Esc closes an open popup before it quits.
pub fn dashboard_action(code: KeyCode, details_open: bool) -> Option<DashboardAction> {
    let action = match code {
        KeyCode::Esc if details_open => DashboardAction::CloseDetails,
        KeyCode::Esc | KeyCode::Char('q') => DashboardAction::Quit,
        KeyCode::Char('r') => DashboardAction::Refresh,
        KeyCode::Char('d') => DashboardAction::CycleWindow,
        KeyCode::Char('t') => DashboardAction::ToggleTheme,
        KeyCode::Tab => DashboardAction::NextPage,
        KeyCode::Char(c @ '1'..='5') => {
            let index = c.to_digit(10)? as usize - 1;
            DashboardAction::SelectPage(Page::iter().nth(index)?)
        }
        KeyCode::Up => DashboardAction::MoveRow(-1),
        KeyCode::Down => DashboardAction::MoveRow(1),
        KeyCode::Left => DashboardAction::MoveZone(-1),
        KeyCode::Right => DashboardAction::MoveZone(1),
        KeyCode::Enter if details_open => DashboardAction::CloseDetails,
        KeyCode::Enter => DashboardAction::OpenDetails,
        _ => return None,
    };
    Some(action)
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Lives from startup so results arriving during the
    /// splash screen are kept.
    state: DashboardState,

    /// Receives events and refresh results from worker tasks.
    message_receiver: mpsc::Receiver<WorkerMessage>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Files refresh requests with the refresher.
    refresh: RefreshHandle,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        state: DashboardState,
        message_receiver: mpsc::Receiver<WorkerMessage>,
        shutdown_sender: broadcast::Sender<()>,
        refresh: RefreshHandle,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state,
            message_receiver,
            shutdown_sender,
            refresh,
        }
    }

    /// Applies `action`. Returns false when the app should exit.
    pub fn handle_action(&mut self, action: DashboardAction) -> bool {
        let state = &mut self.state;
        match action {
            DashboardAction::Quit => return false,
            DashboardAction::Refresh => state.request_refresh(&self.refresh, RefreshTrigger::Manual),
            DashboardAction::CycleWindow => state.cycle_window(&self.refresh),
            DashboardAction::ToggleTheme => state.toggle_theme(),
            DashboardAction::SelectPage(page) => state.select_page(page),
            DashboardAction::NextPage => state.next_page(),
            DashboardAction::MoveRow(delta) => state.move_row(delta),
            DashboardAction::MoveZone(delta) => state.move_zone(delta),
            DashboardAction::OpenDetails => state.open_details(),
            DashboardAction::CloseDetails => state.close_details(),
        }
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    app.state
        .request_refresh(&app.refresh, RefreshTrigger::Startup);

    // UI event loop
    loop {
        while let Ok(message) = app.message_receiver.try_recv() {
            app.state.add_message(message);
        }
        app.state.update();

        terminal.draw(|f| render(f, app.current_screen, &app.state))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if app.current_screen == Screen::Splash {
                    // Any key other than quit skips the splash screen
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                    app.current_screen = Screen::Dashboard;
                    continue;
                }

                let details_open = app.state.details().is_some();
                if let Some(action) = dashboard_action(key.code, details_open) {
                    if !app.handle_action(action) {
                        // Send shutdown signal to workers
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f, state.theme.palette()),
        Screen::Dashboard => render_dashboard(f, state),
    }
}
