//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::config::get_config_path;
use crate::models::WindowSize;
use crate::ui::dashboard::{DashboardState, UIConfig};
use crate::ui;
use crate::ui::theme::{ConfigThemeStore, MemoryThemeStore, ThemeController, ThemeStore};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::{error::Error, io};

/// Theme store backed by the config file, or in memory if there is no home directory.
fn theme_store(config_path: Result<PathBuf, io::Error>) -> Box<dyn ThemeStore> {
    match config_path {
        Ok(path) => Box::new(ConfigThemeStore::new(path)),
        Err(e) => {
            log::warn!("Theme preference will not be saved: {}", e);
            Box::new(MemoryThemeStore::default())
        }
    }
}

/// Runs the dashboard in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
/// 3. Proper shutdown handling
pub async fn run_tui_mode(
    session: SessionData,
    window: WindowSize,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.source_label);

    let state = DashboardState::new(
        session.environment.clone(),
        ThemeController::init(theme_store(get_config_path())),
        UIConfig::new(with_background, session.mock_only, window),
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(
        state,
        session.message_receiver,
        session.shutdown_sender.clone(),
        session.refresh,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    // Wait for workers to finish
    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
