//! Dashboard main renderer

use super::components::{charts, details, footer, header, kpis, logs, sessions};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let palette = state.theme.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.area(),
    );

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(40),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    kpis::render_kpi_cards(f, main_chunks[1], state);
    charts::render_charts_section(f, main_chunks[2], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[3]);

    sessions::render_sessions_table(f, bottom_chunks[0], state);
    logs::render_logs_panel(f, bottom_chunks[1], state);
    footer::render_footer(f, main_chunks[4], state);

    details::render_details_popup(f, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::logging::LogLevel;
    use crate::mock;
    use crate::models::{DataOrigin, WindowSize};
    use crate::ui::dashboard::state::UIConfig;
    use crate::ui::theme::{MemoryThemeStore, ThemeController};
    use crate::workers::{RefreshOutcome, RefreshTrigger};
    use chrono::Local;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            ThemeController::init(Box::new(MemoryThemeStore::default())),
            UIConfig::new(false, true, WindowSize::Month),
        )
    }

    fn draw(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_demo_snapshot_renders_kpis_and_indicator() {
        let mut state = state();
        state
            .synchronizer
            .synchronize(&mock::snapshot(30), DataOrigin::Demo);

        let screen = draw(&state);
        assert!(screen.contains("1,247"));
        assert!(screen.contains("8m 32s"));
        assert!(screen.contains("87.3%"));
        assert!(screen.contains("DEMO DATA"));
        assert!(screen.contains("SES00001"));
        assert!(screen.contains("View Details"));
    }

    #[test]
    fn test_empty_sessions_render_placeholder() {
        let mut state = state();
        let mut snapshot = mock::snapshot(7);
        snapshot.recent_sessions.clear();
        state.synchronizer.synchronize(&snapshot, DataOrigin::Live);

        let screen = draw(&state);
        assert!(screen.contains("No sessions found"));
        assert!(screen.contains("LIVE"));
        assert!(!screen.contains("View Details"));
    }

    #[test]
    // The header says why demo data replaced the backend's.
    fn test_header_shows_fallback_reason() {
        let mut state = state();
        state.synchronizer.apply_outcome(&RefreshOutcome {
            token: 1,
            days: 30,
            trigger: RefreshTrigger::Startup,
            snapshot: mock::snapshot(30),
            origin: DataOrigin::Demo,
            fallback_reason: Some((
                "Analytics unavailable (Reqwest error: error sending request), showing demo data"
                    .to_string(),
                LogLevel::Warn,
            )),
            health: None,
            completed_at: Local::now(),
        });

        let screen = draw(&state);
        assert!(screen.contains("DEMO DATA"));
        assert!(screen.contains("Analytics unavailable (backend unreachable), showing demo data"));
    }

    #[test]
    fn test_header_follows_navigation() {
        let mut state = state();
        state.navigator.select("insights");

        let screen = draw(&state);
        assert!(screen.contains("AI-powered recommendations and predictions"));
        assert!(screen.contains("Loading..."));
    }

    #[test]
    fn test_details_popup_shows_selected_session() {
        let mut state = state();
        state
            .synchronizer
            .synchronize(&mock::snapshot(30), DataOrigin::Demo);
        state.move_row(2);
        state.open_details();

        let screen = draw(&state);
        assert!(screen.contains("Session SES00003"));
        assert!(screen.contains("[Esc] Close"));
    }
}
