//! Dashboard header component
//!
//! Renders the page title, data status and navigation tabs

use super::super::state::DashboardState;
use super::super::utils::clean_http_error_message;
use crate::models::DataOrigin;
use crate::ui::navigation::Page;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use strum::IntoEnumIterator;

/// Render header with the active page's title, data status and page tabs.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let palette = state.theme.palette();
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2)])
        .split(area);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(header_chunks[0]);

    let page = state.navigator.header();
    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("NEXERO v{} ", env!("CARGO_PKG_VERSION")),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                page.title,
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(page.subtitle, Style::default().fg(palette.muted))),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(title, top_chunks[0]);

    let mut status_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(palette.border));
    // Why the data on screen is not live.
    if let Some(reason) = state.synchronizer.fallback_reason() {
        status_block = status_block.title_bottom(
            Line::from(format!(" {} ", clean_http_error_message(reason)))
                .right_aligned()
                .style(Style::default().fg(Color::Yellow)),
        );
    }
    let status = Paragraph::new(status_lines(state))
        .alignment(Alignment::Right)
        .block(status_block);
    f.render_widget(status, top_chunks[1]);

    let titles: Vec<Line> = Page::iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.label())))
        .collect();
    let selected = Page::iter()
        .position(|p| state.navigator.is_active(p))
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(tabs, header_chunks[1]);
}

fn status_lines(state: &DashboardState) -> Vec<Line<'static>> {
    let palette = state.theme.palette();

    let origin = match state.synchronizer.origin() {
        Some(DataOrigin::Live) => Span::styled(
            " LIVE ",
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Some(DataOrigin::Demo) => Span::styled(
            " DEMO DATA ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(" LOADING ", Style::default().fg(palette.muted)),
    };

    let health = if state.mock_only {
        Span::styled("no backend", Style::default().fg(palette.muted))
    } else {
        match state.synchronizer.health() {
            Some(h) if h.is_healthy() => {
                Span::styled(format!("API {}", h.describe()), Style::default().fg(Color::Green))
            }
            Some(h) => Span::styled(format!("API {}", h.describe()), Style::default().fg(Color::Yellow)),
            None => Span::styled("API unreachable", Style::default().fg(Color::Red)),
        }
    };

    let refresh = if state.is_refreshing() {
        Span::styled(
            "Refreshing...",
            Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
        )
    } else if let Some(updated) = state.synchronizer.last_updated() {
        Span::styled(
            format!("Updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(palette.muted),
        )
    } else {
        Span::raw("")
    };

    vec![
        Line::from(vec![
            origin,
            Span::styled(
                format!("  {} | {}", state.window, state.theme.mode()),
                Style::default().fg(palette.text),
            ),
        ]),
        Line::from(vec![
            health,
            Span::styled(format!(" ({}) | ", state.environment), Style::default().fg(palette.muted)),
            refresh,
        ]),
    ]
}
