//! KPI cards component
//!
//! Renders the four headline metrics of the current snapshot

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_kpi_cards(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let palette = state.theme.palette();
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value), chunk) in state.synchronizer.kpis().cards().iter().zip(card_chunks.iter()) {
        let mut block = Block::default()
            .title(*label)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title_style(Style::default().fg(palette.muted));
        if state.with_background_color {
            block = block.style(Style::default().bg(palette.surface));
        }

        let card = Paragraph::new(Line::from(value.to_string()))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);
        f.render_widget(card, *chunk);
    }
}
