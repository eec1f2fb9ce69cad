//! Dashboard footer component
//!
//! Renders the key bindings; the refresh key is dimmed while a refresh is in flight

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const KEYS: [(&str, &str); 7] = [
    ("D", "Date range"),
    ("T", "Theme"),
    ("1-5/Tab", "Pages"),
    ("Up/Down", "Rows"),
    ("Left/Right", "Zones"),
    ("Enter", "Details"),
    ("Q", "Quit"),
];

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let palette = state.theme.palette();
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let refresh_style = if state.is_refreshing() {
        Style::default().fg(palette.muted).add_modifier(Modifier::DIM)
    } else {
        key_style
    };
    let mut spans = vec![Span::styled("[R] Refresh", refresh_style)];
    for (key, action) in KEYS {
        spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        spans.push(Span::styled(format!("[{}] {}", key, action), key_style));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(footer, area);
}
