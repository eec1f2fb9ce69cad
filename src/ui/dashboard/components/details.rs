//! Session details popup

use super::super::state::DashboardState;
use super::super::table::SessionDetails;
use super::super::utils::status_color;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

/// Centered rectangle of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

pub fn render_details_popup(f: &mut Frame, state: &DashboardState) {
    let Some(details) = state.details() else {
        return;
    };
    let palette = state.theme.palette();
    let area = centered(f.area(), 56, 11);

    let block = Block::default()
        .title(format!("Session {}", details.id))
        .title_bottom(Line::from("[Esc] Close").centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface).fg(palette.text))
        .padding(Padding::uniform(1));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(detail_lines(details)).block(block), area);
}

fn detail_lines(details: &SessionDetails) -> Vec<Line<'static>> {
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(value),
        ])
    };
    vec![
        field("Session ID", details.id.clone()),
        field("Property", details.property.clone()),
        field("Start Time", details.start_time.clone()),
        field("Duration", details.duration.clone()),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Status"), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" {} ", details.status),
                Style::default().fg(Color::Black).bg(status_color(details.status)),
            ),
        ]),
    ]
}
