//! Recent sessions table component

use super::super::state::DashboardState;
use super::super::table::{COLUMNS, TableRow};
use super::super::utils::status_color;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

const WIDTHS: [Constraint; 6] = [
    Constraint::Length(10),
    Constraint::Fill(2),
    Constraint::Length(14),
    Constraint::Length(9),
    Constraint::Length(11),
    Constraint::Length(14),
];

pub fn render_sessions_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let palette = state.theme.palette();
    let mut block = Block::default()
        .title("Recent Sessions")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD));
    if state.with_background_color {
        block = block.style(Style::default().bg(palette.surface));
    }

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(Style::default().fg(palette.muted).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows = state.synchronizer.table().rows();
    let session_rows: Vec<Row> = rows
        .iter()
        .filter_map(|row| match row {
            TableRow::Session(session) => Some(Row::new(vec![
                Cell::from(session.id.clone()),
                Cell::from(session.property.clone()),
                Cell::from(session.start_time.clone()),
                Cell::from(session.duration.clone()),
                Cell::from(Span::styled(
                    format!(" {} ", session.status),
                    Style::default()
                        .fg(Color::Black)
                        .bg(status_color(session.status)),
                )),
                Cell::from(Span::styled(
                    session.action,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::UNDERLINED),
                )),
            ])),
            TableRow::Placeholder { .. } => None,
        })
        .collect();

    let inner = block.inner(area);
    let table = Table::new(session_rows, WIDTHS)
        .header(header)
        .style(Style::default().fg(palette.text))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ")
        .block(block);

    let mut table_state = TableState::default();
    if state.synchronizer.table().session_count() > 0 {
        table_state.select(Some(state.selected_row()));
    }
    f.render_stateful_widget(table, area, &mut table_state);

    // Placeholder spans the full table width under the header.
    if let Some(TableRow::Placeholder { message, .. }) = rows.first() {
        let message_area = Rect {
            y: inner.y.saturating_add(2),
            height: inner.height.saturating_sub(2).min(1),
            ..inner
        };
        let placeholder = Paragraph::new(*message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC));
        f.render_widget(placeholder, message_area);
    } else if !state.synchronizer.has_data() {
        let message_area = Rect {
            y: inner.y.saturating_add(2),
            height: inner.height.saturating_sub(2).min(1),
            ..inner
        };
        f.render_widget(
            Paragraph::new("Loading...").alignment(Alignment::Center),
            message_area,
        );
    }
}
