//! Chart components
//!
//! Turns the trend and zone chart configurations into ratatui widgets

use super::super::state::DashboardState;
use crate::ui::dashboard::charts::{TrendChart, ZoneChart};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph,
};

pub fn render_charts_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_trend_chart(f, chunks[0], state);
    render_zone_chart(f, chunks[1], state);
}

fn chart_block(title: String, state: &DashboardState) -> Block<'static> {
    let palette = state.theme.palette();
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD));
    if state.with_background_color {
        block.style(Style::default().bg(palette.surface))
    } else {
        block
    }
}

fn render_placeholder(f: &mut Frame, area: ratatui::layout::Rect, block: Block, text: &str) {
    let placeholder = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(placeholder, area);
}

pub fn render_trend_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let palette = state.theme.palette();
    let days = state
        .synchronizer
        .days()
        .unwrap_or_else(|| state.window.days());
    let block = chart_block(format!("Session Trends (last {} days)", days), state);

    let chart: &TrendChart = match state.synchronizer.trend_chart() {
        Some(chart) if !chart.is_empty() => chart,
        Some(_) => return render_placeholder(f, area, block, "No trend data"),
        None => return render_placeholder(f, area, block, "Loading..."),
    };

    let mut datasets = Vec::with_capacity(2);
    if chart.filled {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(palette.accent).add_modifier(Modifier::DIM))
                .data(&chart.curve),
        );
    }
    datasets.push(
        Dataset::default()
            .name("Sessions")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
            .data(&chart.curve),
    );

    let y_max = chart.y_bounds[1];
    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(palette.muted))
                .bounds(chart.x_bounds)
                .labels(chart.axis_labels()),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(palette.muted))
                .bounds(chart.y_bounds)
                .labels(vec![
                    "0".to_string(),
                    format!("{}", (y_max / 2.0).round()),
                    format!("{}", y_max),
                ]),
        );
    f.render_widget(widget, area);
}

pub fn render_zone_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let palette = state.theme.palette();
    let mut block = chart_block("Engagement by Zone".to_string(), state);

    let chart: &ZoneChart = match state.synchronizer.zone_chart() {
        Some(chart) if !chart.is_empty() => chart,
        Some(_) => return render_placeholder(f, area, block, "No zone data"),
        None => return render_placeholder(f, area, block, "Loading..."),
    };

    if let Some(tooltip) = state.zone_tooltip() {
        block = block.title_bottom(Line::from(tooltip).alignment(Alignment::Center));
    }

    // Bars share the inner width, one column of gap between them.
    let inner_width = area.width.saturating_sub(2);
    let count = chart.len() as u16;
    let bar_width = (inner_width.saturating_sub(count.saturating_sub(1)) / count.max(1)).max(1);

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let style = if i == state.selected_zone() {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            Bar::default()
                .value(bar.visits)
                .label(Line::from(bar.zone.clone()))
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED))
        })
        .collect();

    let widget = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(chart.max_visits().max(1));
    f.render_widget(widget, area);
}
