//! Chart configurations built from a snapshot
//!
//! Both charts are plain data; the components turn them into ratatui widgets.

use crate::models::{TrendPoint, ZoneMetric};

/// Curve tension of the trend line (0 = straight segments).
pub const TREND_TENSION: f64 = 0.4;
/// Interpolated samples between two consecutive trend points.
const SAMPLES_PER_SEGMENT: usize = 6;

/// Smoothed, filled line of daily sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    /// Day labels, one per point (`Oct 19`).
    pub labels: Vec<String>,
    /// One point per day: (index, sessions).
    pub points: Vec<(f64, f64)>,
    /// Points of the smoothed curve, used to draw the line and its fill.
    pub curve: Vec<(f64, f64)>,
    pub filled: bool,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl TrendChart {
    pub fn build(trends: &[TrendPoint]) -> Self {
        let labels = trends
            .iter()
            .map(|p| p.date.format("%b %d").to_string())
            .collect();
        let points: Vec<(f64, f64)> = trends
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.sessions as f64))
            .collect();
        let curve = smooth(&points, TREND_TENSION, SAMPLES_PER_SEGMENT);

        let max = points.iter().map(|(_, y)| *y).fold(0.0, f64::max);
        let y_max = if max > 0.0 { (max * 1.1).ceil() } else { 1.0 };
        let x_max = points.len().saturating_sub(1).max(1) as f64;

        Self {
            labels,
            points,
            curve,
            filled: true,
            x_bounds: [0.0, x_max],
            y_bounds: [0.0, y_max],
        }
    }

    /// First, middle and last day labels for the x axis.
    pub fn axis_labels(&self) -> Vec<String> {
        match self.labels.len() {
            0 => Vec::new(),
            1 => vec![self.labels[0].clone()],
            n => vec![
                self.labels[0].clone(),
                self.labels[n / 2].clone(),
                self.labels[n - 1].clone(),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Cardinal spline through `points`, sampled `samples` times per segment.
///
/// Interpolated values never drop below zero since session counts can't.
fn smooth(points: &[(f64, f64)], tension: f64, samples: usize) -> Vec<(f64, f64)> {
    if points.len() < 3 || tension == 0.0 {
        return points.to_vec();
    }

    let tangent = |i: usize| -> f64 {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(points.len() - 1)];
        let dx = next.0 - prev.0;
        if dx == 0.0 {
            0.0
        } else {
            tension * 2.0 * (next.1 - prev.1) / dx
        }
    };

    let mut curve = Vec::with_capacity((points.len() - 1) * samples + 1);
    for i in 0..points.len() - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let (m0, m1) = (tangent(i) * (x1 - x0), tangent(i + 1) * (x1 - x0));
        for step in 0..samples {
            let t = step as f64 / samples as f64;
            let (t2, t3) = (t * t, t * t * t);
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            let y = h00 * y0 + h10 * m0 + h01 * y1 + h11 * m1;
            curve.push((x0 + t * (x1 - x0), y.max(0.0)));
        }
    }
    if let Some(last) = points.last() {
        curve.push(*last);
    }
    curve
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneBar {
    pub zone: String,
    pub visits: u64,
}

/// Visits per zone, with average time available for tooltips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneChart {
    pub bars: Vec<ZoneBar>,
    avg_times: Vec<u64>,
}

impl ZoneChart {
    pub fn build(metrics: &[ZoneMetric]) -> Self {
        Self {
            bars: metrics
                .iter()
                .map(|m| ZoneBar {
                    zone: m.zone.clone(),
                    visits: m.visits,
                })
                .collect(),
            avg_times: metrics.iter().map(|m| m.avg_time).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_visits(&self) -> u64 {
        self.bars.iter().map(|b| b.visits).max().unwrap_or(0)
    }

    /// Hover text for the bar at `index`: visits plus that zone's average time.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let bar = self.bars.get(index)?;
        let mut text = format!("{}: {} visits", bar.zone, bar.visits);
        if let Some(avg) = self.avg_times.get(index) {
            text.push_str(&format!(" | Avg Time: {}s", avg));
        }
        Some(text)
    }
}
