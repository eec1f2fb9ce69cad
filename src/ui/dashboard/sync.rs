//! Keeps the rendered view in step with the latest snapshot
//!
//! Every synchronization replaces the KPI values, both charts, and the sessions
//! table as a unit. Outcomes older than the last applied one are dropped so a
//! slow cycle can't overwrite the result of a newer request.

use super::charts::{TrendChart, ZoneChart};
use super::table::{ActionTable, SessionDetails, SessionTable};
use super::utils::format_thousands;
use crate::models::{AnalyticsSnapshot, DataOrigin, HealthStatus};
use crate::workers::RefreshOutcome;
use chrono::{DateTime, Local};

/// Formatted values of the four KPI cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KpiValues {
    pub total_sessions: Option<String>,
    pub avg_session_time: Option<String>,
    pub engagement_rate: Option<String>,
    pub active_properties: Option<String>,
}

impl KpiValues {
    fn from_snapshot(snapshot: &AnalyticsSnapshot) -> Self {
        Self {
            total_sessions: Some(format_thousands(snapshot.total_sessions)),
            avg_session_time: Some(snapshot.avg_session_time.clone()),
            engagement_rate: Some(snapshot.engagement_rate.clone()),
            active_properties: Some(format_thousands(snapshot.active_properties)),
        }
    }

    /// (label, value) pairs in display order; unset slots render as `-`.
    pub fn cards(&self) -> [(&'static str, &str); 4] {
        fn show(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("-")
        }
        [
            ("Total Sessions", show(&self.total_sessions)),
            ("Avg Session Time", show(&self.avg_session_time)),
            ("Engagement Rate", show(&self.engagement_rate)),
            ("Active Properties", show(&self.active_properties)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct ViewSynchronizer {
    kpis: KpiValues,
    trend_chart: Option<TrendChart>,
    zone_chart: Option<ZoneChart>,
    table: SessionTable,
    actions: ActionTable,
    origin: Option<DataOrigin>,
    health: Option<HealthStatus>,
    fallback_reason: Option<String>,
    last_applied_token: u64,
    days: Option<u32>,
    last_updated: Option<DateTime<Local>>,
}

impl ViewSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a finished refresh unless a newer one was already applied.
    /// Returns whether the view changed.
    pub fn apply_outcome(&mut self, outcome: &RefreshOutcome) -> bool {
        if outcome.token < self.last_applied_token {
            return false;
        }
        self.last_applied_token = outcome.token;
        self.days = Some(outcome.days);
        self.health = outcome.health.clone();
        self.fallback_reason = outcome.fallback_reason.as_ref().map(|(r, _)| r.clone());
        self.last_updated = Some(outcome.completed_at);
        self.synchronize(&outcome.snapshot, outcome.origin);
        true
    }

    /// Replaces every view element with values from `snapshot`.
    pub fn synchronize(&mut self, snapshot: &AnalyticsSnapshot, origin: DataOrigin) {
        self.kpis = KpiValues::from_snapshot(snapshot);

        // Release the previous chart instances before building their replacements.
        drop(self.trend_chart.take());
        drop(self.zone_chart.take());
        self.trend_chart = Some(TrendChart::build(&snapshot.session_trends));
        self.zone_chart = Some(ZoneChart::build(&snapshot.engagement_metrics));

        self.table = SessionTable::build(&snapshot.recent_sessions, &mut self.actions);
        self.origin = Some(origin);
    }

    pub fn kpis(&self) -> &KpiValues {
        &self.kpis
    }

    pub fn trend_chart(&self) -> Option<&TrendChart> {
        self.trend_chart.as_ref()
    }

    pub fn zone_chart(&self) -> Option<&ZoneChart> {
        self.zone_chart.as_ref()
    }

    pub fn table(&self) -> &SessionTable {
        &self.table
    }

    /// Runs the "View Details" action of the session on table row `row`.
    pub fn view_details(&self, row: usize) -> Option<SessionDetails> {
        let id = self.table.session_id(row)?;
        self.actions.invoke(id)
    }

    /// `None` until the first snapshot has been applied.
    pub fn origin(&self) -> Option<DataOrigin> {
        self.origin
    }

    pub fn health(&self) -> Option<&HealthStatus> {
        self.health.as_ref()
    }

    /// Why the snapshot on screen is demo data, if the backend read failed.
    pub fn fallback_reason(&self) -> Option<&str> {
        self.fallback_reason.as_deref()
    }

    pub fn last_applied_token(&self) -> u64 {
        self.last_applied_token
    }

    /// Window size of the snapshot on screen.
    pub fn days(&self) -> Option<u32> {
        self.days
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn has_data(&self) -> bool {
        self.origin.is_some()
    }
}
