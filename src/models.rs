//! Analytics data model
//!
//! Wire types returned by the analytics backend (camelCase JSON), plus the
//! session upload contract the VR client uses against the same backend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One complete analytics payload for a trailing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_sessions: u64,
    pub avg_session_time: String,
    pub engagement_rate: String,
    pub active_properties: u64,
    pub session_trends: Vec<TrendPoint>,
    pub engagement_metrics: Vec<ZoneMetric>,
    pub recent_sessions: Vec<SessionRecord>,
}

/// Session count for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub sessions: u64,
}

/// Engagement of a named zone within a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneMetric {
    pub zone: String,
    pub visits: u64,
    /// Average time spent in the zone, in seconds.
    pub avg_time: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    Completed,
    Active,
    Pending,
}

impl SessionStatus {
    pub const ALL: [SessionStatus; 3] = [
        SessionStatus::Completed,
        SessionStatus::Active,
        SessionStatus::Pending,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub property: String,
    pub start_time: DateTime<Utc>,
    pub duration: String,
    pub status: SessionStatus,
}

/// Where a snapshot came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
pub enum DataOrigin {
    /// Read from the analytics backend.
    Live,
    /// Generated locally because the backend was unavailable or not configured.
    #[default]
    Demo,
}

/// A value together with the origin it was obtained from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub value: T,
    pub origin: DataOrigin,
}

impl<T> Fetched<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Live,
        }
    }

    pub fn demo(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Demo,
        }
    }
}

/// Trailing windows offered by the date range selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WindowSize {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl WindowSize {
    pub const ALL: [WindowSize; 4] = [
        WindowSize::Week,
        WindowSize::Month,
        WindowSize::Quarter,
        WindowSize::Year,
    ];

    pub fn days(&self) -> u32 {
        match self {
            WindowSize::Week => 7,
            WindowSize::Month => 30,
            WindowSize::Quarter => 90,
            WindowSize::Year => 365,
        }
    }

    /// Window matching a day count, if it is one of the selectable sizes.
    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }

    /// Next window in the selector, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|w| w == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl Display for WindowSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Last {} days", self.days())
    }
}

/// Liveness report from the backend's `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    /// Status line text, e.g. `healthy v1.0.0, db connected`.
    pub fn describe(&self) -> String {
        let mut text = self.status.clone();
        if let Some(version) = &self.version {
            text.push_str(&format!(" v{}", version));
        }
        if let Some(database) = &self.database {
            text.push_str(&format!(", db {}", database));
        }
        text
    }
}

/// Body accepted by `POST {base}/unreal/session`.
///
/// Timestamps are Unix seconds encoded as strings. This contract belongs to the
/// VR client; the dashboard never sends it.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUpload {
    pub session_start: String,
    pub session_end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

/// Successful (201) reply to a session upload.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUploadReceipt {
    pub status: String,
    pub session_id: String,
    pub duration_seconds: i64,
    pub received_at: String,
}

/// One entry of a 422 validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

/// Body of a 422 reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationErrorDetail>,
}

impl ValidationErrorResponse {
    /// `field: reason` pairs, e.g. `session_start: field required`.
    pub fn summary(&self) -> String {
        self.detail
            .iter()
            .map(|d| {
                let field = d.loc.iter().filter_map(|v| v.as_str()).last();
                format!("{}: {}", field.unwrap_or("request"), d.msg)
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_decodes_camel_case_payload() {
        let json = r#"{
            "totalSessions": 1247,
            "avgSessionTime": "8m 32s",
            "engagementRate": "87.3%",
            "activeProperties": 24,
            "sessionTrends": [{"date": "2026-10-18", "sessions": 42}],
            "engagementMetrics": [{"zone": "Kitchen", "visits": 380, "avgTime": 210}],
            "recentSessions": [{
                "id": "SES00001",
                "property": "Beach House",
                "startTime": "2026-10-18T09:30:00Z",
                "duration": "12m 5s",
                "status": "active"
            }]
        }"#;
        let snapshot: AnalyticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_sessions, 1247);
        assert_eq!(snapshot.engagement_metrics[0].avg_time, 210);
        assert_eq!(snapshot.recent_sessions[0].status, SessionStatus::Active);
        assert_eq!(
            snapshot.session_trends[0].date,
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id":"x","property":"p","startTime":"2026-10-18T09:30:00Z","duration":"1m 0s","status":"archived"}"#;
        assert!(serde_json::from_str::<SessionRecord>(json).is_err());
    }

    #[test]
    fn test_window_size_cycles_through_all_sizes() {
        let mut window = WindowSize::Week;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(window.days());
            window = window.next();
        }
        assert_eq!(seen, vec![7, 30, 90, 365]);
        assert_eq!(window, WindowSize::Week);
        assert_eq!(WindowSize::from_days(90), Some(WindowSize::Quarter));
        assert_eq!(WindowSize::from_days(14), None);
    }

    #[test]
    fn test_session_upload_omits_absent_optionals() {
        let upload = SessionUpload {
            session_start: "1727653800".to_string(),
            session_end: "1727654100".to_string(),
            customer_id: None,
            property_id: Some("prop_67890".to_string()),
            device_type: None,
        };
        let json = serde_json::to_value(&upload).unwrap();
        assert!(json.get("customer_id").is_none());
        assert_eq!(json["property_id"], "prop_67890");
    }

    #[test]
    fn test_health_decodes_and_describes() {
        let json = r#"{
            "status": "healthy",
            "timestamp": "2026-10-19T08:00:00+00:00",
            "environment": "development",
            "database": "connected",
            "version": "1.0.0"
        }"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.describe(), "healthy v1.0.0, db connected");

        let degraded: HealthStatus = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!degraded.is_healthy());
        assert_eq!(degraded.describe(), "degraded");
    }

    #[test]
    fn test_upload_receipt_decodes() {
        let json = r#"{
            "status": "success",
            "session_id": "sess_1727654100",
            "duration_seconds": 300,
            "received_at": "2024-09-30T00:15:00"
        }"#;
        let receipt: SessionUploadReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.status, "success");
        assert_eq!(receipt.duration_seconds, 300);
        assert_eq!(receipt.session_id, "sess_1727654100");
    }

    #[test]
    fn test_validation_error_decodes() {
        let json = r#"{"detail":[{"loc":["body","session_start"],"msg":"field required","type":"value_error.missing"}]}"#;
        let response: ValidationErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.detail.len(), 1);
        assert_eq!(response.summary(), "session_start: field required");
    }
}
