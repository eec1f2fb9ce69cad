//! Remote data with a mock fallback
//!
//! Backend failures never reach callers: the sessions read degrades to an
//! empty list and the analytics read to a full mock snapshot. The substitution
//! is logged and reported through the returned [`DataOrigin`].

use crate::api::AnalyticsApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::logging::{self, LogLevel};
use crate::mock;
use crate::models::{AnalyticsSnapshot, DataOrigin, Fetched, HealthStatus, SessionRecord};
use chrono::Utc;

/// Result of a read that may have been substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub fetched: Fetched<T>,
    /// Why the backend value was replaced, if it was.
    pub fallback: Option<Fallback>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub reason: String,
    pub log_level: LogLevel,
}

impl<T> Resolved<T> {
    fn live(value: T) -> Self {
        Self {
            fetched: Fetched::live(value),
            fallback: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.fetched.value
    }

    pub fn into_value(self) -> T {
        self.fetched.value
    }

    pub fn origin(&self) -> DataOrigin {
        self.fetched.origin
    }
}

pub struct DataSource {
    api: Option<Box<dyn AnalyticsApi>>,
    classifier: ErrorClassifier,
}

impl DataSource {
    /// Reads from the given backend, falling back to mock data on failure.
    pub fn remote(api: Box<dyn AnalyticsApi>) -> Self {
        Self {
            api: Some(api),
            classifier: ErrorClassifier::new(),
        }
    }

    /// No backend configured: every read is served by the mock generator.
    pub fn mock_only() -> Self {
        Self {
            api: None,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn is_mock_only(&self) -> bool {
        self.api.is_none()
    }

    fn fallback(&self, what: &str, error: &ApiError, substitute: &str) -> Fallback {
        let log_level = self.classifier.classify_fetch_error(error);
        let reason = format!("{} unavailable ({}), {}", what, error, substitute);
        logging::emit(log_level, &reason);
        Fallback { reason, log_level }
    }

    /// Recent sessions; an empty list when the backend cannot be read.
    pub async fn fetch_sessions(&self, days: u32) -> Resolved<Vec<SessionRecord>> {
        let Some(api) = &self.api else {
            let sessions = mock::recent_sessions(Utc::now(), &mut rand::thread_rng());
            return Resolved {
                fetched: Fetched::demo(sessions),
                fallback: None,
            };
        };
        match api.fetch_sessions(days).await {
            Ok(sessions) => Resolved::live(sessions),
            Err(e) => Resolved {
                fallback: Some(self.fallback("Sessions", &e, "showing no sessions")),
                fetched: Fetched::demo(Vec::new()),
            },
        }
    }

    /// Analytics snapshot; a mock snapshot when the backend cannot be read.
    pub async fn fetch_analytics(&self, days: u32) -> Resolved<AnalyticsSnapshot> {
        let Some(api) = &self.api else {
            return Resolved {
                fetched: Fetched::demo(mock::snapshot(days)),
                fallback: None,
            };
        };
        match api.fetch_analytics(days).await {
            Ok(snapshot) => Resolved::live(snapshot),
            Err(e) => Resolved {
                fallback: Some(self.fallback("Analytics", &e, "showing demo data")),
                fetched: Fetched::demo(mock::snapshot(days)),
            },
        }
    }

    /// Backend health, `None` when there is no backend or it cannot be reached.
    pub async fn health(&self) -> Option<HealthStatus> {
        let api = self.api.as_ref()?;
        match api.health().await {
            Ok(health) => Some(health),
            Err(e) => {
                logging::emit(LogLevel::Debug, &format!("Health check failed: {}", e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, MockAnalyticsApi};
    use crate::models::{SessionStatus, TrendPoint, ZoneMetric};
    use chrono::{NaiveDate, TimeZone};

    fn live_snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            total_sessions: 5321,
            avg_session_time: "6m 10s".to_string(),
            engagement_rate: "64.0%".to_string(),
            active_properties: 9,
            session_trends: vec![TrendPoint {
                date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
                sessions: 33,
            }],
            engagement_metrics: vec![ZoneMetric {
                zone: "Kitchen".to_string(),
                visits: 12,
                avg_time: 40,
            }],
            recent_sessions: vec![SessionRecord {
                id: "abc".to_string(),
                property: "Beach House".to_string(),
                start_time: Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap(),
                duration: "5m 0s".to_string(),
                status: SessionStatus::Completed,
            }],
        }
    }

    #[tokio::test]
    // A 500 from the analytics endpoint is masked by the full mock snapshot.
    async fn test_analytics_server_error_falls_back_to_mock() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_analytics().returning(|_| {
            Err(ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        });
        let source = DataSource::remote(Box::new(api));

        let resolved = source.fetch_analytics(30).await;
        assert_eq!(resolved.origin(), DataOrigin::Demo);
        let fallback = resolved.fallback.clone().unwrap();
        assert_eq!(fallback.log_level, LogLevel::Warn);
        assert!(fallback.reason.contains("500"));

        let snapshot = resolved.into_value();
        assert_eq!(snapshot.total_sessions, 1247);
        assert_eq!(snapshot.avg_session_time, "8m 32s");
        assert_eq!(snapshot.engagement_rate, "87.3%");
        assert_eq!(snapshot.active_properties, 24);
        assert_eq!(snapshot.session_trends.len(), 31);
    }

    #[tokio::test]
    // Nothing listens on the discard port, so the sessions read fails to connect
    // and yields an empty list.
    async fn test_sessions_network_error_yields_empty_list() {
        let client = ApiClient::new("http://127.0.0.1:9/api/v1").unwrap();
        let source = DataSource::remote(Box::new(client));

        let resolved = source.fetch_sessions(7).await;
        assert!(resolved.value().is_empty());
        assert_eq!(resolved.origin(), DataOrigin::Demo);
        let fallback = resolved.fallback.unwrap();
        assert_eq!(fallback.log_level, LogLevel::Warn);
        assert!(fallback.reason.contains("Reqwest error"));
    }

    #[tokio::test]
    // An undecodable sessions body also yields an empty list.
    async fn test_sessions_decode_error_yields_empty_list() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_sessions().returning(|_| {
            let decode = serde_json::from_str::<u8>("{").unwrap_err();
            Err(ApiError::Decode(decode))
        });
        let source = DataSource::remote(Box::new(api));

        let resolved = source.fetch_sessions(7).await;
        assert!(resolved.value().is_empty());
        assert_eq!(resolved.origin(), DataOrigin::Demo);
        assert_eq!(resolved.fallback.unwrap().log_level, LogLevel::Error);
    }

    #[tokio::test]
    async fn test_live_analytics_pass_through() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_analytics()
            .with(mockall::predicate::eq(90))
            .times(1)
            .returning(|_| Ok(live_snapshot()));
        let source = DataSource::remote(Box::new(api));

        let resolved = source.fetch_analytics(90).await;
        assert_eq!(resolved.origin(), DataOrigin::Live);
        assert!(resolved.fallback.is_none());
        assert_eq!(resolved.into_value(), live_snapshot());
    }

    #[tokio::test]
    // Two reads against a stable backend agree on every KPI scalar.
    async fn test_repeated_reads_are_stable() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_analytics()
            .times(2)
            .returning(|_| Ok(live_snapshot()));
        let source = DataSource::remote(Box::new(api));

        let first = source.fetch_analytics(30).await.into_value();
        let second = source.fetch_analytics(30).await.into_value();
        assert_eq!(first.total_sessions, second.total_sessions);
        assert_eq!(first.avg_session_time, second.avg_session_time);
        assert_eq!(first.engagement_rate, second.engagement_rate);
        assert_eq!(first.active_properties, second.active_properties);
    }

    #[tokio::test]
    async fn test_mock_only_source_never_touches_network() {
        let source = DataSource::mock_only();
        assert!(source.is_mock_only());

        let analytics = source.fetch_analytics(7).await;
        assert_eq!(analytics.origin(), DataOrigin::Demo);
        assert!(analytics.fallback.is_none());
        assert_eq!(analytics.value().session_trends.len(), 8);

        let sessions = source.fetch_sessions(7).await;
        assert_eq!(sessions.value().len(), 10);
        assert!(sessions.fallback.is_none());
        assert!(source.health().await.is_none());
    }
}
