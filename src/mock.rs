//! Mock analytics data
//!
//! Produces snapshots with a fixed shape and randomized content. This is the
//! fallback whenever the backend cannot be read, and the only source when no
//! backend is configured.

use crate::consts::cli_consts::mock;
use crate::models::{AnalyticsSnapshot, SessionRecord, SessionStatus, TrendPoint, ZoneMetric};
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

/// Daily session counts for the trailing `days` window, ending at `today`.
///
/// Always yields `days + 1` points in chronological order.
pub fn trend_points<R: Rng + ?Sized>(days: u32, today: NaiveDate, rng: &mut R) -> Vec<TrendPoint> {
    (0..=days as i64)
        .rev()
        .map(|offset| TrendPoint {
            date: today - Duration::days(offset),
            sessions: rng.gen_range(mock::TREND_MIN_SESSIONS..=mock::TREND_MAX_SESSIONS),
        })
        .collect()
}

/// The canonical zone catalog.
pub fn zone_metrics() -> Vec<ZoneMetric> {
    mock::ZONES
        .iter()
        .map(|(zone, visits, avg_time)| ZoneMetric {
            zone: zone.to_string(),
            visits: *visits,
            avg_time: *avg_time,
        })
        .collect()
}

/// Ten sessions started within the week before `now`.
pub fn recent_sessions<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<SessionRecord> {
    let window_secs = Duration::days(mock::RECENT_SESSION_WINDOW_DAYS).num_seconds();

    (1..=mock::RECENT_SESSION_COUNT)
        .map(|n| {
            let property = mock::PROPERTIES
                .choose(rng)
                .copied()
                .unwrap_or(mock::PROPERTIES[0]);
            let status = SessionStatus::ALL
                .choose(rng)
                .copied()
                .unwrap_or(SessionStatus::Completed);
            SessionRecord {
                id: format!("SES{:05}", n),
                property: property.to_string(),
                start_time: now - Duration::seconds(rng.gen_range(0..=window_secs)),
                duration: format!("{}m {}s", rng.gen_range(3..=17), rng.gen_range(0..=59)),
                status,
            }
        })
        .collect()
}

/// Builds a full snapshot using the given clock and random source.
pub fn snapshot_at<R: Rng + ?Sized>(
    days: u32,
    now: DateTime<Utc>,
    today: NaiveDate,
    rng: &mut R,
) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total_sessions: mock::TOTAL_SESSIONS,
        avg_session_time: mock::AVG_SESSION_TIME.to_string(),
        engagement_rate: mock::ENGAGEMENT_RATE.to_string(),
        active_properties: mock::ACTIVE_PROPERTIES,
        session_trends: trend_points(days, today, rng),
        engagement_metrics: zone_metrics(),
        recent_sessions: recent_sessions(now, rng),
    }
}

/// Builds a full snapshot for the current date.
pub fn snapshot(days: u32) -> AnalyticsSnapshot {
    let mut rng = rand::thread_rng();
    snapshot_at(days, Utc::now(), Local::now().date_naive(), &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    // Every selectable window yields days + 1 consecutive points ending today.
    fn test_trend_points_cover_window() {
        let mut rng = StdRng::seed_from_u64(7);
        for days in [7, 30, 90, 365] {
            let points = trend_points(days, today(), &mut rng);
            assert_eq!(points.len(), days as usize + 1);
            assert_eq!(points.last().unwrap().date, today());
            for pair in points.windows(2) {
                assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            }
            assert!(points.iter().all(|p| (20..=69).contains(&p.sessions)));
        }
    }

    #[test]
    fn test_zone_catalog_is_fixed() {
        let zones = zone_metrics();
        assert_eq!(zones.len(), 5);
        assert_eq!(zones, zone_metrics());
        let names: HashSet<_> = zones.iter().map(|z| z.zone.as_str()).collect();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_recent_sessions_have_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();
        let sessions = recent_sessions(now, &mut rng);

        let ids: Vec<_> = sessions.iter().map(|s| s.id.clone()).collect();
        let expected: Vec<_> = (1..=10).map(|n| format!("SES{:05}", n)).collect();
        assert_eq!(ids, expected);
        assert_eq!(ids.first().map(String::as_str), Some("SES00001"));
        assert_eq!(ids.last().map(String::as_str), Some("SES00010"));
    }

    #[test]
    fn test_recent_sessions_content_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = Utc::now();
        for session in recent_sessions(now, &mut rng) {
            assert!(mock::PROPERTIES.contains(&session.property.as_str()));
            assert!(session.start_time <= now);
            assert!(session.start_time >= now - Duration::days(7));

            let (minutes, seconds) = session
                .duration
                .trim_end_matches('s')
                .split_once("m ")
                .unwrap();
            let minutes: u32 = minutes.parse().unwrap();
            let seconds: u32 = seconds.parse().unwrap();
            assert!((3..=17).contains(&minutes));
            assert!(seconds <= 59);
        }
    }

    #[test]
    fn test_snapshot_has_fixed_kpis() {
        let snapshot = snapshot(30);
        assert_eq!(snapshot.total_sessions, 1247);
        assert_eq!(snapshot.avg_session_time, "8m 32s");
        assert_eq!(snapshot.engagement_rate, "87.3%");
        assert_eq!(snapshot.active_properties, 24);
        assert_eq!(snapshot.session_trends.len(), 31);
        assert_eq!(snapshot.recent_sessions.len(), 10);
    }
}
