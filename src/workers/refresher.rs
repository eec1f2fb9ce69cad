//! Fetch cycles against the analytics backend

use super::core::EventSender;
use super::{RefreshOutcome, RefreshRequest};
use crate::data_source::DataSource;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::models::DataOrigin;
use chrono::Local;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinSet;

/// Runs one fetch cycle per incoming request until shutdown.
///
/// Each request gets its own task, so overlapping triggers produce overlapping
/// cycles. Outcomes are delivered in completion order.
pub async fn run_refresher(
    source: Arc<DataSource>,
    mut requests: mpsc::Receiver<RefreshRequest>,
    event_sender: EventSender,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            request = requests.recv() => {
                let Some(request) = request else { break };
                let source = source.clone();
                let event_sender = event_sender.clone();
                in_flight.spawn(async move {
                    let outcome = refresh_cycle(&source, request, &event_sender).await;
                    event_sender.send_outcome(outcome).await;
                });
            }
            Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
        }
    }

    in_flight.abort_all();
}

/// Reads the analytics snapshot (and backend health) for one request.
pub async fn refresh_cycle(
    source: &DataSource,
    request: RefreshRequest,
    event_sender: &EventSender,
) -> RefreshOutcome {
    event_sender
        .send_refresh_event(
            format!(
                "Refreshing analytics #{} ({} days, {})",
                request.token, request.days, request.trigger
            ),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .await;

    let (analytics, health) =
        futures::future::join(source.fetch_analytics(request.days), source.health()).await;

    let fallback_reason = analytics
        .fallback
        .as_ref()
        .map(|f| (f.reason.clone(), f.log_level));

    match (&fallback_reason, analytics.origin()) {
        (Some((reason, level)), _) => {
            event_sender
                .send_refresh_event(reason.clone(), EventType::Error, *level)
                .await;
        }
        (None, DataOrigin::Live) => {
            event_sender
                .send_refresh_event(
                    format!(
                        "Analytics #{} updated: {} sessions",
                        request.token,
                        analytics.value().total_sessions
                    ),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
        (None, DataOrigin::Demo) => {
            event_sender
                .send_refresh_event(
                    format!("Demo analytics #{} generated", request.token),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
    }

    let origin = analytics.origin();
    RefreshOutcome {
        token: request.token,
        days: request.days,
        trigger: request.trigger,
        snapshot: analytics.into_value(),
        origin,
        fallback_reason,
        health,
        completed_at: Local::now(),
    }
}
