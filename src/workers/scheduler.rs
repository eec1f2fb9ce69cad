//! Periodic refresh timer

use super::core::EventSender;
use super::{RefreshHandle, RefreshTrigger};
use crate::events::EventType;
use crate::logging::LogLevel;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Files a timer refresh every `period` until shutdown. The first tick fires
/// one full period after start; the initial load is a separate request.
pub async fn run_scheduler(
    handle: RefreshHandle,
    period: Duration,
    event_sender: EventSender,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            _ = ticker.tick() => {
                match handle.request(RefreshTrigger::Timer) {
                    Some(token) => {
                        event_sender
                            .send_scheduler_event(
                                format!("Scheduled refresh #{} ({} days)", token, handle.days()),
                                EventType::Refresh,
                                LogLevel::Debug,
                            )
                            .await;
                    }
                    None => {
                        event_sender
                            .send_scheduler_event(
                                "Scheduled refresh skipped: refresher unavailable".to_string(),
                                EventType::Error,
                                LogLevel::Warn,
                            )
                            .await;
                    }
                }
            }
        }
    }
}
