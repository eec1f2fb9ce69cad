//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::WorkerMessage;
use crate::ui::dashboard::ViewSynchronizer;
use crate::workers::{RefreshOutcome, RefreshTrigger};
use std::error::Error;

/// One-line KPI summary of an applied refresh.
pub fn outcome_summary(outcome: &RefreshOutcome, synchronizer: &ViewSynchronizer) -> String {
    let cards = synchronizer
        .kpis()
        .cards()
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join(" | ");
    format!(
        "[{}] #{} last {} days ({}) {}",
        outcome.origin, outcome.token, outcome.days, outcome.trigger, cards
    )
}

/// Runs the dashboard in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Printing the KPIs of each applied refresh
/// 3. Ctrl+C shutdown handling
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.source_label);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut synchronizer = ViewSynchronizer::new();
    if session.refresh.request(RefreshTrigger::Startup).is_none() {
        log::warn!("Initial refresh could not be queued");
    }

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(message) = session.message_receiver.recv() => {
                match message {
                    WorkerMessage::Event(event) => {
                        if event.should_display() {
                            println!("{}", event);
                        }
                    }
                    WorkerMessage::Refreshed(outcome) => {
                        if synchronizer.apply_outcome(&outcome) {
                            println!("{}", outcome_summary(&outcome, &synchronizer));
                        }
                    }
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    // Wait for workers to finish
    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::models::DataOrigin;
    use chrono::Local;

    #[test]
    fn test_summary_lists_formatted_kpis() {
        let outcome = RefreshOutcome {
            token: 3,
            days: 30,
            trigger: RefreshTrigger::Timer,
            snapshot: mock::snapshot(30),
            origin: DataOrigin::Demo,
            fallback_reason: None,
            health: None,
            completed_at: Local::now(),
        };
        let mut synchronizer = ViewSynchronizer::new();
        assert!(synchronizer.apply_outcome(&outcome));

        let summary = outcome_summary(&outcome, &synchronizer);
        assert!(summary.starts_with("[Demo] #3 last 30 days (Timer)"));
        assert!(summary.contains("Total Sessions: 1,247"));
        assert!(summary.contains("Active Properties: 24"));
    }
}
