//! Core worker utilities

use super::RefreshOutcome;
use crate::events::{Event, EventType, WorkerMessage};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common message sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<WorkerMessage>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<WorkerMessage>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(WorkerMessage::Event(event)).await;
    }

    pub async fn send_refresh_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::refresher_with_level(
            message, event_type, log_level,
        ))
        .await;
    }

    pub async fn send_scheduler_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::scheduler_with_level(
            message, event_type, log_level,
        ))
        .await;
    }

    /// Hand a finished fetch cycle to the UI.
    pub async fn send_outcome(&self, outcome: RefreshOutcome) {
        let _ = self
            .sender
            .send(WorkerMessage::Refreshed(Box::new(outcome)))
            .await;
    }
}
