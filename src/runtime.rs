//! Worker startup for a dashboard session

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, REFRESH_QUEUE_SIZE};
use crate::data_source::DataSource;
use crate::events::WorkerMessage;
use crate::workers::core::EventSender;
use crate::workers::refresher::run_refresher;
use crate::workers::scheduler::run_scheduler;
use crate::workers::RefreshHandle;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Spawns the refresher and the refresh timer.
///
/// Returns the channel the UI reads worker messages from, the handle used to
/// file refresh requests, and the worker join handles.
pub fn start_workers(
    source: Arc<DataSource>,
    days: u32,
    refresh_interval: Duration,
    shutdown_sender: &broadcast::Sender<()>,
) -> (
    mpsc::Receiver<WorkerMessage>,
    RefreshHandle,
    Vec<JoinHandle<()>>,
) {
    let (message_sender, message_receiver) = mpsc::channel::<WorkerMessage>(EVENT_QUEUE_SIZE);
    let (request_sender, request_receiver) = mpsc::channel(REFRESH_QUEUE_SIZE);
    let event_sender = EventSender::new(message_sender);
    let refresh = RefreshHandle::new(request_sender, days);

    let join_handles = vec![
        tokio::spawn(run_refresher(
            source,
            request_receiver,
            event_sender.clone(),
            shutdown_sender.subscribe(),
        )),
        tokio::spawn(run_scheduler(
            refresh.clone(),
            refresh_interval,
            event_sender,
            shutdown_sender.subscribe(),
        )),
    ];

    (message_receiver, refresh, join_handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workers::RefreshTrigger;

    #[tokio::test]
    // A request filed through the handle comes back as a refreshed snapshot.
    async fn test_workers_answer_refresh_requests() {
        let (shutdown_sender, _) = broadcast::channel(1);
        let (mut messages, refresh, handles) = start_workers(
            Arc::new(DataSource::mock_only()),
            7,
            Duration::from_secs(300),
            &shutdown_sender,
        );

        let token = refresh.request(RefreshTrigger::Startup).unwrap();
        let outcome = loop {
            match messages.recv().await.unwrap() {
                WorkerMessage::Refreshed(outcome) => break outcome,
                WorkerMessage::Event(_) => continue,
            }
        };
        assert_eq!(outcome.token, token);
        assert_eq!(outcome.snapshot.session_trends.len(), 8);

        shutdown_sender.send(()).unwrap();
        for handle in handles {
            handle.await.unwrap();
        }
    }
}
