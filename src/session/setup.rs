//! Session setup and initialization

use crate::api::ApiClient;
use crate::api::error::ApiError;
use crate::consts::cli_consts::refresh;
use crate::data_source::DataSource;
use crate::environment::Environment;
use crate::events::WorkerMessage;
use crate::runtime::start_workers;
use crate::workers::RefreshHandle;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Worker events and refresh results
    pub message_receiver: mpsc::Receiver<WorkerMessage>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Files refresh requests with the refresher
    pub refresh: RefreshHandle,
    pub environment: Environment,
    /// Where snapshots are read from, for display
    pub source_label: String,
    pub mock_only: bool,
}

/// Picks the data source: mock-only, an explicit API URL, or the environment's backend.
pub fn build_data_source(
    environment: &Environment,
    api_url: Option<String>,
    mock: bool,
) -> Result<(DataSource, String), ApiError> {
    if mock {
        return Ok((DataSource::mock_only(), "demo data".to_string()));
    }
    let base_url = api_url.unwrap_or_else(|| environment.api_url());
    let client = ApiClient::new(&base_url)?;
    Ok((DataSource::remote(Box::new(client)), base_url))
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Picks the data source
/// 2. Sets up the shutdown channel
/// 3. Starts the refresher and the refresh timer
pub async fn setup_session(
    environment: Environment,
    api_url: Option<String>,
    mock: bool,
    days: u32,
) -> Result<SessionData, Box<dyn Error>> {
    let (source, source_label) = build_data_source(&environment, api_url, mock)?;
    let mock_only = source.is_mock_only();

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (message_receiver, refresh, join_handles) = start_workers(
        Arc::new(source),
        days,
        refresh::interval(),
        &shutdown_sender,
    );

    Ok(SessionData {
        message_receiver,
        join_handles,
        shutdown_sender,
        refresh,
        environment,
        source_label,
        mock_only,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_flag_selects_mock_source() {
        let (source, label) = build_data_source(&Environment::Production, None, true).unwrap();
        assert!(source.is_mock_only());
        assert_eq!(label, "demo data");
    }

    #[test]
    fn test_api_url_overrides_environment() {
        let (source, label) = build_data_source(
            &Environment::Production,
            Some("http://127.0.0.1:9000/api/v1".to_string()),
            false,
        )
        .unwrap();
        assert!(!source.is_mock_only());
        assert_eq!(label, "http://127.0.0.1:9000/api/v1");

        let (_, label) = build_data_source(&Environment::Staging, None, false).unwrap();
        assert_eq!(label, Environment::Staging.api_url());
    }
}
