//! Dashboard state management
//!
//! Contains the main dashboard state struct owned by the UI loop

use super::sync::ViewSynchronizer;
use super::table::SessionDetails;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, WorkerMessage};
use crate::models::WindowSize;
use crate::ui::navigation::Navigator;
use crate::ui::theme::ThemeController;

use std::collections::VecDeque;

/// Settings the dashboard is started with.
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// No backend configured; every snapshot is demo data.
    pub mock_only: bool,
    pub window: WindowSize,
}

impl UIConfig {
    pub fn new(with_background_color: bool, mock_only: bool, window: WindowSize) -> Self {
        Self {
            with_background_color,
            mock_only,
            window,
        }
    }
}

#[derive(Debug)]
pub struct DashboardState {
    /// The environment whose backend is being read.
    pub environment: Environment,
    /// Everything derived from the last applied snapshot.
    pub synchronizer: ViewSynchronizer,
    pub theme: ThemeController,
    pub navigator: Navigator,
    /// Window size requested by the date range selector.
    pub window: WindowSize,
    pub with_background_color: bool,
    pub mock_only: bool,
    /// Messages from the workers waiting to be processed
    pub pending_messages: VecDeque<WorkerMessage>,
    /// Activity logs for display (last `MAX_ACTIVITY_LOGS` events)
    pub activity_logs: VecDeque<WorkerEvent>,

    /// Newest manual or window-change refresh still waiting for its result.
    refresh_in_flight: Option<u64>,
    selected_row: usize,
    selected_zone: usize,
    details: Option<SessionDetails>,
}

impl DashboardState {
    pub fn new(environment: Environment, theme: ThemeController, ui_config: UIConfig) -> Self {
        Self {
            environment,
            synchronizer: ViewSynchronizer::new(),
            theme,
            navigator: Navigator::default(),
            window: ui_config.window,
            with_background_color: ui_config.with_background_color,
            mock_only: ui_config.mock_only,
            pending_messages: VecDeque::new(),
            activity_logs: VecDeque::new(),
            refresh_in_flight: None,
            selected_row: 0,
            selected_zone: 0,
            details: None,
        }
    }

    pub fn refresh_in_flight(&self) -> Option<u64> {
        self.refresh_in_flight
    }

    /// The refresh control is dimmed while this is true.
    pub fn is_refreshing(&self) -> bool {
        self.refresh_in_flight.is_some()
    }

    pub(super) fn set_refresh_in_flight(&mut self, token: Option<u64>) {
        self.refresh_in_flight = token;
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub(super) fn set_selected_row(&mut self, row: usize) {
        self.selected_row = row;
    }

    pub fn selected_zone(&self) -> usize {
        self.selected_zone
    }

    pub(super) fn set_selected_zone(&mut self, zone: usize) {
        self.selected_zone = zone;
    }

    /// Session shown in the details popup, if it is open.
    pub fn details(&self) -> Option<&SessionDetails> {
        self.details.as_ref()
    }

    pub(super) fn set_details(&mut self, details: Option<SessionDetails>) {
        self.details = details;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add a worker message to the processing queue
    pub fn add_message(&mut self, message: WorkerMessage) {
        self.pending_messages.push_back(message);
    }
}
