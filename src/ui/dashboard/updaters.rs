//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from worker messages and
//! user actions

use super::state::DashboardState;
use crate::events::{Event as WorkerEvent, EventType, WorkerMessage};
use crate::logging::LogLevel;
use crate::ui::navigation::Page;
use crate::workers::{RefreshHandle, RefreshOutcome, RefreshTrigger};
use strum::IntoEnumIterator;

impl DashboardState {
    /// Apply everything the workers sent since last frame.
    pub fn update(&mut self) {
        while let Some(message) = self.pending_messages.pop_front() {
            match message {
                WorkerMessage::Event(event) => self.add_to_activity_log(event),
                WorkerMessage::Refreshed(outcome) => self.apply_refresh(&outcome),
            }
        }
    }

    fn apply_refresh(&mut self, outcome: &RefreshOutcome) {
        if !self.synchronizer.apply_outcome(outcome) {
            self.log(
                format!(
                    "Discarded refresh #{} (#{} already shown)",
                    outcome.token,
                    self.synchronizer.last_applied_token()
                ),
                EventType::Waiting,
                LogLevel::Debug,
            );
            return;
        }

        if self
            .refresh_in_flight()
            .is_some_and(|pending| outcome.token >= pending)
        {
            self.set_refresh_in_flight(None);
        }

        let rows = self.synchronizer.table().rows().len();
        self.set_selected_row(self.selected_row().min(rows.saturating_sub(1)));
        let zones = self.synchronizer.zone_chart().map_or(0, |c| c.len());
        self.set_selected_zone(self.selected_zone().min(zones.saturating_sub(1)));
        self.set_details(None);
    }

    fn log(&mut self, msg: String, event_type: EventType, log_level: LogLevel) {
        self.add_to_activity_log(WorkerEvent::dashboard_with_level(
            msg, event_type, log_level,
        ));
    }

    /// Files a refresh of the current window. Manual and window-change refreshes
    /// dim the refresh control until their own result arrives; the dimmed
    /// control ignores further manual requests.
    pub fn request_refresh(&mut self, handle: &RefreshHandle, trigger: RefreshTrigger) {
        if trigger == RefreshTrigger::Manual && self.is_refreshing() {
            return;
        }
        match handle.request(trigger) {
            Some(token) => {
                if trigger != RefreshTrigger::Timer {
                    self.set_refresh_in_flight(Some(token));
                }
            }
            None => self.log(
                format!("{} refresh dropped, refresher busy or stopped", trigger),
                EventType::Error,
                LogLevel::Warn,
            ),
        }
    }

    /// Moves the date range selector to the next window and refreshes.
    pub fn cycle_window(&mut self, handle: &RefreshHandle) {
        self.window = self.window.next();
        handle.set_days(self.window.days());
        self.request_refresh(handle, RefreshTrigger::WindowChange);
    }

    /// Flips the theme. A failed save keeps the new theme for this run.
    pub fn toggle_theme(&mut self) {
        if let Err(e) = self.theme.toggle() {
            self.log(
                format!("Could not save theme preference: {}", e),
                EventType::Error,
                LogLevel::Warn,
            );
        }
    }

    /// Activates a page. Does not refresh data.
    pub fn select_page(&mut self, page: Page) {
        self.navigator.activate(page);
    }

    pub fn next_page(&mut self) {
        let pages: Vec<Page> = Page::iter().collect();
        let idx = pages
            .iter()
            .position(|p| *p == self.navigator.active())
            .unwrap_or(0);
        self.navigator.activate(pages[(idx + 1) % pages.len()]);
    }

    /// Moves the table selection by `delta` rows, clamped to the table.
    pub fn move_row(&mut self, delta: isize) {
        let rows = self.synchronizer.table().rows().len();
        if rows == 0 {
            return;
        }
        let row = self.selected_row().saturating_add_signed(delta).min(rows - 1);
        self.set_selected_row(row);
    }

    /// Moves the highlighted zone bar by `delta`, clamped to the chart.
    pub fn move_zone(&mut self, delta: isize) {
        let zones = self.synchronizer.zone_chart().map_or(0, |c| c.len());
        if zones == 0 {
            return;
        }
        let zone = self.selected_zone().saturating_add_signed(delta).min(zones - 1);
        self.set_selected_zone(zone);
    }

    /// Tooltip of the highlighted zone bar.
    pub fn zone_tooltip(&self) -> Option<String> {
        self.synchronizer.zone_chart()?.tooltip(self.selected_zone())
    }

    /// Runs "View Details" on the selected row.
    pub fn open_details(&mut self) {
        let details = self.synchronizer.view_details(self.selected_row());
        self.set_details(details);
    }

    pub fn close_details(&mut self) {
        self.set_details(None);
    }
}
