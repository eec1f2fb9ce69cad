//! Sessions table model and its per-row actions

use super::utils::format_start_time;
use crate::models::{SessionRecord, SessionStatus};
use std::collections::HashMap;

pub const COLUMNS: [&str; 6] = [
    "Session ID",
    "Property",
    "Start Time",
    "Duration",
    "Status",
    "Actions",
];
pub const NO_SESSIONS_MESSAGE: &str = "No sessions found";
pub const VIEW_DETAILS: &str = "View Details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Single row spanning every column, shown when there are no sessions.
    Placeholder { message: &'static str, span: usize },
    Session(SessionRow),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    pub id: String,
    pub property: String,
    pub start_time: String,
    pub duration: String,
    pub status: SessionStatus,
    pub action: &'static str,
}

/// What "View Details" shows for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDetails {
    pub id: String,
    pub property: String,
    pub start_time: String,
    pub duration: String,
    pub status: SessionStatus,
}

impl From<&SessionRecord> for SessionDetails {
    fn from(record: &SessionRecord) -> Self {
        Self {
            id: record.id.clone(),
            property: record.property.clone(),
            start_time: record.start_time.to_rfc3339(),
            duration: record.duration.clone(),
            status: record.status,
        }
    }
}

pub type ActionHandler = Box<dyn Fn() -> SessionDetails>;

/// Row actions keyed by session id. Owned by the table that registers them.
#[derive(Default)]
pub struct ActionTable {
    handlers: HashMap<String, ActionHandler>,
}

impl std::fmt::Debug for ActionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self.handlers.keys().collect();
        ids.sort();
        f.debug_struct("ActionTable").field("ids", &ids).finish()
    }
}

impl ActionTable {
    pub fn register(&mut self, id: impl Into<String>, handler: ActionHandler) {
        self.handlers.insert(id.into(), handler);
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Runs the action bound to `id`, if any.
    pub fn invoke(&self, id: &str) -> Option<SessionDetails> {
        self.handlers.get(id).map(|handler| handler())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionTable {
    rows: Vec<TableRow>,
}

impl SessionTable {
    /// Builds the rows for `sessions` and rebinds `actions` to them.
    pub fn build(sessions: &[SessionRecord], actions: &mut ActionTable) -> Self {
        actions.clear();

        if sessions.is_empty() {
            return Self {
                rows: vec![TableRow::Placeholder {
                    message: NO_SESSIONS_MESSAGE,
                    span: COLUMNS.len(),
                }],
            };
        }

        let rows = sessions
            .iter()
            .map(|record| {
                let details = SessionDetails::from(record);
                actions.register(record.id.clone(), Box::new(move || details.clone()));
                TableRow::Session(SessionRow {
                    id: record.id.clone(),
                    property: record.property.clone(),
                    start_time: format_start_time(&record.start_time),
                    duration: record.duration.clone(),
                    status: record.status,
                    action: VIEW_DETAILS,
                })
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Session id at row `index`; `None` for the placeholder.
    pub fn session_id(&self, index: usize) -> Option<&str> {
        match self.rows.get(index)? {
            TableRow::Session(row) => Some(&row.id),
            TableRow::Placeholder { .. } => None,
        }
    }

    pub fn session_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, TableRow::Session(_)))
            .count()
    }
}
