//! Background workers feeding the dashboard
//!
//! The refresher runs one fetch cycle per [`RefreshRequest`]; the scheduler
//! files a request every refresh interval. Requests from any trigger are never
//! merged, so cycles may overlap. Ordering is restored on the receiving side
//! through the monotonically increasing request token.

pub mod core;
pub mod refresher;
pub mod scheduler;

use crate::logging::LogLevel;
use crate::models::{AnalyticsSnapshot, DataOrigin, HealthStatus};
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use tokio::sync::mpsc;

/// What caused a refresh.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum RefreshTrigger {
    /// Initial load when the dashboard starts.
    Startup,
    /// The user asked for a refresh.
    Manual,
    /// The selected window size changed.
    WindowChange,
    /// The periodic timer fired.
    Timer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RefreshRequest {
    /// Strictly increasing across all triggers.
    pub token: u64,
    pub days: u32,
    pub trigger: RefreshTrigger,
}

/// A finished fetch cycle.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub token: u64,
    pub days: u32,
    pub trigger: RefreshTrigger,
    pub snapshot: AnalyticsSnapshot,
    pub origin: DataOrigin,
    /// Set when the snapshot is a substitute for an unreadable backend.
    pub fallback_reason: Option<(String, LogLevel)>,
    pub health: Option<HealthStatus>,
    pub completed_at: DateTime<Local>,
}

/// Cloneable handle used by every trigger to file refresh requests.
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    sender: mpsc::Sender<RefreshRequest>,
    next_token: Arc<AtomicU64>,
    days: Arc<AtomicU32>,
}

impl RefreshHandle {
    pub fn new(sender: mpsc::Sender<RefreshRequest>, days: u32) -> Self {
        Self {
            sender,
            next_token: Arc::new(AtomicU64::new(1)),
            days: Arc::new(AtomicU32::new(days)),
        }
    }

    /// Currently selected window size, in days.
    pub fn days(&self) -> u32 {
        self.days.load(Ordering::SeqCst)
    }

    pub fn set_days(&self, days: u32) {
        self.days.store(days, Ordering::SeqCst);
    }

    /// Files a refresh for the current window. Returns the request token, or
    /// `None` if the refresher is gone or its queue is full.
    pub fn request(&self, trigger: RefreshTrigger) -> Option<u64> {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst);
        let request = RefreshRequest {
            token,
            days: self.days(),
            trigger,
        };
        self.sender.try_send(request).ok().map(|_| token)
    }
}
