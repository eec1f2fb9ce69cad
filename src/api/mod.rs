use crate::api::error::ApiError;
use crate::models::{AnalyticsSnapshot, HealthStatus, SessionRecord};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Read access to the analytics backend.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Recent VR sessions within the trailing `days` window.
    async fn fetch_sessions(&self, days: u32) -> Result<Vec<SessionRecord>, ApiError>;

    /// Complete analytics snapshot for the trailing `days` window.
    async fn fetch_analytics(&self, days: u32) -> Result<AnalyticsSnapshot, ApiError>;

    /// Backend liveness probe.
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
