//! Nexero Analytics API Client
//!
//! A thin `reqwest` client for the read endpoints that feed the dashboard.

use crate::api::AnalyticsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::models::{AnalyticsSnapshot, HealthStatus, SessionRecord};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("nexero-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the API rooted at `base_url` (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// The backend root, i.e. the base URL without its `/api/vN` suffix.
    fn root_url(&self) -> &str {
        let base = self.base_url.trim_end_matches('/');
        match base.rfind("/api/") {
            Some(idx) => &base[..idx],
            None => base,
        }
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl AnalyticsApi for ApiClient {
    async fn fetch_sessions(&self, days: u32) -> Result<Vec<SessionRecord>, ApiError> {
        let url = self.build_url("sessions");
        self.get_request(&url, &[("days", days.to_string())]).await
    }

    async fn fetch_analytics(&self, days: u32) -> Result<AnalyticsSnapshot, ApiError> {
        let url = self.build_url("analytics");
        self.get_request(&url, &[("days", days.to_string())]).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/health", self.root_url());
        self.get_request(&url, &[]).await
    }
}

#[cfg(test)]
/// These are ignored by default since they require a live backend to run.
mod live_backend_tests {
    use crate::api::AnalyticsApi;
    use crate::environment::Environment;

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    /// Should fetch an analytics snapshot from a local backend.
    async fn test_fetch_analytics() {
        let client = super::ApiClient::new(Environment::Local.api_url()).unwrap();
        match client.fetch_analytics(30).await {
            Ok(snapshot) => println!("Total sessions: {}", snapshot.total_sessions),
            Err(e) => panic!("Failed to fetch analytics: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    /// Should report the backend as healthy.
    async fn test_health() {
        let client = super::ApiClient::new(Environment::Local.api_url()).unwrap();
        match client.health().await {
            Ok(health) => assert!(health.is_healthy()),
            Err(e) => panic!("Failed to reach backend: {}", e),
        }
    }
}
