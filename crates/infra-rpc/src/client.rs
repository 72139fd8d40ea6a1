// Shared JSON-RPC HTTP client construction

use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use notify_core::port::ServiceError;
use std::time::Duration;

/// Per-request timeout enforced by each downstream client (5s)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Downstream client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub(crate) fn build(&self) -> Result<HttpClient, ServiceError> {
        HttpClientBuilder::default()
            .request_timeout(self.request_timeout)
            .build(&self.url)
            .map_err(|e| {
                ServiceError::Invalid(format!("Failed to create client for {}: {}", self.url, e))
            })
    }
}
