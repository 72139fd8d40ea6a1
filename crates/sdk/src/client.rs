//! Notify Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{SendResponse, StatsResponse};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use std::time::Duration;

const METHOD_SEND: &str = "notify.send.v1";
const METHOD_STATS: &str = "queue.stats.v1";

/// Notify daemon client
///
/// # Example
///
/// ```no_run
/// use notify_sdk::NotifyClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NotifyClient::connect("http://127.0.0.1:12000").await?;
/// # Ok(())
/// # }
/// ```
pub struct NotifyClient {
    client: HttpClient,
}

impl NotifyClient {
    /// Connect to the Notify daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:12000`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Queue a notification for every device of `user_id`
    ///
    /// "QUEUED" only means the daemon accepted the message; delivery is not confirmed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use notify_sdk::NotifyClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = NotifyClient::connect("http://127.0.0.1:12000").await?;
    /// match client.send("user-42", "hello").await {
    ///     Ok(r) => println!("{}", r.state),
    ///     Err(e) if e.is_throttled() => println!("daemon busy, retry later"),
    ///     Err(e) => return Err(e.into()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(
        &self,
        user_id: impl Into<String>,
        payload: impl Into<String>,
    ) -> Result<SendResponse> {
        let user_id: String = user_id.into();
        let payload: String = payload.into();

        let mut params = ObjectParams::new();
        params.insert("user_id", user_id)?;
        params.insert("payload", payload)?;

        let response: SendResponse = self.client.request(METHOD_SEND, params).await?;
        Ok(response)
    }

    /// Get queue statistics
    pub async fn stats(&self) -> Result<StatsResponse> {
        let response: StatsResponse = self.client.request(METHOD_STATS, ObjectParams::new()).await?;
        Ok(response)
    }
}
