//! RPC Method Handlers
//!
//! Implements the business logic for each JSON-RPC method.

use crate::error::to_rpc_error;
use crate::types::{SendRequest, SendResponse, StatsResponse};
use jsonrpsee::types::ErrorObjectOwned;
use notify_core::application::notify::{self, NotifyService};
use notify_core::application::ChannelQueue;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    notify: NotifyService,
    queue: Arc<ChannelQueue>,
    start_time: std::time::Instant,
}

impl RpcHandler {
    pub fn new(queue: Arc<ChannelQueue>, enqueue_timeout: Duration) -> Self {
        Self {
            notify: NotifyService::new(queue.clone()).with_enqueue_timeout(enqueue_timeout),
            queue,
            start_time: std::time::Instant::now(),
        }
    }

    /// notify.send.v1
    pub async fn send(&self, params: SendRequest) -> Result<SendResponse, ErrorObjectOwned> {
        let req = notify::SendRequest::new(params.user_id.clone(), params.payload);

        self.notify.send(req).await.map_err(to_rpc_error)?;
        debug!(user_id = %params.user_id, "Message to user queued");

        Ok(SendResponse {
            user_id: params.user_id,
            state: "QUEUED".to_string(),
        })
    }

    /// queue.stats.v1
    pub fn stats(&self) -> StatsResponse {
        let stats = self.queue.stats();
        StatsResponse {
            capacity: stats.capacity,
            buffered: stats.buffered,
            worker_count: stats.worker_count,
            closed: stats.closed,
            uptime_seconds: self.start_time.elapsed().as_secs() as i64,
        }
    }
}
