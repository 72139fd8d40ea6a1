// Notify Service - Producer-side use case

pub mod send;
#[cfg(test)]
mod send_test;

pub use send::SendRequest;

use crate::application::worker::constants::DEFAULT_ENQUEUE_TIMEOUT;
use crate::error::Result;
use crate::port::MessageQueue;
use std::sync::Arc;
use std::time::Duration;

/// Notify Service: validates producer requests and hands them to the queue
pub struct NotifyService {
    queue: Arc<dyn MessageQueue>,
    enqueue_timeout: Duration,
}

impl NotifyService {
    pub fn new(queue: Arc<dyn MessageQueue>) -> Self {
        Self {
            queue,
            enqueue_timeout: DEFAULT_ENQUEUE_TIMEOUT,
        }
    }

    /// Deadline for waiting on a full queue
    pub fn with_enqueue_timeout(mut self, timeout: Duration) -> Self {
        self.enqueue_timeout = timeout;
        self
    }

    pub fn enqueue_timeout(&self) -> Duration {
        self.enqueue_timeout
    }

    /// Queue a notification for all devices of a user
    pub async fn send(&self, req: SendRequest) -> Result<()> {
        send::execute(self.queue.as_ref(), self.enqueue_timeout, req).await
    }
}
