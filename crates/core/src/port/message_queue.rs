// Message Queue Port (producer side)

use crate::domain::QueuedMessage;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Producer-facing view of the queue
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Enqueue, waiting at most `timeout` for buffer space
    ///
    /// # Errors
    /// - AppError::QueueClosed if the queue no longer accepts messages
    /// - AppError::Cancelled if the deadline passed while the buffer was full
    async fn enqueue_timeout(&self, message: QueuedMessage, timeout: Duration) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::{Arc, Mutex};

    /// Mock queue behavior
    #[derive(Debug, Clone)]
    pub enum MockQueueBehavior {
        /// Accept every message
        Accept,
        /// Behave as a full queue whose deadline expired
        Full,
        /// Behave as a closed queue
        Closed,
    }

    /// Mock queue recording accepted messages
    pub struct MockMessageQueue {
        behavior: MockQueueBehavior,
        accepted: Arc<Mutex<Vec<QueuedMessage>>>,
    }

    impl MockMessageQueue {
        pub fn new(behavior: MockQueueBehavior) -> Self {
            Self {
                behavior,
                accepted: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn accepting() -> Self {
            Self::new(MockQueueBehavior::Accept)
        }

        pub fn accepted(&self) -> Vec<QueuedMessage> {
            self.accepted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageQueue for MockMessageQueue {
        async fn enqueue_timeout(&self, message: QueuedMessage, timeout: Duration) -> Result<()> {
            match self.behavior {
                MockQueueBehavior::Accept => {
                    self.accepted.lock().unwrap().push(message);
                    Ok(())
                }
                MockQueueBehavior::Full => Err(AppError::Cancelled(format!(
                    "deadline of {}ms exceeded",
                    timeout.as_millis()
                ))),
                MockQueueBehavior::Closed => Err(AppError::QueueClosed),
            }
        }
    }
}
