// Message Handler Port
// Seam between the worker pool and per-message processing

use crate::domain::QueuedMessage;
use async_trait::async_trait;

/// Processes one dequeued message to completion.
///
/// No return value: outcomes are observed through the reporting side channel only.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle(&self, message: QueuedMessage);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every message it is handed, in arrival order
    #[derive(Default, Clone)]
    pub struct CollectingHandler {
        received: Arc<Mutex<Vec<QueuedMessage>>>,
    }

    impl CollectingHandler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn received(&self) -> Vec<QueuedMessage> {
            self.received.lock().unwrap().clone()
        }

        pub fn count(&self) -> usize {
            self.received.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MessageHandler for CollectingHandler {
        async fn handle(&self, message: QueuedMessage) {
            self.received.lock().unwrap().push(message);
        }
    }
}
