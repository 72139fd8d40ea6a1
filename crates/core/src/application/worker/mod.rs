// Worker - Message draining loop

pub mod constants;
mod panic_guard;
mod shutdown;

pub use panic_guard::panic_message;
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};

use crate::domain::QueuedMessage;
use crate::port::MessageHandler;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error};

/// Receiving end of the queue buffer, shared by all workers of one queue
pub type SharedReceiver = Arc<Mutex<mpsc::Receiver<QueuedMessage>>>;

/// One long-lived consumer of the queue
pub struct Worker {
    id: usize,
    receiver: SharedReceiver,
    handler: Arc<dyn MessageHandler>,
}

impl Worker {
    pub fn new(id: usize, receiver: SharedReceiver, handler: Arc<dyn MessageHandler>) -> Self {
        Self {
            id,
            receiver,
            handler,
        }
    }

    /// Drain messages until the queue is closed and empty
    pub async fn run(&self) {
        debug!(worker_id = self.id, "Worker started");
        while let Some(message) = self.next_message().await {
            self.process(message).await;
        }
        debug!(worker_id = self.id, "Worker stopped");
    }

    /// Next buffered message; None once closed and drained.
    /// The receiver lock is released before the handler runs.
    async fn next_message(&self) -> Option<QueuedMessage> {
        let mut receiver = self.receiver.lock().await;
        receiver.recv().await
    }

    /// Run the handler to completion with panic isolation.
    /// A panicking handler loses only its own message.
    async fn process(&self, message: QueuedMessage) {
        let user_id = message.user_id().to_string();
        let handler = Arc::clone(&self.handler);

        let handle = tokio::task::spawn(async move { handler.handle(message).await });

        if let Err(join_err) = handle.await {
            if join_err.is_panic() {
                error!(
                    worker_id = self.id,
                    user_id = %user_id,
                    panic_msg = %panic_message(join_err.into_panic()),
                    "Message handler panicked"
                );
            } else {
                error!(
                    worker_id = self.id,
                    user_id = %user_id,
                    "Message handler cancelled"
                );
            }
        }
    }
}
