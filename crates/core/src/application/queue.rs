//! Channel Queue - bounded in-memory buffer drained by a fixed worker pool
//!
//! Producers call `enqueue*`; a single `start` call spawns the workers and
//! resolves once the queue is closed and every buffered message has been
//! handed to a worker. Nothing is persisted: a process restart loses the buffer.

use crate::application::worker::{
    shutdown_channel, SharedReceiver, ShutdownSender, ShutdownToken, Worker,
};
use crate::domain::{QueueConfig, QueuedMessage};
use crate::error::{AppError, Result};
use crate::port::{MessageHandler, MessageQueue};
use async_trait::async_trait;
use std::future::Future;
use std::sync::atomic::{AtomicIsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinSet;
use tracing::{error, info};

/// Point-in-time view of the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
    pub capacity: usize,
    pub buffered: usize,
    pub worker_count: usize,
    pub closed: bool,
}

/// Bounded FIFO queue backed by a tokio mpsc channel
pub struct ChannelQueue {
    config: QueueConfig,
    // None once closed: dropping the last sender lets workers observe the end of the buffer
    sender: Mutex<Option<mpsc::Sender<QueuedMessage>>>,
    // Taken by `start`
    receiver: Mutex<Option<mpsc::Receiver<QueuedMessage>>>,
    close_tx: ShutdownSender,
    close_rx: ShutdownToken,
    // Accepted but not yet handed to a handler; may dip below 0 transiently
    buffered: Arc<AtomicIsize>,
}

impl ChannelQueue {
    /// Create a queue; non-positive worker count or capacity is a configuration error
    pub fn new(config: QueueConfig) -> Result<Self> {
        config.validate()?;

        let (tx, rx) = mpsc::channel(config.capacity);
        let (close_tx, close_rx) = shutdown_channel();

        Ok(Self {
            config,
            sender: Mutex::new(Some(tx)),
            receiver: Mutex::new(Some(rx)),
            close_tx,
            close_rx,
            buffered: Arc::new(AtomicIsize::new(0)),
        })
    }

    pub fn config(&self) -> QueueConfig {
        self.config
    }

    /// Spawn `worker_count` workers and wait until the queue is closed and drained.
    ///
    /// Must be called once per queue; a second call returns `AppError::InvalidState`.
    /// Callers that need to keep producing should run this on its own task.
    pub async fn start(&self, handler: Arc<dyn MessageHandler>) -> Result<()> {
        let receiver = lock(&self.receiver)
            .take()
            .ok_or_else(|| AppError::InvalidState("queue already started".to_string()))?;
        let receiver: SharedReceiver = Arc::new(tokio::sync::Mutex::new(receiver));
        let handler: Arc<dyn MessageHandler> = Arc::new(Gauged {
            inner: handler,
            buffered: Arc::clone(&self.buffered),
        });

        let mut workers = JoinSet::new();
        for id in 0..self.config.worker_count {
            let worker = Worker::new(id, Arc::clone(&receiver), Arc::clone(&handler));
            workers.spawn(async move { worker.run().await });
        }

        info!(
            workers = self.config.worker_count,
            capacity = self.config.capacity,
            "Queue started"
        );

        let mut closed = self.close_rx.clone();
        closed.wait().await;

        while let Some(result) = workers.join_next().await {
            if let Err(e) = result {
                error!(error = ?e, "Worker task failed");
            }
        }

        info!("Queue drained, all workers stopped");
        Ok(())
    }

    /// Enqueue, racing a full buffer against `cancel`.
    ///
    /// # Errors
    /// - AppError::QueueClosed if the queue is (or becomes) closed before acceptance
    /// - AppError::Cancelled if `cancel` completes while the buffer is full
    pub async fn enqueue<F>(&self, message: QueuedMessage, cancel: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let sender = self.sender()?;
        let mut closed = self.close_rx.clone();

        tokio::select! {
            biased;
            _ = closed.wait() => Err(AppError::QueueClosed),
            sent = sender.send(message) => {
                sent.map_err(|_| AppError::QueueClosed)?;
                self.buffered.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            _ = cancel => Err(AppError::Cancelled("enqueue cancelled while queue full".to_string())),
        }
    }

    /// Enqueue without waiting for buffer space
    ///
    /// # Errors
    /// - AppError::QueueFull if the buffer holds `capacity` messages
    /// - AppError::QueueClosed if the queue is closed
    pub fn try_enqueue(&self, message: QueuedMessage) -> Result<()> {
        let sender = self.sender()?;
        sender.try_send(message).map_err(|e| match e {
            TrySendError::Full(_) => AppError::QueueFull,
            TrySendError::Closed(_) => AppError::QueueClosed,
        })?;
        self.buffered.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Close the queue; idempotent and safe under concurrent callers.
    ///
    /// Returns true only for the caller that performed the transition.
    /// Buffered messages are still delivered to workers.
    pub fn close(&self) -> bool {
        if !self.close_tx.shutdown() {
            return false;
        }
        lock(&self.sender).take();
        info!("Queue closed");
        true
    }

    pub fn is_closed(&self) -> bool {
        self.close_tx.is_shutdown()
    }

    pub fn stats(&self) -> QueueStats {
        QueueStats {
            capacity: self.config.capacity,
            buffered: self.buffered.load(Ordering::SeqCst).max(0) as usize,
            worker_count: self.config.worker_count,
            closed: self.is_closed(),
        }
    }

    fn sender(&self) -> Result<mpsc::Sender<QueuedMessage>> {
        if self.is_closed() {
            return Err(AppError::QueueClosed);
        }
        lock(&self.sender).clone().ok_or(AppError::QueueClosed)
    }
}

#[async_trait]
impl MessageQueue for ChannelQueue {
    async fn enqueue_timeout(&self, message: QueuedMessage, timeout: Duration) -> Result<()> {
        match self.enqueue(message, tokio::time::sleep(timeout)).await {
            Err(AppError::Cancelled(_)) => Err(AppError::Cancelled(format!(
                "deadline of {}ms exceeded while queue full",
                timeout.as_millis()
            ))),
            other => other,
        }
    }
}

/// Counts a message out of the buffer as soon as a worker picks it up
struct Gauged {
    inner: Arc<dyn MessageHandler>,
    buffered: Arc<AtomicIsize>,
}

#[async_trait]
impl MessageHandler for Gauged {
    async fn handle(&self, message: QueuedMessage) {
        self.buffered.fetch_sub(1, Ordering::SeqCst);
        self.inner.handle(message).await;
    }
}

// Guarded sections never panic, so poisoning carries no broken invariant
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
