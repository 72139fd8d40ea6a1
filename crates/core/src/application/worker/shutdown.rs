// Queue Close Signal (single-fire barrier)

use tokio::sync::watch;

/// Observes the closed flag of a queue
#[derive(Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for shutdown signal (returns immediately if already fired)
    pub async fn wait(&mut self) {
        // Sender dropped counts as shutdown
        let _ = self.rx.wait_for(|closed| *closed).await;
    }
}

/// Fires the closed flag; false -> true only, never reversed
pub struct ShutdownSender {
    tx: watch::Sender<bool>,
}

impl ShutdownSender {
    /// Signal shutdown to all observers.
    ///
    /// Returns true only for the one caller that performed the transition,
    /// however many callers race here.
    pub fn shutdown(&self) -> bool {
        self.tx.send_if_modified(|closed| {
            if *closed {
                false
            } else {
                *closed = true;
                true
            }
        })
    }

    pub fn is_shutdown(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Create a shutdown channel
pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx }, ShutdownToken { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_fires_once() {
        let (tx, token) = shutdown_channel();
        assert!(!token.is_shutdown());

        assert!(tx.shutdown());
        assert!(!tx.shutdown());
        assert!(token.is_shutdown());
    }

    #[tokio::test]
    async fn test_wait_after_fire_returns() {
        let (tx, mut token) = shutdown_channel();
        tx.shutdown();

        tokio::time::timeout(Duration::from_millis(100), token.wait())
            .await
            .expect("wait should return once fired");
    }

    #[tokio::test]
    async fn test_wait_wakes_on_fire() {
        let (tx, mut token) = shutdown_channel();

        let waiter = tokio::spawn(async move { token.wait().await });
        tokio::task::yield_now().await;
        tx.shutdown();

        let result = tokio::time::timeout(Duration::from_secs(1), waiter).await;
        assert!(result.is_ok(), "waiter should wake after shutdown");
    }

    #[test]
    fn test_wait_pending_until_fired() {
        let (tx, mut token) = shutdown_channel();
        let mut wait = tokio_test::task::spawn(token.wait());

        tokio_test::assert_pending!(wait.poll());
        tx.shutdown();
        assert!(wait.is_woken());
        tokio_test::assert_ready!(wait.poll());
    }
}
