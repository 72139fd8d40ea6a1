//! Fan-out Handler - turns one queued message into N independent delivery attempts
//!
//! Policy:
//! - presence lookup failure abandons the whole message (no partial delivery)
//! - undeliverable device kinds are skipped with a warning
//! - a failed device send never stops delivery to the remaining devices

use crate::domain::{Device, QueuedMessage};
use crate::port::{DeliveryReporter, DeviceSender, MessageHandler, PresenceResolver, ServiceError};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome counts of one dispatch (for logs and tests; the queue never sees it)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub resolved: bool,
    pub devices: usize,
    pub delivered: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Message handler resolving devices and sending to each of them in order
pub struct FanOutHandler {
    resolver: Arc<dyn PresenceResolver>,
    sender: Arc<dyn DeviceSender>,
    reporter: Arc<dyn DeliveryReporter>,
    call_timeout: Option<Duration>,
}

impl FanOutHandler {
    pub fn new(
        resolver: Arc<dyn PresenceResolver>,
        sender: Arc<dyn DeviceSender>,
        reporter: Arc<dyn DeliveryReporter>,
    ) -> Self {
        Self {
            resolver,
            sender,
            reporter,
            call_timeout: None,
        }
    }

    /// Bound every resolver/sender call.
    ///
    /// Without it the handler relies on the collaborators' own timeouts.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    /// Resolve and deliver one message; sends are sequential and non-overlapping
    pub async fn dispatch(&self, message: &QueuedMessage) -> DispatchSummary {
        let user_id = message.user_id();
        let mut summary = DispatchSummary::default();

        let user_devices = match self
            .bounded("resolve_devices", self.resolver.resolve_devices(user_id))
            .await
        {
            Ok(devices) => devices,
            Err(e) => {
                self.reporter.resolution_failed(user_id, &e);
                return summary;
            }
        };

        summary.resolved = true;
        summary.devices = user_devices.devices.len();
        debug!(
            user_id = %user_id,
            devices = summary.devices,
            "Resolved user devices"
        );

        for device in &user_devices.devices {
            if !device.kind.is_deliverable() {
                self.reporter.device_unsupported(user_id, device);
                summary.skipped += 1;
                continue;
            }

            match self.send(device, message.payload()).await {
                Ok(()) => {
                    self.reporter.delivered(user_id, device);
                    summary.delivered += 1;
                }
                Err(e) => {
                    self.reporter.delivery_failed(user_id, device, &e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    async fn send(&self, device: &Device, payload: &[u8]) -> Result<(), ServiceError> {
        self.bounded("send_to_device", self.sender.send_to_device(&device.id, payload))
            .await
    }

    async fn bounded<T, F>(&self, call: &str, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        match self.call_timeout {
            None => fut.await,
            Some(limit) => tokio::time::timeout(limit, fut).await.unwrap_or_else(|_| {
                Err(ServiceError::Unavailable(format!(
                    "{} timed out after {}ms",
                    call,
                    limit.as_millis()
                )))
            }),
        }
    }
}

#[async_trait]
impl MessageHandler for FanOutHandler {
    async fn handle(&self, message: QueuedMessage) {
        let summary = self.dispatch(&message).await;
        if summary.resolved {
            info!(
                user_id = %message.user_id(),
                devices = summary.devices,
                delivered = summary.delivered,
                failed = summary.failed,
                skipped = summary.skipped,
                "Message dispatched"
            );
        }
    }
}
