// Delivery Reporter Port
// Side channel for per-message and per-device outcomes (the queue never sees them)

use crate::domain::Device;
use crate::port::ServiceError;
use tracing::{debug, error, warn};

/// Injected reporting capability used by the fan-out handler
pub trait DeliveryReporter: Send + Sync {
    /// Presence lookup failed; the message is abandoned
    fn resolution_failed(&self, user_id: &str, err: &ServiceError);

    /// Device kind has no delivery path; skipped
    fn device_unsupported(&self, user_id: &str, device: &Device);

    /// A single device send failed; siblings are unaffected
    fn delivery_failed(&self, user_id: &str, device: &Device, err: &ServiceError);

    fn delivered(&self, user_id: &str, device: &Device);
}

/// Production reporter: structured `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl DeliveryReporter for TracingReporter {
    fn resolution_failed(&self, user_id: &str, err: &ServiceError) {
        error!(
            user_id = %user_id,
            error_kind = err.kind(),
            error = %err,
            "Unable to retrieve devices for user"
        );
    }

    fn device_unsupported(&self, user_id: &str, device: &Device) {
        warn!(
            user_id = %user_id,
            device_id = %device.id,
            device_kind = %device.kind,
            "Unsupported device type"
        );
    }

    fn delivery_failed(&self, user_id: &str, device: &Device, err: &ServiceError) {
        error!(
            user_id = %user_id,
            device_id = %device.id,
            device_kind = %device.kind,
            error_kind = err.kind(),
            error = %err,
            "Unable to send message to device"
        );
    }

    fn delivered(&self, user_id: &str, device: &Device) {
        debug!(
            user_id = %user_id,
            device_id = %device.id,
            device_kind = %device.kind,
            "Message delivered to device"
        );
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Reported event, captured for assertions
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ReportEvent {
        ResolutionFailed {
            user_id: String,
            error: ServiceError,
        },
        DeviceUnsupported {
            user_id: String,
            device: Device,
        },
        DeliveryFailed {
            user_id: String,
            device: Device,
            error: ServiceError,
        },
        Delivered {
            user_id: String,
            device: Device,
        },
    }

    /// Captures every report in order
    #[derive(Default, Clone)]
    pub struct RecordingReporter {
        events: Arc<Mutex<Vec<ReportEvent>>>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<ReportEvent> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: ReportEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl DeliveryReporter for RecordingReporter {
        fn resolution_failed(&self, user_id: &str, err: &ServiceError) {
            self.push(ReportEvent::ResolutionFailed {
                user_id: user_id.to_string(),
                error: err.clone(),
            });
        }

        fn device_unsupported(&self, user_id: &str, device: &Device) {
            self.push(ReportEvent::DeviceUnsupported {
                user_id: user_id.to_string(),
                device: device.clone(),
            });
        }

        fn delivery_failed(&self, user_id: &str, device: &Device, err: &ServiceError) {
            self.push(ReportEvent::DeliveryFailed {
                user_id: user_id.to_string(),
                device: device.clone(),
                error: err.clone(),
            });
        }

        fn delivered(&self, user_id: &str, device: &Device) {
            self.push(ReportEvent::Delivered {
                user_id: user_id.to_string(),
                device: device.clone(),
            });
        }
    }
}
