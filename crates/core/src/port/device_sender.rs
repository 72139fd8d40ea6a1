// Device Sender Port
// Delivers a payload to one specific device

use crate::port::ServiceError;
use async_trait::async_trait;

/// Device Sender trait
///
/// Implementations:
/// - RpcDeviceSender: JSON-RPC client to the socket service (infra-rpc)
/// - RecordingDeviceSender: in-memory test double
#[async_trait]
pub trait DeviceSender: Send + Sync {
    /// Deliver `payload` to the device identified by `device_id`
    ///
    /// The payload is opaque here. Senders on a text-only transport (such as
    /// `RpcDeviceSender`) accept UTF-8 payloads only.
    ///
    /// # Errors
    /// - ServiceError::Invalid if the device id is not addressable by this sender,
    ///   or the payload cannot be carried by its transport
    /// - ServiceError::Remote if the downstream service rejected the delivery
    async fn send_to_device(&self, device_id: &str, payload: &[u8]) -> Result<(), ServiceError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// A delivery attempt observed by the recording sender
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentMessage {
        pub device_id: String,
        pub payload: Vec<u8>,
    }

    /// Records every attempt; fails for configured device ids
    #[derive(Default, Clone)]
    pub struct RecordingDeviceSender {
        sent: Arc<Mutex<Vec<SentMessage>>>,
        failures: Arc<Mutex<HashMap<String, ServiceError>>>,
    }

    impl RecordingDeviceSender {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make sends to `device_id` fail with `err`
        pub fn fail_for(self, device_id: impl Into<String>, err: ServiceError) -> Self {
            self.failures.lock().unwrap().insert(device_id.into(), err);
            self
        }

        /// All attempts, successful or not, in call order
        pub fn sent(&self) -> Vec<SentMessage> {
            self.sent.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl DeviceSender for RecordingDeviceSender {
        async fn send_to_device(
            &self,
            device_id: &str,
            payload: &[u8],
        ) -> Result<(), ServiceError> {
            self.sent.lock().unwrap().push(SentMessage {
                device_id: device_id.to_string(),
                payload: payload.to_vec(),
            });

            match self.failures.lock().unwrap().get(device_id) {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }
}
