// Presence Resolver Port
// Maps a user id to the user's currently registered devices

use crate::domain::UserDevices;
use crate::port::ServiceError;
use async_trait::async_trait;

/// Presence Resolver trait
///
/// Implementations:
/// - RpcPresenceResolver: JSON-RPC client to the presence service (infra-rpc)
/// - MockPresenceResolver: in-memory test double
#[async_trait]
pub trait PresenceResolver: Send + Sync {
    /// Resolve the devices of a user, in delivery attempt order
    ///
    /// # Errors
    /// - ServiceError::NotFound if the user is unknown to the presence service
    /// - ServiceError::Unavailable if the presence service cannot be reached
    async fn resolve_devices(&self, user_id: &str) -> Result<UserDevices, ServiceError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::Device;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Mock resolver behavior
    #[derive(Debug, Clone)]
    pub enum MockResolverBehavior {
        /// Return these devices for any user
        Devices(Vec<Device>),
        /// Fail every call
        Fail(ServiceError),
        /// Sleep before answering with no devices
        Slow(Duration),
    }

    /// Mock Presence Resolver for testing
    pub struct MockPresenceResolver {
        behavior: MockResolverBehavior,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl MockPresenceResolver {
        pub fn new(behavior: MockResolverBehavior) -> Self {
            Self {
                behavior,
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn with_devices(devices: Vec<Device>) -> Self {
            Self::new(MockResolverBehavior::Devices(devices))
        }

        pub fn failing(err: ServiceError) -> Self {
            Self::new(MockResolverBehavior::Fail(err))
        }

        /// User ids passed to `resolve_devices`, in call order
        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PresenceResolver for MockPresenceResolver {
        async fn resolve_devices(&self, user_id: &str) -> Result<UserDevices, ServiceError> {
            self.requested.lock().unwrap().push(user_id.to_string());

            match &self.behavior {
                MockResolverBehavior::Devices(devices) => {
                    Ok(UserDevices::new(user_id, devices.clone()))
                }
                MockResolverBehavior::Fail(err) => Err(err.clone()),
                MockResolverBehavior::Slow(delay) => {
                    tokio::time::sleep(*delay).await;
                    Ok(UserDevices::new(user_id, Vec::new()))
                }
            }
        }
    }
}
