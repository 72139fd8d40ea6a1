// Presence Resolver over JSON-RPC
// Calls presence.devices.v1 {user_id} -> {user_id, devices: [{id, kind}]}

use crate::client::ClientConfig;
use crate::error::from_client_error;
use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::HttpClient;
use notify_core::domain::UserDevices;
use notify_core::port::{PresenceResolver, ServiceError};
use tracing::debug;

pub const METHOD_GET_DEVICES: &str = "presence.devices.v1";

/// PresenceResolver backed by the presence service
pub struct RpcPresenceResolver {
    client: HttpClient,
}

impl RpcPresenceResolver {
    pub fn new(config: &ClientConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            client: config.build()?,
        })
    }
}

#[async_trait]
impl PresenceResolver for RpcPresenceResolver {
    async fn resolve_devices(&self, user_id: &str) -> Result<UserDevices, ServiceError> {
        let mut params = ObjectParams::new();
        params
            .insert("user_id", user_id)
            .map_err(|e| ServiceError::Invalid(e.to_string()))?;

        let devices: UserDevices = self
            .client
            .request(METHOD_GET_DEVICES, params)
            .await
            .map_err(from_client_error)?;

        debug!(
            user_id = %user_id,
            devices = devices.devices.len(),
            "Presence lookup completed"
        );
        Ok(devices)
    }
}
