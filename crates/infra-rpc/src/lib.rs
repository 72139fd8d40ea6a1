// Notify Infrastructure - Downstream JSON-RPC Adapters
// Implements: PresenceResolver, DeviceSender

pub mod client;
pub mod error;
pub mod presence_resolver;
pub mod socket_sender;

#[cfg(test)]
mod test_server;

pub use client::{ClientConfig, DEFAULT_REQUEST_TIMEOUT};
pub use presence_resolver::RpcPresenceResolver;
pub use socket_sender::RpcDeviceSender;
