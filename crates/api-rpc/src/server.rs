//! JSON-RPC Server
//!
//! Implements the JSON-RPC 2.0 server over HTTP.

use crate::handler::RpcHandler;
use crate::types::SendRequest;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use notify_core::application::worker::constants::DEFAULT_ENQUEUE_TIMEOUT;
use notify_core::application::ChannelQueue;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 12000;

pub const METHOD_SEND: &str = "notify.send.v1";
pub const METHOD_STATS: &str = "queue.stats.v1";

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    /// 0 binds an ephemeral port
    pub port: u16,
    pub enqueue_timeout: Duration,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            enqueue_timeout: DEFAULT_ENQUEUE_TIMEOUT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, queue: Arc<ChannelQueue>) -> Self {
        let handler = Arc::new(RpcHandler::new(queue, config.enqueue_timeout));
        Self { config, handler }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port 0) and the server handle.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let mut module = RpcModule::new(());

        // Register methods
        let handler = self.handler.clone();
        module
            .register_async_method(METHOD_SEND, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: SendRequest = params.parse()?;
                    handler.send(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_method(METHOD_STATS, move |_, _, _| {
                Ok::<_, jsonrpsee::types::ErrorObjectOwned>(handler.stats())
            })
            .map_err(|e| e.to_string())?;

        info!(
            addr = %local_addr,
            "JSON-RPC server started"
        );

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}
