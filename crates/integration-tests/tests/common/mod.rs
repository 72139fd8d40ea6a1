//! Shared harness: fake presence/socket services and a running notify stack

#![allow(dead_code)]

use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::{ErrorObjectOwned, Params};
use jsonrpsee::RpcModule;
use notify_api_rpc::{RpcServer, RpcServerConfig};
use notify_core::application::{ChannelQueue, FanOutHandler};
use notify_core::domain::{Device, QueueConfig, UserDevices};
use notify_core::port::reporter::mocks::RecordingReporter;
use notify_infra_rpc::{ClientConfig, RpcDeviceSender, RpcPresenceResolver};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Presence directory keyed by user id; unknown users answer 4001
#[derive(Clone, Default)]
pub struct Directory {
    users: Arc<HashMap<String, Vec<Device>>>,
}

impl Directory {
    pub fn new(entries: Vec<(&str, Vec<Device>)>) -> Self {
        Self {
            users: Arc::new(
                entries
                    .into_iter()
                    .map(|(user, devices)| (user.to_string(), devices))
                    .collect(),
            ),
        }
    }
}

#[derive(Deserialize)]
struct DevicesRequest {
    user_id: String,
}

fn lookup(directory: &Directory, params: Params) -> Result<UserDevices, ErrorObjectOwned> {
    let req: DevicesRequest = params.parse()?;
    match directory.users.get(&req.user_id) {
        Some(devices) => Ok(UserDevices::new(req.user_id, devices.clone())),
        None => Err(ErrorObjectOwned::owned(
            4001,
            format!("user {} not found", req.user_id),
            None::<()>,
        )),
    }
}

/// Socket service recording deliveries; listed socket ids answer with 5000
#[derive(Clone, Default)]
pub struct Sockets {
    broken: Arc<Vec<i64>>,
    delivered: Arc<Mutex<Vec<(i64, String)>>>,
}

impl Sockets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_broken(ids: Vec<i64>) -> Self {
        Self {
            broken: Arc::new(ids),
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> Vec<(i64, String)> {
        self.delivered.lock().unwrap().clone()
    }

    /// Poll until at least `count` deliveries were recorded
    pub async fn wait_for(&self, count: usize) -> Vec<(i64, String)> {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            let delivered = self.delivered();
            if delivered.len() >= count || tokio::time::Instant::now() > deadline {
                return delivered;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

#[derive(Deserialize)]
struct SocketRequest {
    socket_id: i64,
    payload: String,
}

fn deliver(sockets: &Sockets, params: Params) -> Result<serde_json::Value, ErrorObjectOwned> {
    let req: SocketRequest = params.parse()?;
    if sockets.broken.contains(&req.socket_id) {
        return Err(ErrorObjectOwned::owned(
            5000,
            "socket closed",
            Some(format!("socket {} gone", req.socket_id)),
        ));
    }
    sockets
        .delivered
        .lock()
        .unwrap()
        .push((req.socket_id, req.payload));
    Ok(serde_json::json!({}))
}

pub async fn spawn_presence(directory: Directory) -> (String, ServerHandle) {
    let mut module = RpcModule::new(());
    module
        .register_method("presence.devices.v1", move |params, _, _| {
            lookup(&directory, params)
        })
        .unwrap();
    serve(module).await
}

pub async fn spawn_sockets(sockets: Sockets) -> (String, ServerHandle) {
    let mut module = RpcModule::new(());
    module
        .register_method("socket.send.v1", move |params, _, _| deliver(&sockets, params))
        .unwrap();
    serve(module).await
}

async fn serve(module: RpcModule<()>) -> (String, ServerHandle) {
    let server = Server::builder().build("127.0.0.1:0").await.unwrap();
    let addr = server.local_addr().unwrap();
    (format!("http://{}", addr), server.start(module))
}

/// Entire service wired the way the daemon does it, on ephemeral ports
pub struct Stack {
    pub url: String,
    pub queue: Arc<ChannelQueue>,
    pub reporter: RecordingReporter,
    pub workers: JoinHandle<()>,
    handles: Vec<ServerHandle>,
}

impl Stack {
    pub async fn start(config: QueueConfig, directory: Directory, sockets: Sockets) -> Self {
        let (presence_url, presence_handle) = spawn_presence(directory).await;
        let (socket_url, socket_handle) = spawn_sockets(sockets).await;

        let reporter = RecordingReporter::new();
        let handler = FanOutHandler::new(
            Arc::new(RpcPresenceResolver::new(&ClientConfig::new(presence_url)).unwrap()),
            Arc::new(RpcDeviceSender::new(&ClientConfig::new(socket_url)).unwrap()),
            Arc::new(reporter.clone()),
        );

        let queue = Arc::new(ChannelQueue::new(config).unwrap());
        let workers = {
            let queue = queue.clone();
            tokio::spawn(async move {
                queue.start(Arc::new(handler)).await.unwrap();
            })
        };

        let (addr, rpc_handle) = rpc(queue.clone(), Duration::from_millis(50)).await;

        Self {
            url: format!("http://{}", addr),
            queue,
            reporter,
            workers,
            handles: vec![presence_handle, socket_handle, rpc_handle],
        }
    }

    pub fn stop(self) {
        self.queue.close();
        for handle in self.handles {
            let _ = handle.stop();
        }
    }
}

pub async fn rpc(queue: Arc<ChannelQueue>, enqueue_timeout: Duration) -> (SocketAddr, ServerHandle) {
    let config = RpcServerConfig {
        port: 0,
        enqueue_timeout,
        ..Default::default()
    };
    RpcServer::new(config, queue).start().await.unwrap()
}
