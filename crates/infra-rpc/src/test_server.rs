// In-process downstream services for adapter tests

use crate::presence_resolver::METHOD_GET_DEVICES;
use crate::socket_sender::METHOD_SEND;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::{ErrorObjectOwned, Params};
use jsonrpsee::RpcModule;
use notify_core::domain::{Device, UserDevices};
use serde::Deserialize;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub enum PresenceFixture {
    Devices(Vec<Device>),
    NotFound,
}

#[derive(Deserialize)]
struct DevicesRequest {
    user_id: String,
}

pub async fn spawn_presence_server(fixture: PresenceFixture) -> (String, ServerHandle) {
    let mut module = RpcModule::new(());
    module
        .register_method(METHOD_GET_DEVICES, move |params, _, _| {
            get_devices(&fixture, params)
        })
        .unwrap();
    serve(module).await
}

fn get_devices(fixture: &PresenceFixture, params: Params) -> Result<UserDevices, ErrorObjectOwned> {
    let req: DevicesRequest = params.parse()?;
    match fixture {
        PresenceFixture::Devices(devices) => Ok(UserDevices::new(req.user_id, devices.clone())),
        PresenceFixture::NotFound => Err(ErrorObjectOwned::owned(
            4001,
            format!("user {} not found", req.user_id),
            None::<()>,
        )),
    }
}

#[derive(Clone)]
pub struct SocketFixture {
    failure: Option<(i32, String, String)>,
    received: Arc<Mutex<Vec<(i64, String)>>>,
}

impl SocketFixture {
    pub fn accepting() -> Self {
        Self {
            failure: None,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(code: i32, message: &str, cause: &str) -> Self {
        Self {
            failure: Some((code, message.to_string(), cause.to_string())),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<(i64, String)> {
        self.received.lock().unwrap().clone()
    }
}

#[derive(Deserialize)]
struct SendRequest {
    socket_id: i64,
    payload: String,
}

pub async fn spawn_socket_server(fixture: SocketFixture) -> (String, ServerHandle) {
    let mut module = RpcModule::new(());
    module
        .register_method(METHOD_SEND, move |params, _, _| send(&fixture, params))
        .unwrap();
    serve(module).await
}

fn send(fixture: &SocketFixture, params: Params) -> Result<serde_json::Value, ErrorObjectOwned> {
    let req: SendRequest = params.parse()?;
    if let Some((code, message, cause)) = &fixture.failure {
        return Err(ErrorObjectOwned::owned(
            *code,
            message.clone(),
            Some(cause.clone()),
        ));
    }
    fixture
        .received
        .lock()
        .unwrap()
        .push((req.socket_id, req.payload));
    Ok(serde_json::json!({}))
}

async fn serve(module: RpcModule<()>) -> (String, ServerHandle) {
    let server = Server::builder().build("127.0.0.1:0").await.unwrap();
    let addr = server.local_addr().unwrap();
    (format!("http://{}", addr), server.start(module))
}
