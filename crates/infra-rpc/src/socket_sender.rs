// Device Sender over JSON-RPC (WebSocket gateway)
// Calls socket.send.v1 {socket_id, payload}

use crate::client::ClientConfig;
use crate::error::from_client_error;
use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::HttpClient;
use notify_core::port::{DeviceSender, ServiceError};
use tracing::debug;

pub const METHOD_SEND: &str = "socket.send.v1";

/// DeviceSender delivering to WebSocket connections through the socket service
///
/// `socket.send.v1` carries the payload as a JSON string, so only UTF-8
/// payloads are deliverable; anything else fails with `ServiceError::Invalid`
/// before the remote call.
pub struct RpcDeviceSender {
    client: HttpClient,
}

impl RpcDeviceSender {
    pub fn new(config: &ClientConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            client: config.build()?,
        })
    }
}

/// WebSocket device ids are numeric socket ids
pub fn parse_socket_id(device_id: &str) -> Result<i64, ServiceError> {
    device_id
        .parse::<i64>()
        .map_err(|e| ServiceError::Invalid(format!("Invalid socket id '{}': {}", device_id, e)))
}

#[async_trait]
impl DeviceSender for RpcDeviceSender {
    async fn send_to_device(&self, device_id: &str, payload: &[u8]) -> Result<(), ServiceError> {
        let socket_id = parse_socket_id(device_id)?;
        let payload = std::str::from_utf8(payload)
            .map_err(|e| ServiceError::Invalid(format!("Payload is not valid UTF-8: {}", e)))?;

        let mut params = ObjectParams::new();
        params
            .insert("socket_id", socket_id)
            .map_err(|e| ServiceError::Invalid(e.to_string()))?;
        params
            .insert("payload", payload)
            .map_err(|e| ServiceError::Invalid(e.to_string()))?;

        let _reply: serde_json::Value = self
            .client
            .request(METHOD_SEND, params)
            .await
            .map_err(from_client_error)?;

        debug!(socket_id = socket_id, "Message sent to socket");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{spawn_socket_server, SocketFixture};

    #[test]
    fn test_parse_socket_id() {
        assert_eq!(parse_socket_id("111").unwrap(), 111);
        assert!(matches!(
            parse_socket_id("abc"),
            Err(ServiceError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_send_to_device() {
        let fixture = SocketFixture::accepting();
        let (url, _handle) = spawn_socket_server(fixture.clone()).await;

        let sender = RpcDeviceSender::new(&ClientConfig::new(url)).unwrap();
        sender.send_to_device("222", b"data").await.unwrap();

        assert_eq!(fixture.received(), vec![(222, "data".to_string())]);
    }

    #[tokio::test]
    async fn test_invalid_socket_id_skips_remote_call() {
        let fixture = SocketFixture::accepting();
        let (url, _handle) = spawn_socket_server(fixture.clone()).await;

        let sender = RpcDeviceSender::new(&ClientConfig::new(url)).unwrap();
        let err = sender.send_to_device("not-a-number", b"data").await.unwrap_err();

        assert!(matches!(err, ServiceError::Invalid(_)));
        assert!(fixture.received().is_empty());
    }

    #[tokio::test]
    async fn test_non_utf8_payload_is_invalid() {
        let fixture = SocketFixture::accepting();
        let (url, _handle) = spawn_socket_server(fixture.clone()).await;

        let sender = RpcDeviceSender::new(&ClientConfig::new(url)).unwrap();
        let err = sender.send_to_device("1", &[0xff, 0xfe]).await.unwrap_err();

        match err {
            ServiceError::Invalid(msg) => assert!(msg.contains("UTF-8")),
            other => panic!("expected invalid payload, got {:?}", other),
        }
        assert!(fixture.received().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_keeps_status_and_cause() {
        let fixture = SocketFixture::failing(5000, "Unable to send", "socket closed");
        let (url, _handle) = spawn_socket_server(fixture).await;

        let sender = RpcDeviceSender::new(&ClientConfig::new(url)).unwrap();
        let err = sender.send_to_device("1", b"data").await.unwrap_err();

        match err {
            ServiceError::Remote(remote) => {
                assert_eq!(remote.status, 5000);
                assert_eq!(remote.message, "Unable to send");
                assert!(remote.cause.unwrap().contains("socket closed"));
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }
}
