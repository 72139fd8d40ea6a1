// Device Domain Model
//
// Wire shape follows the presence service: {"id": "...", "kind": "WS"}

use serde::{Deserialize, Serialize};

/// Device kind as reported by the presence service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceKind {
    /// Live WebSocket connection, addressed by numeric socket id
    WebSocket,
    /// Any kind this service cannot deliver to (kept verbatim for logging)
    Other(String),
}

impl DeviceKind {
    pub const WEBSOCKET: &'static str = "WS";

    /// Only WebSocket devices have a delivery path
    pub fn is_deliverable(&self) -> bool {
        matches!(self, DeviceKind::WebSocket)
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeviceKind::WebSocket => Self::WEBSOCKET,
            DeviceKind::Other(kind) => kind,
        }
    }
}

impl From<String> for DeviceKind {
    fn from(s: String) -> Self {
        if s == Self::WEBSOCKET {
            DeviceKind::WebSocket
        } else {
            DeviceKind::Other(s)
        }
    }
}

impl From<DeviceKind> for String {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::WebSocket => DeviceKind::WEBSOCKET.to_string(),
            DeviceKind::Other(s) => s,
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single registered device of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub kind: DeviceKind,
}

impl Device {
    pub fn new(id: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn websocket(id: impl Into<String>) -> Self {
        Self::new(id, DeviceKind::WebSocket)
    }
}

/// Resolution result: devices in delivery attempt order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDevices {
    pub user_id: String,
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl UserDevices {
    pub fn new(user_id: impl Into<String>, devices: Vec<Device>) -> Self {
        Self {
            user_id: user_id.into(),
            devices,
        }
    }
}
