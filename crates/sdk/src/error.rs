//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// RPC code used by the daemon for back-pressure (queue full / deadline)
pub const THROTTLED: i32 = 4003;

/// RPC code used by the daemon once its queue is closed
pub const QUEUE_CLOSED: i32 = 5003;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl SdkError {
    /// True when the daemon refused the message because its queue was full
    pub fn is_throttled(&self) -> bool {
        matches!(self, SdkError::Rpc { code, .. } if *code == THROTTLED)
    }

    /// True when the daemon is shutting down
    pub fn is_queue_closed(&self) -> bool {
        matches!(self, SdkError::Rpc { code, .. } if *code == QUEUE_CLOSED)
    }
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => SdkError::Rpc {
                code: call_err.code(),
                message: call_err.message().to_string(),
            },
            jsonrpsee::core::ClientError::Transport(e) => SdkError::Transport(e.to_string()),
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                SdkError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::ParseError(e) => SdkError::Serialization(e),
            _ => SdkError::Other(e.to_string()),
        }
    }
}
