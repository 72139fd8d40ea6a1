//! Client error mapping
//!
//! Maps JSON-RPC client failures onto the collaborator error taxonomy.

use jsonrpsee::core::ClientError;
use notify_core::port::{RemoteError, ServiceError};

/// Downstream error codes (shared JSON-RPC convention)
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
}

/// Convert a client error into a ServiceError
pub fn from_client_error(err: ClientError) -> ServiceError {
    match err {
        ClientError::Call(call_err) => match call_err.code() {
            code::NOT_FOUND => ServiceError::NotFound(call_err.message().to_string()),
            code::VALIDATION_ERROR => ServiceError::Invalid(call_err.message().to_string()),
            status => {
                let remote = RemoteError::new(status, call_err.message());
                let remote = match call_err.data() {
                    Some(data) => remote.with_cause(data.get()),
                    None => remote,
                };
                ServiceError::Remote(remote)
            }
        },
        ClientError::Transport(e) => ServiceError::Unavailable(format!("Transport error: {}", e)),
        ClientError::RequestTimeout => ServiceError::Unavailable("Request timed out".to_string()),
        ClientError::RestartNeeded(_) => {
            ServiceError::Unavailable("Connection restart needed".to_string())
        }
        ClientError::ParseError(e) => ServiceError::Invalid(format!("Parse error: {}", e)),
        other => ServiceError::Unavailable(other.to_string()),
    }
}
