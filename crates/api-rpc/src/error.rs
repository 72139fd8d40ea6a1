//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use notify_core::error::AppError;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const CONFLICT: i32 = 4002;
    pub const THROTTLED: i32 = 4003;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SYSTEM_ERROR: i32 = 5002;
    pub const QUEUE_CLOSED: i32 = 5003;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Validation(msg) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::Domain(e) => {
            ErrorObjectOwned::owned(code::INTERNAL_ERROR, e.to_string(), None::<()>)
        }
        AppError::QueueFull => {
            ErrorObjectOwned::owned(code::THROTTLED, "Queue full", None::<()>)
        }
        AppError::Cancelled(msg) => ErrorObjectOwned::owned(code::THROTTLED, msg, None::<()>),
        AppError::QueueClosed => {
            ErrorObjectOwned::owned(code::QUEUE_CLOSED, "Queue closed", None::<()>)
        }
        AppError::InvalidState(msg) => ErrorObjectOwned::owned(code::CONFLICT, msg, None::<()>),
        AppError::Service(e) => {
            ErrorObjectOwned::owned(code::SYSTEM_ERROR, e.to_string(), None::<()>)
        }
    }
}
