//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from api-rpc crate.

use serde::Deserialize;

/// Response from send operation
#[derive(Debug, Clone, Deserialize)]
pub struct SendResponse {
    pub user_id: String,
    pub state: String,
}

/// Queue statistics
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub capacity: usize,
    pub buffered: usize,
    pub worker_count: usize,
    pub closed: bool,
    pub uptime_seconds: i64,
}
