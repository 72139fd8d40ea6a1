//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use serde::{Deserialize, Serialize};

/// notify.send.v1 - Queue a notification for every device of a user
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub user_id: String,
    /// JSON string, queued as its UTF-8 bytes
    pub payload: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendResponse {
    pub user_id: String,
    pub state: String,
}

/// queue.stats.v1 - Queue statistics (no parameters)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub capacity: usize,
    pub buffered: usize,
    pub worker_count: usize,
    pub closed: bool,
    pub uptime_seconds: i64,
}
