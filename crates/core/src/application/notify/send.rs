// Send Use Case

use crate::domain::QueuedMessage;
use crate::error::{AppError, Result};
use crate::port::MessageQueue;
use std::time::Duration;
use tracing::debug;

/// Send request as received from a producer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub user_id: String,
    pub payload: Vec<u8>,
}

impl SendRequest {
    pub fn new(user_id: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            user_id: user_id.into(),
            payload: payload.into(),
        }
    }
}

/// Client-side validation, enforced before the queue sees the message
pub fn validate_request(req: &SendRequest) -> Result<()> {
    if req.user_id.is_empty() {
        return Err(AppError::Validation("missing user id".to_string()));
    }
    if req.payload.is_empty() {
        return Err(AppError::Validation("empty message".to_string()));
    }
    Ok(())
}

/// Execute send use case
///
/// # Arguments
///
/// * `queue` - Producer view of the queue
/// * `timeout` - How long to wait for space in a full queue
/// * `req` - Send request
pub async fn execute(queue: &dyn MessageQueue, timeout: Duration, req: SendRequest) -> Result<()> {
    validate_request(&req)?;

    let user_id = req.user_id.clone();
    queue
        .enqueue_timeout(QueuedMessage::new(req.user_id, req.payload), timeout)
        .await?;

    debug!(user_id = %user_id, "Message for user queued");
    Ok(())
}
