// Queued Message Domain Model

/// User identifier as known to the presence service
pub type UserId = String;

/// One logical notification waiting in the queue.
///
/// Immutable once constructed: consumed exactly once by exactly one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedMessage {
    user_id: UserId,
    payload: Vec<u8>,
}

impl QueuedMessage {
    pub fn new(user_id: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            user_id: user_id.into(),
            payload: payload.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_parts(self) -> (UserId, Vec<u8>) {
        (self.user_id, self.payload)
    }
}
