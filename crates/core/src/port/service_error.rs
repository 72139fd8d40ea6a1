// Collaborator failure types (shared by PresenceResolver and DeviceSender)

use thiserror::Error;

/// Generic remote-error envelope: categorical status, human message, optional cause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub status: i32,
    pub message: String,
    pub cause: Option<String>,
}

impl RemoteError {
    pub fn new(status: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "[{}] {}: {}", self.status, self.message, cause),
            None => write!(f, "[{}] {}", self.status, self.message),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Failure of a resolver or sender call.
///
/// The dispatch pipeline treats every variant as "failed" and only logs the subtype.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid: {0}")]
    Invalid(String),

    #[error("Remote error: {0}")]
    Remote(RemoteError),
}

impl ServiceError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Unavailable(_) => "unavailable",
            ServiceError::Invalid(_) => "invalid",
            ServiceError::Remote(_) => "remote",
        }
    }
}

impl From<RemoteError> for ServiceError {
    fn from(err: RemoteError) -> Self {
        ServiceError::Remote(err)
    }
}
