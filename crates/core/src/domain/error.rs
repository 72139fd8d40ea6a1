// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid queue configuration: {0}")]
    InvalidQueueConfig(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
