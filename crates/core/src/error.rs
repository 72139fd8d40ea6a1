// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Queue closed")]
    QueueClosed,

    #[error("Queue full")]
    QueueFull,

    #[error("Enqueue cancelled: {0}")]
    Cancelled(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Service error: {0}")]
    Service(#[from] crate::port::ServiceError),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
