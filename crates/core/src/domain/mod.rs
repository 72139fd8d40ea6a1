// Domain Layer - Pure entities, no I/O

pub mod device;
pub mod error;
pub mod message;
pub mod queue;

// Re-exports
pub use device::{Device, DeviceKind, UserDevices};
pub use error::DomainError;
pub use message::{QueuedMessage, UserId};
pub use queue::{QueueConfig, DEFAULT_QUEUE_SIZE, DEFAULT_WORKERS};
