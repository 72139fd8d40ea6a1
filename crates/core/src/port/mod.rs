// Port Layer - Interfaces for external collaborators

pub mod device_sender;
pub mod message_handler;
pub mod message_queue;
pub mod presence_resolver;
pub mod reporter;
pub mod service_error;

// Re-exports
pub use device_sender::DeviceSender;
pub use message_handler::MessageHandler;
pub use message_queue::MessageQueue;
pub use presence_resolver::PresenceResolver;
pub use reporter::{DeliveryReporter, TracingReporter};
pub use service_error::{RemoteError, ServiceError};
