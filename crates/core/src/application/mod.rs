// Application Layer - Dispatch pipeline and producer use case

pub mod fanout;
pub mod notify;
pub mod queue;
pub mod worker;

// Re-exports
pub use fanout::{DispatchSummary, FanOutHandler};
pub use notify::NotifyService;
pub use queue::{ChannelQueue, QueueStats};
pub use worker::{shutdown_channel, ShutdownSender, ShutdownToken, Worker};
