// Worker constants (No magic values)
use std::time::Duration;

/// Default deadline for a producer waiting on a full queue (1s)
pub const DEFAULT_ENQUEUE_TIMEOUT: Duration = Duration::from_secs(1);

/// How long the daemon waits for workers to drain after close (5s)
pub const SHUTDOWN_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);
