// Queue Domain Model

use crate::domain::error::{DomainError, Result};

/// Default number of workers draining the queue
pub const DEFAULT_WORKERS: usize = 10;

/// Default number of buffered messages
pub const DEFAULT_QUEUE_SIZE: usize = 100;

/// Queue configuration, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    pub worker_count: usize,
    pub capacity: usize,
}

impl QueueConfig {
    pub fn new(worker_count: usize, capacity: usize) -> Self {
        Self {
            worker_count,
            capacity,
        }
    }

    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Both values must be > 0
    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(DomainError::InvalidQueueConfig(
                "worker_count must be greater than 0".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(DomainError::InvalidQueueConfig(
                "capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS, DEFAULT_QUEUE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QueueConfig::default();
        assert_eq!(config.worker_count, 10);
        assert_eq!(config.capacity, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = QueueConfig::default().with_workers(0).validate().unwrap_err();
        assert!(err.to_string().contains("worker_count"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = QueueConfig::default().with_capacity(0).validate().unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }
}
