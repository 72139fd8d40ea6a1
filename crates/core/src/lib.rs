// Notify Core - Domain Logic, Ports & Dispatch Pipeline
// NO transport dependencies (Hexagonal Architecture)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};
