//! Notify SDK - Rust Client Library
//!
//! Provides a convenient client for producers talking to the Notify daemon.
//!
//! # Example
//!
//! ```no_run
//! use notify_sdk::NotifyClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NotifyClient::connect("http://127.0.0.1:12000").await?;
//!
//!     let response = client.send("user-42", "{\"type\":\"ping\"}").await?;
//!     println!("Message {}", response.state);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::NotifyClient;
pub use error::{Result, SdkError};
pub use types::{SendResponse, StatsResponse};
