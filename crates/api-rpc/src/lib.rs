//! JSON-RPC API Layer
//!
//! Producer front end of the Notify service: accepts "notify user" requests and
//! hands them to the dispatch queue.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
