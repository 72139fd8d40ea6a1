//! Simple SDK Example
//!
//! Demonstrates basic usage of the Notify SDK.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package notify-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --example simple -- user-42 "hello"
//!    ```

use notify_sdk::NotifyClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let user_id = args.next().unwrap_or_else(|| "user-42".to_string());
    let payload = args.next().unwrap_or_else(|| "hello".to_string());

    let client = NotifyClient::connect("http://127.0.0.1:12000").await?;

    let response = client.send(&user_id, &payload).await?;
    println!("Message for {} {}", response.user_id, response.state);

    let stats = client.stats().await?;
    println!(
        "Queue: {}/{} buffered, {} workers",
        stats.buffered, stats.capacity, stats.worker_count
    );

    Ok(())
}
