// Panic isolation helpers for workers
use std::any::Any;

/// Extract a readable message from a panic payload
///
/// # Example
/// ```text
/// match tokio::spawn(fut).await {
///     Err(e) if e.is_panic() => error!("{}", panic_message(e.into_panic())),
///     _ => {}
/// }
/// ```
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
