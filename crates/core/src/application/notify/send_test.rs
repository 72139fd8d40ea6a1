//! Unit tests for send validation and enqueue

use super::send::{execute, validate_request};
use super::*;
use crate::domain::QueuedMessage;
use crate::error::AppError;
use crate::port::message_queue::mocks::{MockMessageQueue, MockQueueBehavior};

#[test]
fn test_validate_missing_user_id() {
    let result = validate_request(&SendRequest::new("", "data"));
    assert!(result.unwrap_err().to_string().contains("missing user id"));
}

#[test]
fn test_validate_empty_payload() {
    let result = validate_request(&SendRequest::new("user", Vec::new()));
    assert!(result.unwrap_err().to_string().contains("empty message"));
}

#[test]
fn test_validate_valid_request() {
    assert!(validate_request(&SendRequest::new("user", "test")).is_ok());
}

#[tokio::test]
async fn test_send_enqueues_message() {
    let queue = Arc::new(MockMessageQueue::accepting());
    let service = NotifyService::new(queue.clone());

    service.send(SendRequest::new("user", "test")).await.unwrap();

    assert_eq!(queue.accepted(), vec![QueuedMessage::new("user", "test")]);
}

#[tokio::test]
async fn test_invalid_request_never_reaches_queue() {
    let queue = MockMessageQueue::accepting();

    let result = execute(&queue, Duration::from_millis(5), SendRequest::new("", "x")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(queue.accepted().is_empty());
}

#[tokio::test]
async fn test_full_queue_surfaces_cancelled() {
    let service = NotifyService::new(Arc::new(MockMessageQueue::new(MockQueueBehavior::Full)))
        .with_enqueue_timeout(Duration::from_millis(1));

    let result = service.send(SendRequest::new("user", "test")).await;

    assert!(matches!(result, Err(AppError::Cancelled(_))));
}

#[tokio::test]
async fn test_closed_queue_surfaces_closed() {
    let service = NotifyService::new(Arc::new(MockMessageQueue::new(MockQueueBehavior::Closed)));

    let result = service.send(SendRequest::new("user", "test")).await;

    assert!(matches!(result, Err(AppError::QueueClosed)));
}
