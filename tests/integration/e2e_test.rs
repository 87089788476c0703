//! End-to-end tests: controller driving the HTTP source

mod support;

use arzesh::config::{Config, FeedConfig};
use arzesh::controller::{FetchState, Notification, NotificationLevel, PriceFeedController};
use arzesh::display::render;
use arzesh::feed::{HttpPriceSource, PriceQuote};
use chrono::Utc;
use std::sync::Arc;
use support::{Responder, SNAPSHOT_BODY};
use tokio::sync::mpsc;

fn controller_for(
    responder: &Responder,
) -> (
    PriceFeedController<HttpPriceSource>,
    mpsc::Receiver<Notification>,
) {
    controller_at(&responder.url)
}

fn controller_at(
    endpoint: &str,
) -> (
    PriceFeedController<HttpPriceSource>,
    mpsc::Receiver<Notification>,
) {
    let config = FeedConfig {
        endpoint: endpoint.to_string(),
        timeout_secs: 5,
    };
    let source = HttpPriceSource::with_config(&config).unwrap();
    let (tx, rx) = mpsc::channel(8);
    (PriceFeedController::new(source, tx), rx)
}

#[tokio::test]
async fn test_ok_response_loads_quotes_verbatim() {
    let responder = Responder::start(200, SNAPSHOT_BODY).await;
    let (controller, mut notifications) = controller_for(&responder);

    let before = Utc::now();
    assert!(controller.initialize().await);

    let state = controller.state();
    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.gold, PriceQuote::new("1,000,000", "+1.2%"));
    assert_eq!(snapshot.tether, PriceQuote::new("60,000", "-0.5%"));
    assert!(state.fetched_at().unwrap() >= before);
    assert!(notifications.try_recv().is_err());

    let board = render(&state, &Utc);
    assert!(board.contains("1,000,000"));
    assert!(board.contains("60,000"));
}

#[tokio::test]
async fn test_unavailable_fails_and_notifies() {
    let responder = Responder::start(503, "").await;
    let (controller, mut notifications) = controller_for(&responder);

    controller.initialize().await;

    assert_eq!(controller.state(), FetchState::Failed);
    assert!(controller.state().snapshot().is_none());
    let notification = notifications.try_recv().unwrap();
    assert!(!notification.is_expired(notification.issued_at));
}

#[tokio::test]
async fn test_server_error_fails_and_notifies() {
    let responder = Responder::start(500, "").await;
    let (controller, mut notifications) = controller_for(&responder);

    controller.initialize().await;

    assert_eq!(controller.state(), FetchState::Failed);
    assert!(notifications.try_recv().is_ok());
    assert!(notifications.try_recv().is_err());
}

#[tokio::test]
async fn test_unreachable_endpoint_fails_and_notifies() {
    // Bind then drop so nothing listens on the port
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (controller, mut notifications) =
        controller_at(&format!("http://{}/api/currency", addr));

    assert!(controller.initialize().await);

    assert_eq!(controller.state(), FetchState::Failed);
    assert!(controller.state().snapshot().is_none());
    let notification = notifications.try_recv().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert!(notifications.try_recv().is_err());
}

#[tokio::test]
async fn test_malformed_body_fails() {
    let responder = Responder::start(200, "not json").await;
    let (controller, mut notifications) = controller_for(&responder);

    controller.initialize().await;

    assert_eq!(controller.state(), FetchState::Failed);
    assert!(notifications.try_recv().is_ok());
}

#[tokio::test]
async fn test_refresh_during_fetch_sends_one_request() {
    let responder = Responder::start_gated(200, SNAPSHOT_BODY).await;
    let (controller, _notifications) = controller_for(&responder);
    let controller = Arc::new(controller);

    let mut states = controller.subscribe();
    let background = controller.clone();
    let handle = tokio::spawn(async move { background.initialize().await });

    states.wait_for(|s| s.is_loading()).await.unwrap();
    assert!(!controller.refresh().await);

    responder.release();
    assert!(handle.await.unwrap());

    assert_eq!(responder.requests().len(), 1);
    assert!(controller.state().snapshot().is_some());
}

#[tokio::test]
async fn test_repeat_fetch_replaces_snapshot() {
    let responder = Responder::start(200, SNAPSHOT_BODY).await;
    let (controller, _notifications) = controller_for(&responder);

    controller.initialize().await;
    let first = controller.state();
    assert!(controller.refresh().await);
    let second = controller.state();

    assert_eq!(first.snapshot(), second.snapshot());
    assert!(second.fetched_at().unwrap() >= first.fetched_at().unwrap());
    assert_eq!(responder.requests().len(), 2);
}

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.feed.timeout_secs, 10);
    assert_eq!(config.notifications.ttl_ms, 4000);
}
