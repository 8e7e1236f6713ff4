//! Integration tests for `HttpFactSource` against a mock upstream.

use std::time::Duration;

use domain::FactOutcome;
use fact_client::{FactSource, HttpFactSource};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const TIMEOUT: Duration = Duration::from_millis(300);

async fn source_for(server: &MockServer) -> HttpFactSource {
    HttpFactSource::new(format!("{}/fact", server.uri()), TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_fetch_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fact": "Cats sleep 70% of their lives.",
            "length": 30
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = source_for(&server).await.fetch().await;

    assert_eq!(
        outcome,
        FactOutcome::Found("Cats sleep 70% of their lives.".to_string())
    );
}

#[tokio::test]
async fn test_fetch_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "fact": "too late" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let started = std::time::Instant::now();
    let outcome = source.fetch().await;

    assert_eq!(outcome, FactOutcome::TimedOut);
    assert_eq!(outcome.into_fact(), "Cat fact temporarily unavailable");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_fetch_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "fact": "ignored on error status"
        })))
        .mount(&server)
        .await;

    let outcome = source_for(&server).await.fetch().await;

    assert_eq!(outcome, FactOutcome::Unavailable);
    assert_eq!(outcome.into_fact(), "Cat fact unavailable");
}

#[tokio::test]
async fn test_fetch_not_found() {
    let server = MockServer::start().await;

    let outcome = source_for(&server).await.fetch().await;

    assert_eq!(outcome, FactOutcome::Unavailable);
}

#[tokio::test]
async fn test_fetch_missing_fact_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "length": 0 })))
        .mount(&server)
        .await;

    let outcome = source_for(&server).await.fetch().await;

    assert_eq!(outcome, FactOutcome::Missing);
    assert_eq!(outcome.into_fact(), "No fact available");
}

#[tokio::test]
async fn test_fetch_invalid_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let outcome = source_for(&server).await.fetch().await;

    assert_eq!(outcome, FactOutcome::Unavailable);
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpFactSource::new(format!("http://{addr}/fact"), TIMEOUT).unwrap();
    let outcome = source.fetch().await;

    assert_eq!(outcome, FactOutcome::Unavailable);
}

#[tokio::test]
async fn test_fetch_makes_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = source_for(&server).await.fetch().await;

    assert_eq!(outcome, FactOutcome::Unavailable);
    server.verify().await;
}
