//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: BatchFetcher → HttpTransport → HTTP
//! requests against wiremock, including the multi-page fan-out.

use pagekit::{BatchFetcher, Error, Filter, HttpTransport, HttpTransportConfig};
use serde::Deserialize;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Ticket {
    id: u64,
    status: String,
}

fn page_body(ids: std::ops::Range<u64>, total: u64) -> Value {
    let data: Vec<Value> = ids.map(|id| json!({"id": id, "status": "open"})).collect();
    json!({"data": data, "totalCount": total})
}

fn fetcher_for(server: &MockServer) -> BatchFetcher<HttpTransport> {
    let config = HttpTransportConfig::builder().base_url(server.uri()).build();
    BatchFetcher::new(HttpTransport::with_config(config))
}

#[tokio::test]
async fn test_fetch_all_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("limit", "20"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..5, 5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server);
    let tickets: Vec<Ticket> = fetcher.fetch_all("/api/tickets", None).await.unwrap();

    assert_eq!(tickets.len(), 5);
    assert_eq!(tickets[0], Ticket { id: 0, status: "open".to_string() });
}

#[tokio::test]
async fn test_fetch_all_fans_out_across_pages() {
    let mock_server = MockServer::start().await;

    // 45 records over three pages of 20.
    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..20, 45)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(20..40, 45)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(40..45, 45)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server);
    let tickets: Vec<Ticket> = fetcher.fetch_all("/api/tickets", None).await.unwrap();

    assert_eq!(tickets.len(), 45);
    // Page order is preserved in the aggregate.
    let ids: Vec<u64> = tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, (0..45).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_fetch_all_sends_filter_on_every_page() {
    let mock_server = MockServer::start().await;
    let filter_json = r#"{"status":"open"}"#;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "1"))
        .and(query_param("filter", filter_json))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..20, 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "2"))
        .and(query_param("filter", filter_json))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(20..25, 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter: Filter = match json!({"status": "open"}) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };

    let fetcher = fetcher_for(&mock_server);
    let tickets: Vec<Ticket> = fetcher
        .fetch_all("/api/tickets", Some(&filter))
        .await
        .unwrap();

    assert_eq!(tickets.len(), 25);
}

#[tokio::test]
async fn test_fetch_all_normalizes_first_page_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "unauthorized"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server);
    let result: Result<Vec<Ticket>, Error> = fetcher.fetch_all("/api/tickets", None).await;

    let err = result.unwrap_err();
    assert_eq!(err.body(), Some(&json!({"message": "unauthorized"})));
}

#[tokio::test]
async fn test_fetch_all_rejects_on_extra_page_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..20, 50)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(20..40, 50)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "server exploded"})),
        )
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server);
    let result: Result<Vec<Ticket>, Error> = fetcher.fetch_all("/api/tickets", None).await;

    // No partial data even though pages 1 and 2 succeeded.
    let err = result.unwrap_err();
    assert_eq!(err.body(), Some(&json!({"message": "server exploded"})));
}
