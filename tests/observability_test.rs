mod support;

use pdf_expert::CannedExtractor;
use serde_json::Value;
use support::spawn_server;

#[tokio::test]
async fn test_metrics_count_requests_and_errors() {
    let server = spawn_server(CannedExtractor::text("one two three")).await;

    assert_eq!(server.upload("ok.pdf", b"%PDF".to_vec()).await.status(), 200);
    assert_eq!(server.upload("empty.pdf", Vec::new()).await.status(), 400);

    let metrics = &server.state.metrics;
    assert_eq!(metrics.requests_total("POST", "/analyze"), 2);
    assert_eq!(metrics.errors_total("POST", "/analyze", 400), 1);

    let response = server.client.get(server.url("/metrics")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let text = response.text().await.unwrap();
    assert!(text.contains("http_requests_total{method=\"POST\",path=\"/analyze\"} 2"));
    assert!(text.contains("http_error_total{method=\"POST\",path=\"/analyze\",status=\"400\"} 1"));
    assert!(text.contains("http_request_duration_seconds_count{method=\"POST\",path=\"/analyze\"} 2"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found_envelope() {
    let server = spawn_server(CannedExtractor::text("unused")).await;

    let response = server
        .client
        .get(server.url("/nope"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert!(response.headers().contains_key("x-request-id"));
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "route not found");
}

#[tokio::test]
async fn test_get_analyze_is_method_not_allowed() {
    let server = spawn_server(CannedExtractor::text("unused")).await;

    let response = server
        .client
        .get(server.url("/analyze"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 405);
    let header_id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Use POST /analyze");
    assert_eq!(body["request_id"], header_id.as_str());
    assert!(!header_id.is_empty());
}

#[tokio::test]
async fn test_other_methods_on_analyze_get_envelope() {
    let server = spawn_server(CannedExtractor::text("unused")).await;

    for response in [
        server.client.put(server.url("/analyze")).send().await.unwrap(),
        server.client.delete(server.url("/analyze")).send().await.unwrap(),
    ] {
        assert_eq!(response.status(), 405);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Use POST /analyze");
    }
    assert_eq!(server.state.service.extractor().calls(), 0);
}

#[tokio::test]
async fn test_docs_endpoints() {
    let server = spawn_server(CannedExtractor::text("unused")).await;

    let page = server.client.get(server.url("/docs")).send().await.unwrap();
    assert_eq!(page.status(), 200);
    assert!(page.text().await.unwrap().contains("/docs/openapi.json"));

    let index = server
        .client
        .get(server.url("/docs/index.html"))
        .send()
        .await
        .unwrap();
    assert_eq!(index.status(), 200);

    let openapi: Value = server
        .client
        .get(server.url("/docs/openapi.json"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(openapi["info"]["title"], "pdf-expert");
    assert!(openapi["paths"]["/analyze"]["post"]["requestBody"].is_object());
}

#[tokio::test]
async fn test_health() {
    let server = spawn_server(CannedExtractor::text("unused")).await;

    let body: Value = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["data"]["uptime_seconds"].as_i64().unwrap() >= 0);
    assert!(body["data"]["started_at"].as_str().is_some());
}
