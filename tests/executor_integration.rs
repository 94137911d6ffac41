//! Integration tests for the request executor against a live mock server.
//!
//! These cover the executor's observable contract: header validation gates
//! the network call, Content-Type injection for body-carrying methods,
//! body handling per method, and response normalization.

use api_tester::executor::{RequestExecutor, INVALID_HEADERS_MESSAGE};
use api_tester::models::{HttpMethod, RequestDraft};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn draft(url: String, http_method: HttpMethod) -> RequestDraft {
    RequestDraft {
        url,
        method: http_method,
        headers_text: String::from("{}"),
        body_text: String::from("{}"),
    }
}

#[tokio::test]
async fn post_carries_injected_content_type_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"a":1}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":1}"#))
        .expect(1)
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    let mut draft = draft(format!("{}/echo", server.uri()), HttpMethod::POST);
    draft.body_text = r#"{"a":1}"#.to_string();

    let report = executor.execute(&draft).await;

    assert!(report.was_issued());
    // The JSON response comes back pretty-printed with 2-space indentation.
    assert_eq!(report.display, "{\n  \"a\": 1\n}");
}

#[tokio::test]
async fn post_overrides_user_supplied_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    let mut draft = draft(format!("{}/echo", server.uri()), HttpMethod::POST);
    draft.headers_text = r#"{"Content-Type":"text/xml"}"#.to_string();

    let report = executor.execute(&draft).await;

    assert!(report.was_issued());
    let entry = report.entry.unwrap();
    let content_types: Vec<_> = entry
        .headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .collect();
    assert_eq!(content_types.len(), 1);
    assert_eq!(content_types[0].1, "application/json");
}

#[tokio::test]
async fn put_carries_injected_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/item"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    let report = executor
        .execute(&draft(format!("{}/item", server.uri()), HttpMethod::PUT))
        .await;

    assert!(report.was_issued());
}

#[tokio::test]
async fn get_and_delete_send_no_body() {
    let server = MockServer::start().await;
    Mock::given(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    for http_method in [HttpMethod::GET, HttpMethod::DELETE] {
        let mut draft = draft(format!("{}/data", server.uri()), http_method);
        draft.body_text = r#"{"x":2}"#.to_string();

        let report = executor.execute(&draft).await;
        assert!(report.was_issued());
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert!(
            request.body.is_empty(),
            "{} request must not carry a body",
            request.method
        );
    }
}

#[tokio::test]
async fn user_headers_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .and(header("x-trace", "abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    let mut draft = draft(format!("{}/data", server.uri()), HttpMethod::GET);
    draft.headers_text = r#"{"X-Trace":"abc123"}"#.to_string();

    let report = executor.execute(&draft).await;
    assert!(report.was_issued());
}

#[tokio::test]
async fn invalid_headers_issue_no_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    let mut draft = draft(server.uri(), HttpMethod::GET);
    draft.headers_text = "{bad json".to_string();

    let report = executor.execute(&draft).await;

    assert_eq!(report.display, INVALID_HEADERS_MESSAGE);
    assert!(!report.was_issued());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn http_error_status_is_displayed_and_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    let report = executor
        .execute(&draft(format!("{}/missing", server.uri()), HttpMethod::GET))
        .await;

    // A 4xx is a normal response at this layer, not a failure.
    assert!(report.was_issued());
    assert_eq!(report.display, "not here");
    let response = report.response.unwrap();
    assert_eq!(response.status_code, 404);
    assert!(response.is_client_error());
}

#[tokio::test]
async fn non_json_response_is_passed_through_raw() {
    let server = MockServer::start().await;
    let html = "<html><body>hello</body></html>";
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    let report = executor.execute(&draft(server.uri(), HttpMethod::GET)).await;

    assert_eq!(report.display, html);
}

#[tokio::test]
async fn recorded_entry_reflects_the_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let executor = RequestExecutor::new();
    let mut draft = draft(server.uri(), HttpMethod::POST);
    draft.headers_text = r#"{"X-Trace":"abc"}"#.to_string();
    draft.body_text = r#"{"n":7}"#.to_string();

    let before = chrono::Utc::now();
    let report = executor.execute(&draft).await;
    let after = chrono::Utc::now();

    let entry = report.entry.unwrap();
    assert_eq!(entry.url, server.uri());
    assert_eq!(entry.method, HttpMethod::POST);
    assert_eq!(entry.headers.get("X-Trace").unwrap(), "abc");
    assert_eq!(entry.body, r#"{"n":7}"#);
    assert!(entry.timestamp >= before && entry.timestamp <= after);
}

#[tokio::test]
async fn transport_failure_reports_error_and_records_nothing() {
    let executor = RequestExecutor::new();
    let report = executor
        .execute(&draft("http://127.0.0.1:1".to_string(), HttpMethod::GET))
        .await;

    assert!(report.display.starts_with("Error: "));
    assert!(!report.was_issued());
    assert!(report.response.is_none());
}
