// Fetch module tests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::InspectorSettings;
use crate::initialization::init_client;

const TIMEOUT: Duration = Duration::from_secs(5);
const MAX_BODY: usize = 1024 * 1024;

fn test_client() -> reqwest::Client {
    init_client(&InspectorSettings::default()).expect("client should build")
}

fn add_header(headers: &mut HeaderMap, name: &str, value: &str) {
    // In tests, we use known-good header names and values
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .unwrap_or_else(|_| panic!("Invalid header name in test: {}", name));
    let header_value = HeaderValue::from_str(value)
        .unwrap_or_else(|_| panic!("Invalid header value in test: {}", value));
    headers.append(header_name, header_value);
}

#[test]
fn test_flatten_headers_lowercases_names() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "Content-Type", "text/html");
    add_header(&mut headers, "X-Robots-Tag", "noindex");

    let flat = flatten_headers(&headers);
    assert_eq!(flat.get("content-type").map(String::as_str), Some("text/html"));
    assert_eq!(flat.get("x-robots-tag").map(String::as_str), Some("noindex"));
    assert_eq!(flat.len(), 2);
}

#[test]
fn test_flatten_headers_joins_repeated_values() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "Set-Cookie", "a=1");
    add_header(&mut headers, "Set-Cookie", "b=2");

    let flat = flatten_headers(&headers);
    assert_eq!(flat.get("set-cookie").map(String::as_str), Some("a=1, b=2"));
}

#[test]
fn test_flatten_headers_empty() {
    assert!(flatten_headers(&HeaderMap::new()).is_empty());
}

#[test]
fn test_fetch_result_helpers() {
    let mut headers = std::collections::BTreeMap::new();
    headers.insert("content-type".to_string(), "text/html".to_string());
    let result = FetchResult {
        status_code: 200,
        final_url: "https://example.com/".into(),
        redirect_chain: vec![],
        headers,
        body: vec![],
        elapsed: Duration::from_micros(123_456),
    };
    assert!(!result.redirected());
    assert_eq!(result.header("Content-Type"), Some("text/html"));
    assert_eq!(result.header("x-missing"), None);
    assert_eq!(result.response_time_secs(), 0.123);
}

#[tokio::test]
async fn test_fetch_plain_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html></html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let result = fetch_resource(&test_client(), &url, TIMEOUT, MAX_BODY)
        .await
        .expect("fetch should succeed");

    assert_eq!(result.status_code, 200);
    assert_eq!(result.final_url, url);
    assert!(result.redirect_chain.is_empty());
    assert!(!result.redirected());
    assert_eq!(result.body, b"<html></html>");
    assert_eq!(
        result.header("content-type"),
        Some("text/html; charset=utf-8")
    );
}

#[tokio::test]
async fn test_fetch_sends_browser_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("sec-fetch-mode", "navigate"))
        .and(header("upgrade-insecure-requests", "1"))
        .and(header_exists("user-agent"))
        .and(header_exists("accept-language"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let result = fetch_resource(&test_client(), &url, TIMEOUT, MAX_BODY)
        .await
        .expect("fetch should succeed");
    // Unmatched requests get wiremock's default 404
    assert_eq!(result.status_code, 200);
}

#[tokio::test]
async fn test_error_status_is_not_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let result = fetch_resource(&test_client(), &url, TIMEOUT, MAX_BODY)
        .await
        .expect("404 is still a response");
    assert_eq!(result.status_code, 404);
    assert_eq!(result.body, b"not here");
}

#[tokio::test]
async fn test_redirect_chain_is_recorded_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", format!("{}/b", server.uri())),
        )
        .mount(&server)
        .await;
    // Relative location, resolved against /b
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/c"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200).set_body_string("done"))
        .mount(&server)
        .await;

    let start = format!("{}/a", server.uri());
    let result = fetch_resource(&test_client(), &start, TIMEOUT, MAX_BODY)
        .await
        .expect("redirects should be followed");

    assert_eq!(result.status_code, 200);
    assert!(result.redirected());
    assert_eq!(
        result.redirect_chain,
        vec![format!("{}/a", server.uri()), format!("{}/b", server.uri())]
    );
    assert_eq!(result.final_url, format!("{}/c", server.uri()));
    assert_eq!(result.body, b"done");
}

#[tokio::test]
async fn test_redirect_without_location_is_final() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(302))
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let result = fetch_resource(&test_client(), &url, TIMEOUT, MAX_BODY)
        .await
        .expect("redirect without Location is returned as-is");
    assert_eq!(result.status_code, 302);
    assert!(result.redirect_chain.is_empty());
}

#[tokio::test]
async fn test_redirect_loop_is_too_many_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/loop"))
        .mount(&server)
        .await;

    let url = format!("{}/loop", server.uri());
    let err = fetch_resource(&test_client(), &url, TIMEOUT, MAX_BODY)
        .await
        .expect_err("a redirect loop must not succeed");
    assert_eq!(err.kind, FetchErrorKind::TooManyRedirects);
    assert!(err.message.contains("too many redirects"));
}

#[tokio::test]
async fn test_body_over_limit_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'a'; 4096]))
        .mount(&server)
        .await;

    let url = format!("{}/big", server.uri());
    let err = fetch_resource(&test_client(), &url, TIMEOUT, 1024)
        .await
        .expect_err("body is larger than the limit");
    assert_eq!(err.kind, FetchErrorKind::BodyTooLarge);

    let ok = fetch_resource(&test_client(), &url, TIMEOUT, 4096)
        .await
        .expect("body exactly at the limit is accepted");
    assert_eq!(ok.body.len(), 4096);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let url = format!("{}/slow", server.uri());
    let err = fetch_resource(&test_client(), &url, Duration::from_millis(200), MAX_BODY)
        .await
        .expect_err("response arrives after the timeout");
    assert_eq!(err.kind, FetchErrorKind::Timeout);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let url = format!("http://127.0.0.1:{port}/");
    let err = fetch_resource(&test_client(), &url, TIMEOUT, MAX_BODY)
        .await
        .expect_err("nothing listens on the port");
    assert_eq!(err.kind, FetchErrorKind::Connect);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn test_unparseable_url_is_builder_error() {
    let err = fetch_resource(&test_client(), "https://bad host/", TIMEOUT, MAX_BODY)
        .await
        .expect_err("URL with a space in the host cannot be fetched");
    assert_eq!(err.kind, FetchErrorKind::Builder);
}
