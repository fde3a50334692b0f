//! Org token API tests
//!
//! Exercises the token operations against a wiremock server: happy paths,
//! status validation, path escaping, and query encoding.

use alertwire::Error;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{client_for, error_not_found, token_response, token_search_response};

#[tokio::test]
async fn test_create_token() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({ "name": "svc-a" });
    Mock::given(method("POST"))
        .and(path("/v2/token"))
        .and(header("x-api-token", "test-token"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let token = client
        .tokens()
        .create(&alertwire::CreateUpdateTokenRequest {
            name: Some("svc-a".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(token.name.as_deref(), Some("svc-a"));
    assert_eq!(token.id.as_deref(), Some("t-1"));
}

#[tokio::test]
async fn test_get_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/token/svc-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let token = client.tokens().get("svc-a").await.unwrap();

    assert_eq!(token.id.as_deref(), Some("t-1"));
    assert_eq!(token.secret.as_deref(), Some("sw-secret"));
}

#[tokio::test]
async fn test_get_token_escapes_reserved_characters() {
    let mock_server = MockServer::start().await;

    // Catch-all mock so the request is recorded regardless of path.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.tokens().get("svc a/b").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/v2/token/svc%20a%2Fb");
}

#[tokio::test]
async fn test_update_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2/token/svc-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let token = client
        .tokens()
        .update(
            "svc-a",
            &alertwire::CreateUpdateTokenRequest {
                name: Some("svc-a".into()),
                disabled: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(token.name.as_deref(), Some("svc-a"));
}

#[tokio::test]
async fn test_delete_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/token/svc-a"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.tokens().delete("svc-a").await.is_ok());
}

#[tokio::test]
async fn test_delete_token_not_found_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/token/svc-a"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_not_found()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.tokens().delete("svc-a").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    let text = err.to_string();
    assert!(text.contains("404"), "error text was: {text}");
    assert!(text.contains("not found"), "error text was: {text}");
}

#[tokio::test]
async fn test_search_tokens_builds_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/token"))
        .and(query_param("limit", "10"))
        .and(query_param("name", "svc"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_search_response()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.tokens().search(10, "svc", 0).await.unwrap();

    assert_eq!(results.count, Some(2));
    assert_eq!(results.results.len(), 2);
    assert_eq!(results.results[0].name.as_deref(), Some("svc-a"));
}

#[tokio::test]
async fn test_search_tokens_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "count": 0 })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results = client.tokens().search(10, "nope", 0).await.unwrap();

    assert_eq!(results.count, Some(0));
    assert!(results.results.is_empty());
}

#[tokio::test]
async fn test_search_tokens_rejects_unexpected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/token"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.tokens().search(10, "svc", 0).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("upstream down"));
}

#[tokio::test]
async fn test_get_token_malformed_body_is_deserialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/token/svc-a"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.tokens().get("svc-a").await.unwrap_err();
    assert!(matches!(err, Error::Deserialization(_)));
}
