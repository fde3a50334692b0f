//! Common test utilities and fixtures
//!
//! - wiremock for HTTP mocking (isolated, parallel-safe)
//! - rstest for parameterized cases
//! - #[tokio::test] for async testing

#![allow(dead_code)]

use alertwire::Client;
use wiremock::MockServer;

/// Build a client pointed at the given mock server.
pub fn client_for(mock_server: &MockServer) -> Client {
    Client::builder()
        .api_token("test-token")
        .base_url(mock_server.uri())
        .build()
        .unwrap()
}

/// A created/fetched org token.
pub fn token_response() -> serde_json::Value {
    serde_json::json!({
        "name": "svc-a",
        "id": "t-1",
        "secret": "sw-secret",
        "disabled": false,
        "created": 1700000000000i64,
        "creator": "AAXYZ"
    })
}

/// One page of token search results.
pub fn token_search_response() -> serde_json::Value {
    serde_json::json!({
        "count": 2,
        "results": [
            { "name": "svc-a", "id": "t-1" },
            { "name": "svc-b", "id": "t-2" }
        ]
    })
}

/// A created/fetched detector.
pub fn detector_response() -> serde_json::Value {
    serde_json::json!({
        "id": "d-1",
        "name": "cpu too high",
        "programText": "detect(when(data('cpu') > 90)).publish('high')",
        "packageSpecifications": "",
        "rules": [
            {
                "detectLabel": "high",
                "severity": "Critical",
                "notifications": [
                    { "type": "Email", "email": "oncall@example.com" }
                ]
            }
        ]
    })
}

/// One page of detector search results.
pub fn detector_search_response() -> serde_json::Value {
    serde_json::json!({
        "count": 1,
        "results": [
            {
                "id": "d-1",
                "name": "cpu too high",
                "packageSpecifications": ""
            }
        ]
    })
}

/// The service's standard not-found error body.
pub fn error_not_found() -> serde_json::Value {
    serde_json::json!({ "message": "not found" })
}
