//! HTTP request builder

use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use url::Url;

use super::Response;
use crate::error::{Error, Result};

/// Builder for a single HTTP exchange.
///
/// Wraps one request against the configured base endpoint. Sending performs
/// exactly one round trip: there is no retry, backoff, or batching. The
/// response body is read to completion before [`Response`] is returned, so
/// the underlying connection is always drained and released regardless of
/// what the caller does next.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Duration,
    pub(crate) http_client: Option<reqwest::Client>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: Duration::from_secs(60),
            http_client: None,
        }
    }

    /// Set the HTTP client to use
    pub(crate) fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a header.
    ///
    /// # Panics
    ///
    /// Panics if the header name or value is invalid according to HTTP
    /// specifications.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key
            .into()
            .parse::<HeaderName>()
            .expect("invalid HTTP header name: header names must be valid HTTP identifiers");
        let value = value
            .into()
            .parse::<HeaderValue>()
            .expect("invalid HTTP header value: header values must be valid ASCII strings");
        self.headers.insert(key, value);
        self
    }

    /// Append a query parameter, percent-escaping the key and value.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    /// Set the request body to the JSON serialization of `payload`.
    ///
    /// Serialization happens here, before any network activity; a payload
    /// that cannot be represented as JSON fails with
    /// [`Error::Serialization`] without a request ever being sent.
    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        let body = serde_json::to_vec(payload).map_err(Error::Serialization)?;
        self.body = Some(body);
        Ok(self)
    }

    /// Set the request body to raw, already-serialized bytes.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the request and get a response.
    ///
    /// Issues exactly one round trip. Transport failures (connection refused,
    /// timeout) are returned without inspecting any status code; status
    /// validation is the caller's next step via [`Response::parse`] or
    /// [`Response::expect_status`]. The body is fully buffered into the
    /// returned [`Response`], success and failure alike.
    pub async fn send(self) -> Result<Response> {
        let client = self
            .http_client
            .ok_or_else(|| Error::HttpClient("no HTTP client configured".to_string()))?;

        let mut req = client
            .request(self.method.clone(), self.url.as_str())
            .timeout(self.timeout);

        for (key, value) in &self.headers {
            req = req.header(key, value);
        }

        if let Some(body) = self.body {
            req = req.body(body);
        }

        tracing::debug!(method = %self.method, url = %self.url, "sending request");

        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                let headers = resp.headers().clone();
                let body = resp
                    .bytes()
                    .await
                    .map_err(|e| Error::Connection(e.to_string()))?
                    .to_vec();

                tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

                Ok(Response::new(status, headers, body))
            }
            Err(e) if e.is_timeout() => Err(Error::Timeout(self.timeout)),
            Err(e) => Err(Error::Connection(e.to_string())),
        }
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }
}
