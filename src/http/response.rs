//! HTTP response handling

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Fully-buffered HTTP response.
///
/// The transport core reads the body to completion before constructing this
/// type, so dropping a `Response` never leaks an unread body.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body as text. Invalid UTF-8 is replaced rather than rejected,
    /// since this is used for diagnostics.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::Deserialization)
    }

    /// Validate the status code against the single expected code for the
    /// operation.
    ///
    /// Any mismatch is a failure carrying the actual status and the raw body
    /// text verbatim. Used directly for operations with no response payload
    /// (delete, enable, disable).
    pub fn expect_status(self, expected: StatusCode) -> Result<Self> {
        if self.status != expected {
            return Err(Error::UnexpectedStatus {
                status: self.status.as_u16(),
                body: self.text(),
            });
        }
        Ok(self)
    }

    /// Validate the status code, then decode the body into `T`.
    ///
    /// This is the shared tail of every resource operation that returns a
    /// payload: one expected status, any other status is an
    /// [`Error::UnexpectedStatus`], and a body that does not match the
    /// declared shape is an [`Error::Deserialization`].
    pub fn parse<T: DeserializeOwned>(self, expected: StatusCode) -> Result<T> {
        self.expect_status(expected)?.json()
    }
}
