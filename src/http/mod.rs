//! HTTP exchange layer
//!
//! This module provides the transport core every resource operation is built
//! from: a request builder that issues exactly one round trip, and a
//! fully-buffered response with status validation helpers.

pub use request::RequestBuilder;
pub use response::Response;

mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
