//! # Alertwire Rust client
//!
//! A typed, idiomatic Rust client for the Alertwire monitoring platform's
//! REST API. The crate covers org tokens and detectors: each operation
//! serializes a typed request, issues a single HTTP round trip against a
//! fixed path template, validates the status code, and deserializes the
//! typed response.
//!
//! The client performs no retries, rate limiting, or pagination on its own;
//! every exposed method corresponds to exactly one network round trip.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use alertwire::{Client, CreateUpdateTokenRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .api_token("sw-...")
//!         .build()?;
//!
//!     let token = client.tokens()
//!         .create(&CreateUpdateTokenRequest {
//!             name: Some("svc-a".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("created token {:?}", token.id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use resources::{Detectors, Tokens};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// ```rust
/// use alertwire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        types::{
            CreateUpdateDetectorRequest, CreateUpdateTokenRequest, Detector,
            DetectorSearchResults, Rule, Severity, Token, TokenSearchResults,
        },
        Client, ClientConfig, Error, Result,
    };
}

/// Client version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.alertwire.io";

/// Header carrying the API token on every request
pub const AUTH_HEADER: &str = "x-api-token";
