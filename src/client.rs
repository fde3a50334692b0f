//! Main client implementation for the Alertwire API

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use http::Method;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::RequestBuilder,
    resources::{Detectors, Tokens},
    AUTH_HEADER, DEFAULT_BASE_URL,
};

/// Main client for interacting with the Alertwire API.
///
/// The client owns the immutable transport configuration (base URL, auth
/// token, timeout) and hands out resource accessors. It is cheap to clone
/// and safe for concurrent reuse: no mutable state is shared between calls.
///
/// # Example
///
/// ```rust,no_run
/// use alertwire::Client;
///
/// let client = Client::new("sw-...");
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// HTTP client for making requests
    http_client: reqwest::Client,
    /// Base URL for the API
    base_url: Url,
    /// API token for authentication
    api_token: SecretString,
    /// Default timeout for requests
    timeout: Duration,
    /// Custom headers to include with every request
    default_headers: http::HeaderMap,

    // Lazy-initialized resources
    tokens: OnceLock<Tokens>,
    detectors: OnceLock<Detectors>,
}

impl Client {
    /// Create a new client with an API token against the default endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built. Use [`Client::builder`] to
    /// handle construction errors.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::builder()
            .api_token(api_token)
            .build()
            .expect("failed to build client with provided API token")
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("alertwire-rust/{}", crate::VERSION))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        let base_url_string = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if base_url_string.trim().is_empty() {
            return Err(Error::InvalidUrl("base URL cannot be empty".to_string()));
        }

        let base_url: Url = base_url_string
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{}", e)))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "invalid URL scheme '{}': only 'http' and 'https' are supported",
                    scheme
                )))
            }
        }

        let api_token = config.api_token.ok_or_else(|| {
            Error::Authentication(
                "no API token provided; set one on the builder or via ALERTWIRE_API_TOKEN"
                    .to_string(),
            )
        })?;

        let inner = Arc::new(ClientInner {
            http_client,
            base_url,
            api_token,
            timeout: config.timeout,
            default_headers: config.default_headers,
            tokens: OnceLock::new(),
            detectors: OnceLock::new(),
        });

        Ok(Self { inner })
    }

    /// Access the org-token API endpoints.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use alertwire::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("api-token");
    /// let token = client.tokens().get("svc-a").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn tokens(&self) -> &Tokens {
        self.inner.tokens.get_or_init(|| Tokens::new(self.clone()))
    }

    /// Access the detector API endpoints.
    pub fn detectors(&self) -> &Detectors {
        self.inner
            .detectors
            .get_or_init(|| Detectors::new(self.clone()))
    }

    /// Create a request builder for the given method and path segments.
    ///
    /// Each segment is pushed through the URL path machinery individually,
    /// so identifiers containing reserved characters (slashes, spaces) are
    /// percent-escaped and cannot corrupt routing.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let mut url = self.inner.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("base URL was validated as http(s) at construction");
            path.pop_if_empty();
            path.extend(segments);
        }

        let mut builder = RequestBuilder::new(method, url)
            .with_client(self.inner.http_client.clone())
            .timeout(self.inner.timeout)
            .header("content-type", "application/json")
            .header(AUTH_HEADER, self.inner.api_token.expose_secret());

        for (key, value) in &self.inner.default_headers {
            builder = builder.header(key.as_str(), value.to_str().unwrap_or(""));
        }

        builder
    }

    /// Get the base URL for the API
    #[allow(dead_code)]
    pub(crate) fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }
}

/// Builder for creating a configured [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the API token for authentication.
    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.config.api_token = Some(SecretString::new(api_token.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the default timeout for requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a custom default header.
    ///
    /// # Panics
    ///
    /// Panics if the header name or value is invalid.
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key: http::HeaderName = key.into().parse().expect("invalid header name");
        let value: http::HeaderValue = value.into().parse().expect("invalid header value");
        self.config.default_headers.insert(key, value);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .api_token("test-token")
            .base_url("https://example.com")
            .timeout(Duration::from_secs(30))
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_client_requires_token() {
        let result = Client::builder().base_url("https://example.com").build();
        assert!(matches!(result, Err(Error::Authentication(_))));
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        let result = Client::builder().api_token("t").base_url("   ").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));

        let result = Client::builder()
            .api_token("t")
            .base_url("ftp://example.com")
            .build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_request_escapes_path_segments() {
        let client = Client::builder()
            .api_token("t")
            .base_url("https://example.com")
            .build()
            .unwrap();

        let builder = client.request(Method::GET, &["v2", "token", "svc a/b"]);
        assert_eq!(builder.url().path(), "/v2/token/svc%20a%2Fb");
    }

    #[test]
    fn test_request_preserves_base_path_prefix() {
        let client = Client::builder()
            .api_token("t")
            .base_url("https://example.com/proxy/")
            .build()
            .unwrap();

        let builder = client.request(Method::GET, &["v2", "token"]);
        assert_eq!(builder.url().path(), "/proxy/v2/token");
        assert_eq!(client.base_url(), "https://example.com/proxy/");
    }

    #[test]
    fn test_client_clone_shares_resources() {
        let client1 = Client::new("test-token");
        let client2 = client1.clone();

        let _ = client1.tokens();
        let _ = client2.detectors();
    }
}
