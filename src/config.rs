//! Configuration for the Alertwire client

use std::time::Duration;

use http::HeaderMap;
use secrecy::SecretString;

/// Configuration for the Alertwire client.
///
/// Holds everything that is fixed for the lifetime of a [`crate::Client`]:
/// credentials, base URL, timeout, and extra headers. The configuration is
/// read-only after the client is built and safe to share across concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token for authentication
    pub api_token: Option<SecretString>,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Timeout applied to every request
    pub timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: None,
            timeout: Duration::from_secs(60),
            default_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an API token.
    pub fn with_api_token(api_token: impl Into<String>) -> Self {
        Self {
            api_token: Some(SecretString::new(api_token.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `ALERTWIRE_API_TOKEN` for authentication
    /// - `ALERTWIRE_BASE_URL` for the API base URL
    /// - `ALERTWIRE_TIMEOUT` for request timeout (in seconds, must be a valid u64)
    ///
    /// A `.env` file in the working directory is honored if present.
    ///
    /// # Errors
    ///
    /// Returns an error if `ALERTWIRE_TIMEOUT` is set but is not a valid
    /// number of seconds.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(api_token) = env::var("ALERTWIRE_API_TOKEN") {
            config.api_token = Some(SecretString::new(api_token.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("ALERTWIRE_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(timeout_str) = env::var("ALERTWIRE_TIMEOUT") {
            let timeout_secs = timeout_str.parse::<u64>().map_err(|_| {
                crate::error::Error::HttpClient(format!(
                    "ALERTWIRE_TIMEOUT must be a valid number of seconds, got: '{}'",
                    timeout_str
                ))
            })?;
            config.timeout = Duration::from_secs(timeout_secs);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.api_token.is_some() {
            self.api_token = other.api_token;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout != Duration::from_secs(60) {
            self.timeout = other.timeout;
        }
        if !other.default_headers.is_empty() {
            for (key, value) in other.default_headers.iter() {
                self.default_headers.insert(key.clone(), value.clone());
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.api_token.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_config_with_api_token() {
        let config = ClientConfig::with_api_token("test-token");
        assert!(config.api_token.is_some());
    }

    #[test]
    fn test_config_merge() {
        let config1 = ClientConfig::with_api_token("token1");
        let config2 = ClientConfig {
            base_url: Some("https://example.com".to_string()),
            timeout: Duration::from_secs(30),
            ..Default::default()
        };

        let merged = config1.merge(config2);
        assert!(merged.api_token.is_some());
        assert_eq!(merged.base_url, Some("https://example.com".to_string()));
        assert_eq!(merged.timeout, Duration::from_secs(30));
    }
}
