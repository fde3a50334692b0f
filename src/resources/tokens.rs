//! Org token API endpoints

use http::{Method, StatusCode};

use crate::{
    client::Client,
    error::Result,
    types::{CreateUpdateTokenRequest, Token, TokenSearchResults},
};

/// Org token API resource, rooted under `/v2/token`.
#[derive(Clone)]
pub struct Tokens {
    client: Client,
}

impl Tokens {
    /// Create a new Tokens resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create an org token. Expects `200 OK`.
    pub async fn create(&self, request: &CreateUpdateTokenRequest) -> Result<Token> {
        self.client
            .request(Method::POST, &["v2", "token"])
            .json(request)?
            .send()
            .await?
            .parse(StatusCode::OK)
    }

    /// Get a token by name. Expects `200 OK`.
    ///
    /// The name is percent-escaped, so names containing reserved URL
    /// characters are routed correctly.
    pub async fn get(&self, name: &str) -> Result<Token> {
        self.client
            .request(Method::GET, &["v2", "token", name])
            .send()
            .await?
            .parse(StatusCode::OK)
    }

    /// Update a token by name. Expects `200 OK`.
    pub async fn update(&self, name: &str, request: &CreateUpdateTokenRequest) -> Result<Token> {
        self.client
            .request(Method::PUT, &["v2", "token", name])
            .json(request)?
            .send()
            .await?
            .parse(StatusCode::OK)
    }

    /// Delete a token by name. Expects `204 No Content`.
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.client
            .request(Method::DELETE, &["v2", "token", name])
            .send()
            .await?
            .expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }

    /// Search tokens by name substring. Expects `200 OK`.
    ///
    /// Returns exactly one page of results; iterating pages via `offset` is
    /// the caller's responsibility.
    pub async fn search(
        &self,
        limit: i32,
        name: &str,
        offset: i32,
    ) -> Result<TokenSearchResults> {
        self.client
            .request(Method::GET, &["v2", "token"])
            .query("limit", &limit.to_string())
            .query("name", name)
            .query("offset", &offset.to_string())
            .send()
            .await?
            .parse(StatusCode::OK)
    }
}
