//! Detector API endpoints

use http::{Method, StatusCode};

use crate::{
    client::Client,
    error::Result,
    types::{CreateUpdateDetectorRequest, Detector, DetectorSearchResults},
};

/// Detector API resource, rooted under `/v2/detector`.
#[derive(Clone)]
pub struct Detectors {
    client: Client,
}

impl Detectors {
    /// Create a new Detectors resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a detector. Expects `200 OK`.
    pub async fn create(&self, request: &CreateUpdateDetectorRequest) -> Result<Detector> {
        self.client
            .request(Method::POST, &["v2", "detector"])
            .json(request)?
            .send()
            .await?
            .parse(StatusCode::OK)
    }

    /// Get a detector by ID. Expects `200 OK`.
    pub async fn get(&self, id: &str) -> Result<Detector> {
        self.client
            .request(Method::GET, &["v2", "detector", id])
            .send()
            .await?
            .parse(StatusCode::OK)
    }

    /// Update a detector by ID. Expects `200 OK`.
    pub async fn update(
        &self,
        id: &str,
        request: &CreateUpdateDetectorRequest,
    ) -> Result<Detector> {
        self.client
            .request(Method::PUT, &["v2", "detector", id])
            .json(request)?
            .send()
            .await?
            .parse(StatusCode::OK)
    }

    /// Delete a detector by ID. Expects `204 No Content`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .request(Method::DELETE, &["v2", "detector", id])
            .send()
            .await?
            .expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }

    /// Enable a detector's alerting. Expects `204 No Content`.
    pub async fn enable(&self, id: &str) -> Result<()> {
        self.client
            .request(Method::PUT, &["v2", "detector", id, "enable"])
            .send()
            .await?
            .expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }

    /// Disable a detector's alerting. Expects `204 No Content`.
    pub async fn disable(&self, id: &str) -> Result<()> {
        self.client
            .request(Method::PUT, &["v2", "detector", id, "disable"])
            .send()
            .await?
            .expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }

    /// Search detectors by name substring and tag. Expects `200 OK`.
    ///
    /// Returns exactly one page of results; iterating pages via `offset` is
    /// the caller's responsibility.
    pub async fn search(
        &self,
        limit: i32,
        name: &str,
        offset: i32,
        tags: &str,
    ) -> Result<DetectorSearchResults> {
        self.client
            .request(Method::GET, &["v2", "detector"])
            .query("limit", &limit.to_string())
            .query("name", name)
            .query("offset", &offset.to_string())
            .query("tags", tags)
            .send()
            .await?
            .parse(StatusCode::OK)
    }
}
