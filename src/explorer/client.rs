//! Explorer HTTP Client
//!
//! Handles communication with the VCP explorer API. All responses are
//! untrusted; the caller is expected to verify any proof locally
//! through the proof engine rather than believe the server.

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info};

use crate::error::VcpError;
use crate::explorer::types::{EventListResponse, ProofResponse, SystemStatus, VcpEvent};

pub struct ExplorerClient {
    api_base: String,
    api_key: Option<String>,
    http_client: Client,
}

impl ExplorerClient {
    /// Create a new client. `api_key` is attached as a bearer token on
    /// authenticated endpoints; status queries work without one.
    pub fn new(api_base: String, api_key: Option<String>) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            http_client: Client::new(),
        }
    }

    /// Fetch system status. No authentication required.
    pub async fn system_status(&self) -> Result<SystemStatus, VcpError> {
        let url = format!("{}/system/status", self.api_base);
        debug!("Fetching system status from {}", url);

        let response = self.http_client.get(&url).send().await?;
        let response = self.check_status(response, "system status").await?;

        Ok(response.json().await?)
    }

    /// List the most recent events, newest first.
    pub async fn list_events(&self, limit: usize) -> Result<Vec<VcpEvent>, VcpError> {
        let url = format!("{}/events", self.api_base);
        debug!("Listing up to {} events from {}", limit, url);

        let request = self
            .http_client
            .get(&url)
            .query(&[("limit", limit.to_string())]);
        let response = self.authorize(request).send().await?;
        let response = self.check_status(response, "event list").await?;

        let list: EventListResponse = response.json().await?;
        info!("Fetched {} events", list.events.len());
        Ok(list.events)
    }

    /// Fetch the Merkle inclusion proof for one event.
    pub async fn fetch_proof(&self, event_id: &str) -> Result<ProofResponse, VcpError> {
        let url = format!("{}/events/{}/proof", self.api_base, event_id);
        debug!("Fetching proof from {}", url);

        let request = self.http_client.get(&url);
        let response = self.authorize(request).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(VcpError::ApiError {
                status: 404,
                message: format!(
                    "proof not available for event {} (it may not be anchored yet)",
                    event_id
                ),
            });
        }

        let response = self.check_status(response, "proof").await?;
        Ok(response.json().await?)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn check_status(
        &self,
        response: Response,
        what: &str,
    ) -> Result<Response, VcpError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(VcpError::ApiError {
                status: status.as_u16(),
                message: "invalid or missing API key".to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VcpError::ApiError {
                status: status.as_u16(),
                message: format!("{} request failed: {}", what, body),
            });
        }

        Ok(response)
    }
}
