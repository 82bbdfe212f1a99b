//! HTTP client for the Axalon backend
//!
//! Posts demo requests as JSON to `<base-url>/api/demo-requests`.

use super::traits::DemoRequestTransport;
use crate::config::SiteConfig;
use crate::error::SubmissionError;
use crate::state::{DemoRequestFields, SubmissionReceipt};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Client for the demo request endpoint
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Self::with_endpoint(config.demo_requests_url(), config.request_timeout())
    }

    /// Create a client posting to an explicit endpoint
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_transport_error(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        SubmissionError::Timeout
    } else {
        SubmissionError::Transport(err.to_string())
    }
}

#[async_trait]
impl DemoRequestTransport for ApiClient {
    async fn send_demo_request(
        &self,
        fields: &DemoRequestFields,
    ) -> Result<Option<SubmissionReceipt>, SubmissionError> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(fields)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }

        // The write already succeeded; an unreadable body only loses the receipt.
        let receipt = match response.bytes().await {
            Ok(body) => match serde_json::from_slice::<SubmissionReceipt>(&body) {
                Ok(receipt) => Some(receipt),
                Err(e) => {
                    tracing::warn!("Demo request accepted ({status}) but record unreadable: {e}");
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Demo request accepted ({status}) but body failed: {e}");
                None
            }
        };

        Ok(receipt)
    }
}
