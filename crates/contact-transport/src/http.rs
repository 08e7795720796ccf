//! Reqwest-backed contact transport.

use crate::config::TransportConfig;
use async_trait::async_trait;
use contact_core::{ContactError, ContactRequest, ContactTransport, Result};

/// HTTP handler posting contact requests to `{base_url}/contactus`.
///
/// Transport-level failures (refused connection, timeout) surface as
/// `ContactError::Network`; any completed exchange surfaces its status code
/// unchanged. No retries, no extra headers.
pub struct HttpContactTransport {
    config: TransportConfig,
    client: reqwest::Client,
}

impl HttpContactTransport {
    /// Build a client honoring the configured request timeout.
    pub fn new(config: TransportConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ContactError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    fn endpoint_url(&self) -> String {
        format!("{}/contactus", self.config.base_url)
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn post_contact(&self, request: &ContactRequest) -> Result<u16> {
        let response = self
            .client
            .post(self.endpoint_url())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to reach contact endpoint: {e}");
                ContactError::network(format!("Failed to reach contact endpoint: {e}"))
            })?;

        let status = response.status().as_u16();
        tracing::debug!(status, "contact endpoint responded");
        Ok(status)
    }
}
