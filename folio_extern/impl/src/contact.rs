use std::sync::Arc;

use anyhow::Context;
use folio_extern_contracts::contact::ContactRelayApiService;
use folio_models::contact::{ContactSubmission, RelayResponse};
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct ContactRelayApiServiceImpl {
    config: ContactRelayApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactRelayApiServiceConfig {
    contact_endpoint: Arc<Url>,
}

impl ContactRelayApiServiceConfig {
    /// `endpoint` is the base url of the rest api serving `POST /contact`.
    pub fn new(endpoint: &Url) -> anyhow::Result<Self> {
        let contact_endpoint = endpoint
            .join("contact")
            .with_context(|| format!("Invalid relay endpoint {endpoint}"))?;
        Ok(Self {
            contact_endpoint: contact_endpoint.into(),
        })
    }
}

impl ContactRelayApiServiceImpl {
    pub fn new(config: ContactRelayApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            client: HttpClient::new()?,
        })
    }
}

impl ContactRelayApiService for ContactRelayApiServiceImpl {
    async fn send(&self, submission: ContactSubmission) -> anyhow::Result<RelayResponse> {
        let response = self
            .client
            .post((*self.config.contact_endpoint).clone())
            .json(&submission)
            .send()
            .await?;

        // Rejected submissions and failed deliveries still carry a relay response.
        let status = response.status();
        debug!(%status, "relay responded");

        response
            .json::<RelayResponse>()
            .await
            .with_context(|| format!("Unexpected response from relay (status {status})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_endpoint() {
        for (base, expected) in [
            ("http://127.0.0.1:8000/", "http://127.0.0.1:8000/contact"),
            ("http://127.0.0.1:8000", "http://127.0.0.1:8000/contact"),
            ("https://example.com/api/", "https://example.com/api/contact"),
        ] {
            let config = ContactRelayApiServiceConfig::new(&base.parse().unwrap()).unwrap();
            assert_eq!(config.contact_endpoint.as_str(), expected);
        }
    }
}
