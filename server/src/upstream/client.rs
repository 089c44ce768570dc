use std::time::Duration;

use common::{Budget, QuotationEnvelope};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::upstream::errors::UpstreamError;

/// HTTP client for the external USD-BRL quotation API.
#[derive(Clone)]
pub struct QuotationClient {
    http: Client,
    url: String,
    budget: Budget,
}

impl QuotationClient {
    pub fn new(url: String, budget: Budget) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        Ok(Self { http, url, budget })
    }

    /// Fetches the latest quotation. Sending, reading the body and decoding
    /// all count against the budget.
    #[instrument(skip(self), fields(url = %self.url), level = "debug")]
    pub async fn fetch(&self) -> Result<QuotationEnvelope, UpstreamError> {
        let envelope = self.budget.run(self.fetch_unbounded()).await??;

        debug!(bid = %envelope.bid(), "quotation fetched from upstream");

        Ok(envelope)
    }

    async fn fetch_unbounded(&self) -> Result<QuotationEnvelope, UpstreamError> {
        let resp = self.http.get(&self.url).send().await?.error_for_status()?;
        let body = resp.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
