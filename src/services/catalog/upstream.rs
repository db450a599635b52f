/// Upstream lottery catalog over HTTP
///
/// API Flow:
/// 1. `GET {api_url}/api/draws/` → `{ requestStatus, games: [...] }`
///
/// Transport errors and non-success statuses are retried per the
/// `RetryPolicy`; the body is decoded once after a successful attempt.
use std::time::Duration;

use reqwest::Client as HttpClient;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{error::FetchError, models::RawCatalog, services::catalog::CatalogSource};

use super::RetryPolicy;

const SUCCESS_STATUS: &str = "success";

#[derive(Clone)]
pub struct HttpCatalogSource {
    http_client: HttpClient,
    api_url: String,
    retry: RetryPolicy,
}

impl HttpCatalogSource {
    /// Creates a source whose every attempt is bounded by `request_timeout`
    pub fn new(api_url: impl Into<String>, request_timeout: Duration) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder().timeout(request_timeout).build()?;
        let api_url = api_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http_client,
            api_url,
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn draws_url(&self) -> String {
        format!("{}/api/draws/", self.api_url)
    }

    /// One attempt: request, status check, and body read
    async fn request_once(&self, url: &str, attempt: u32) -> Result<String, FetchError> {
        tracing::debug!(url = %url, attempt, "Requesting catalog from upstream");

        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(
        &self,
        deadline: Instant,
        cancel: &CancellationToken,
    ) -> Result<RawCatalog, FetchError> {
        let url = self.draws_url();
        let url = url.as_str();

        let body = self
            .retry
            .run(deadline, cancel, move |attempt| self.request_once(url, attempt))
            .await?;

        let catalog: RawCatalog = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to deserialize catalog response");
            FetchError::Decode(e)
        })?;

        if !catalog.request_status.eq_ignore_ascii_case(SUCCESS_STATUS) {
            tracing::warn!(
                request_status = %catalog.request_status,
                "Catalog upstream reported a non-success request status"
            );
        }

        tracing::info!(
            games = catalog.games.len(),
            provider = self.name(),
            "Catalog fetched"
        );

        Ok(catalog)
    }

    fn name(&self) -> &'static str {
        "upstream"
    }
}
