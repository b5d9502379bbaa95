use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Identifying client header sent with every request.
pub const USER_AGENT: &str = concat!("sessionize-scraper/", env!("CARGO_PKG_VERSION"));

/// [`Fetcher`] backed by reqwest. One GET per run, no retries; non-2xx
/// statuses are failures.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }
}
