use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetches one URL and returns the response body as text. Non-success
/// responses and transport failures surface as errors.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn page_url(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}
