use crate::core::decode::decode_entities;
use crate::core::extract::extract_event;
use crate::domain::model::EventDetails;
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;

/// Drives one scrape: fetch the page, decode entities, run the marker
/// tables. Extraction itself never fails; only the fetch can.
pub struct ScrapeEngine<F: Fetcher> {
    fetcher: F,
}

impl<F: Fetcher> ScrapeEngine<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn run(&self, url: &str) -> Result<EventDetails> {
        tracing::info!("Scraping event data from {}", url);

        let body = self.fetcher.fetch(url).await?;
        tracing::debug!("Fetched {} bytes", body.len());

        let document = decode_entities(&body);
        let details = extract_event(&document);
        tracing::debug!("Extracted event \"{}\"", details.title);

        Ok(details)
    }
}
