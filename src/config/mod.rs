use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sessionize-scraper")]
#[command(about = "Scrapes event and call-for-papers details from a Sessionize event page")]
pub struct CliConfig {
    /// Event page to scrape
    #[arg(default_value = "https://sessionize.com/netcoreconf-barcelona-2025/")]
    pub url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Print the extracted record as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when the fetch fails
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn page_url(&self) -> &str {
        &self.url
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("url", &self.url)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
