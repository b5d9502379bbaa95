use clap::Parser;
use sessionize_scraper::core::report;
use sessionize_scraper::domain::ports::ConfigProvider;
use sessionize_scraper::utils::{logger, validation::Validate};
use sessionize_scraper::{CliConfig, HttpFetcher, ScrapeEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let fetcher = match HttpFetcher::new(config.timeout_secs()) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            eprintln!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let engine = ScrapeEngine::new(fetcher);

    match engine.run(config.page_url()).await {
        Ok(details) => {
            if config.json {
                println!("{}", report::render_json(&details)?);
            } else {
                println!("{}", report::render_report(&details));
            }
        }
        Err(e) => {
            // A failed fetch ends the run with a single message and no
            // partial report. --strict maps it to a distinct exit code.
            tracing::error!("Failed to retrieve event data: {}", e);
            eprintln!("Failed to retrieve event data.");
            if config.strict {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}
