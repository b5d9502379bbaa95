pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{engine::ScrapeEngine, fetch::HttpFetcher};
pub use crate::domain::model::{CallForPapers, EventDetails};
pub use crate::utils::error::{Result, ScrapeError};
