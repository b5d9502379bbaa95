pub mod decode;
pub mod engine;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod scan;

pub use crate::domain::model::{CallForPapers, EventDetails};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
