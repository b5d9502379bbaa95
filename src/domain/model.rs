use serde::{Deserialize, Serialize};

/// Everything scraped from one event page. All fields are free text, already
/// whitespace-trimmed; a field the page did not yield stays empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    pub date: String,
    pub starts_at: String,
    pub ends_at: String,
    pub location_line1: String,
    pub location_line2: String,
    pub website: String,
    pub description: String,
    pub call_for_papers: CallForPapers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallForPapers {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub timezone: String,
    pub description: String,
}
