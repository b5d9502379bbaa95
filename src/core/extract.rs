//! Field mapping: the fixed marker tables that turn one decoded page into an
//! [`EventDetails`] record.
//!
//! The page is split into two scopes by structural id markers, then each
//! field is extracted independently with its own [`MarkerSpec`]. There is no
//! DOM and no tolerance for layout changes; the tables encode one known page
//! layout and nothing else.

use crate::core::scan::{section_after, MarkerSpec};
use crate::domain::model::{CallForPapers, EventDetails};

const LEFT_COLUMN: &str = "id=\"left-column\"";
const RIGHT_COLUMN: &str = "id=\"right-column\"";

/// Marker table for the event block. Applied against the left-column scope.
mod event {
    use super::MarkerSpec;

    pub const TITLE: MarkerSpec = MarkerSpec::Between {
        start: "<h4>",
        end: "</h4>",
    };
    pub const DATE: MarkerSpec = MarkerSpec::AfterContext {
        context: "event date",
        start: "<h2 class=\"no-margins\">",
        end: "</h2>",
    };
    pub const STARTS_AT: MarkerSpec = MarkerSpec::AfterContext {
        context: "event starts",
        start: "<h2 class=\"no-margins\">",
        end: "</h2>",
    };
    pub const ENDS_AT: MarkerSpec = MarkerSpec::AfterContext {
        context: "event ends",
        start: "<h2 class=\"no-margins\">",
        end: "</h2>",
    };
    pub const LOCATION_LINE1: MarkerSpec = MarkerSpec::AfterContext {
        context: "location",
        start: "block\">",
        end: "</span>",
    };
    // The second location line is the span block after the first one closes.
    pub const LOCATION_LINE2: MarkerSpec = MarkerSpec::AfterTwoContexts {
        first: "location",
        second: "</span>",
        start: "<span class=\"block\">",
        end: "</span>",
    };
    pub const WEBSITE: MarkerSpec = MarkerSpec::AfterContext {
        context: "website",
        start: "<a href=\"",
        end: "\"",
    };
    pub const DESCRIPTION: MarkerSpec = MarkerSpec::Between {
        start: "<hr class=\"m-t-none\" />",
        end: "</div>",
    };
}

/// Marker table for the call-for-papers block. Applied against the
/// right-column scope.
mod cfp {
    use super::MarkerSpec;

    pub const START_DATE: MarkerSpec = MarkerSpec::AfterContext {
        context: "<div class=\"col-sm-6 m-b-sm\">",
        start: "<h2 class=\"no-margins\">",
        end: "</h2>",
    };
    pub const START_TIME: MarkerSpec = MarkerSpec::AfterContext {
        context: "<div class=\"col-sm-6 m-b-sm\">",
        start: "Call opens at",
        end: "<",
    };
    pub const END_DATE: MarkerSpec = MarkerSpec::AfterTwoContexts {
        first: "Call opens at",
        second: "Call closes at",
        start: "<h2 class=\"no-margins\">",
        end: "</h2>",
    };
    // Trailing space is deliberate; "Call closes at" alone also matches the
    // countdown label "Call closes in".
    pub const END_TIME: MarkerSpec = MarkerSpec::Between {
        start: "Call closes at ",
        end: "<",
    };
    pub const TIMEZONE: MarkerSpec = MarkerSpec::AfterContext {
        context: "Call closes in",
        start: "<strong>",
        end: "</strong>",
    };
    pub const DESCRIPTION: MarkerSpec = MarkerSpec::AfterContext {
        context: "<div class=\"col-md-12\">",
        start: "<hr class=\"m-t-none\" />",
        end: "</div>",
    };
}

/// Pure transform: decoded page text in, populated record out. Every field
/// is computed independently; a missing marker leaves only its own field
/// empty.
pub fn extract_event(document: &str) -> EventDetails {
    let left = section_after(document, LEFT_COLUMN);
    let right = section_after(document, RIGHT_COLUMN);

    EventDetails {
        title: event::TITLE.extract(left).to_string(),
        date: event::DATE.extract(left).to_string(),
        starts_at: event::STARTS_AT.extract(left).to_string(),
        ends_at: event::ENDS_AT.extract(left).to_string(),
        location_line1: event::LOCATION_LINE1.extract(left).to_string(),
        location_line2: event::LOCATION_LINE2.extract(left).to_string(),
        website: event::WEBSITE.extract(left).to_string(),
        description: event::DESCRIPTION.extract(left).to_string(),
        call_for_papers: CallForPapers {
            start_date: cfp::START_DATE.extract(right).to_string(),
            start_time: cfp::START_TIME.extract(right).to_string(),
            end_date: cfp::END_DATE.extract(right).to_string(),
            end_time: cfp::END_TIME.extract(right).to_string(),
            timezone: cfp::TIMEZONE.extract(right).to_string(),
            description: cfp::DESCRIPTION.extract(right).to_string(),
        },
    }
}
