use crate::domain::model::EventDetails;
use crate::utils::error::Result;

/// Renders the two-section console report. Empty fields print as empty
/// strings rather than being omitted.
pub fn render_report(details: &EventDetails) -> String {
    let cfp = &details.call_for_papers;
    let lines = [
        "=== Event Information ===".to_string(),
        format!("Title: {}", details.title),
        format!("Date: {}", details.date),
        format!("Starts: {}", details.starts_at),
        format!("Ends: {}", details.ends_at),
        format!(
            "Location: {}, {}",
            details.location_line1, details.location_line2
        ),
        format!("Website: {}", details.website),
        format!("Description: {}", details.description),
        String::new(),
        "=== Call for Papers ===".to_string(),
        format!("Opens: {} at {}", cfp.start_date, cfp.start_time),
        format!("Closes: {} at {}", cfp.end_date, cfp.end_time),
        format!("Timezone: {}", cfp.timezone),
        format!("CFP Description: {}", cfp.description),
    ];
    lines.join("\n")
}

pub fn render_json(details: &EventDetails) -> Result<String> {
    Ok(serde_json::to_string_pretty(details)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CallForPapers;

    fn sample() -> EventDetails {
        EventDetails {
            title: "RustConf".to_string(),
            date: "15 Oct 2025".to_string(),
            starts_at: "9:00 AM".to_string(),
            ends_at: "6:00 PM".to_string(),
            location_line1: "Main St 1".to_string(),
            location_line2: "Springfield".to_string(),
            website: "https://rustconf.test".to_string(),
            description: "Talks.".to_string(),
            call_for_papers: CallForPapers {
                start_date: "1 Mar 2025".to_string(),
                start_time: "9:00 AM".to_string(),
                end_date: "30 Apr 2025".to_string(),
                end_time: "11:59 PM".to_string(),
                timezone: "(UTC+02:00) Madrid".to_string(),
                description: "Submit.".to_string(),
            },
        }
    }

    #[test]
    fn test_report_layout() {
        let report = render_report(&sample());
        let lines: Vec<&str> = report.split('\n').collect();

        assert_eq!(lines[0], "=== Event Information ===");
        assert_eq!(lines[1], "Title: RustConf");
        assert_eq!(lines[5], "Location: Main St 1, Springfield");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "=== Call for Papers ===");
        assert_eq!(lines[10], "Opens: 1 Mar 2025 at 9:00 AM");
        assert_eq!(lines[11], "Closes: 30 Apr 2025 at 11:59 PM");
        assert_eq!(lines[13], "CFP Description: Submit.");
        assert_eq!(lines.len(), 14);
    }

    #[test]
    fn test_empty_fields_are_printed_not_omitted() {
        let report = render_report(&EventDetails::default());
        assert!(report.contains("Title: \n"));
        assert!(report.contains("Website: \n"));
        assert!(report.contains("Opens:  at \n"));
        assert!(report.contains("Timezone: \n"));
    }

    #[test]
    fn test_json_round_trips() {
        let json = render_json(&sample()).unwrap();
        let back: EventDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "RustConf");
        assert_eq!(back.call_for_papers.end_date, "30 Apr 2025");
    }
}
