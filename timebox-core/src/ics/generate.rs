//! ICS file generation.

use crate::error::{TimeboxError, TimeboxResult};
use crate::event::Event;
use icalendar::{Calendar, Component, EventLike};

/// Name shown by calendar apps that honour X-WR-CALNAME
const CALENDAR_NAME: &str = "TimeBox";

/// Generate one VCALENDAR holding every event.
///
/// Times are written as floating local times (no Z, no TZID). Events whose
/// timestamps cannot be read, or that end before they start, are left out.
pub fn generate_calendar_ics(events: &[Event]) -> TimeboxResult<String> {
    let mut cal = Calendar::new();
    cal.name(CALENDAR_NAME);

    let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    for event in events {
        let interval = match event.interval() {
            Ok(interval) => interval,
            Err(err) => {
                tracing::warn!(id = %event.id, error = %err, "leaving event out of ICS export");
                continue;
            }
        };

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.id);
        ics_event.summary(&event.title);
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.add_property("DTSTART", interval.start.format("%Y%m%dT%H%M%S").to_string());
        ics_event.add_property("DTEND", interval.end.format("%Y%m%dT%H%M%S").to_string());
        ics_event.description(&format!("Category: {}", event.category));

        cal.push(ics_event.done());
    }

    let output = rewrite_prodid(&cal.done().to_string());
    if !output.starts_with("BEGIN:VCALENDAR") {
        return Err(TimeboxError::IcsGenerate(
            "calendar output is missing its VCALENDAR header".into(),
        ));
    }

    Ok(output)
}

/// Replace the icalendar crate's PRODID and drop the default CALSCALE.
fn rewrite_prodid(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:TIMEBOX\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use icalendar::parser::{read_calendar, unfold};

    fn make_test_event() -> Event {
        Event {
            id: "test-event-123".to_string(),
            title: "Test Event".to_string(),
            start: "2025-03-20T15:00:00".to_string(),
            end: "2025-03-20T16:00:00".to_string(),
            category: "work".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_generate_single_event() {
        let ics = generate_calendar_ics(&[make_test_event()]).unwrap();

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("PRODID:TIMEBOX"), "ICS:\n{}", ics);
        assert!(!ics.contains("CALSCALE"), "ICS:\n{}", ics);
        assert!(ics.contains("UID:test-event-123"), "ICS:\n{}", ics);
        assert!(ics.contains("SUMMARY:Test Event"), "ICS:\n{}", ics);
        assert!(ics.contains("DTSTART:20250320T150000"), "ICS:\n{}", ics);
        assert!(ics.contains("DTEND:20250320T160000"), "ICS:\n{}", ics);
        assert!(ics.contains("DESCRIPTION:Category: work"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_multiple_events_parses_back() {
        let mut second = make_test_event();
        second.id = "test-event-456".to_string();
        second.title = "Gym".to_string();
        second.category = "health".to_string();

        let ics = generate_calendar_ics(&[make_test_event(), second]).unwrap();

        let unfolded = unfold(&ics);
        let calendar = read_calendar(&unfolded).unwrap();
        let uids: Vec<String> = calendar
            .components
            .iter()
            .filter(|c| c.name == "VEVENT")
            .filter_map(|c| c.find_prop("UID").map(|p| p.val.to_string()))
            .collect();
        assert_eq!(uids, vec!["test-event-123", "test-event-456"]);
    }

    #[test]
    fn test_generate_skips_unreadable_events() {
        let mut broken = make_test_event();
        broken.id = "broken".to_string();
        broken.start = "someday".to_string();

        let ics = generate_calendar_ics(&[broken, make_test_event()]).unwrap();

        assert!(!ics.contains("UID:broken"), "ICS:\n{}", ics);
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn test_generate_empty_calendar() {
        let ics = generate_calendar_ics(&[]).unwrap();
        assert!(ics.contains("END:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
