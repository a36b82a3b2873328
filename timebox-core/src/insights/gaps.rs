//! Free-time gaps inside the daily working window.

use chrono::{NaiveDate, NaiveDateTime};

use super::ScheduledEvent;
use super::report::Gap;
use crate::config::InsightsConfig;

/// Find the free intervals of `date` within the configured working window.
///
/// Only events that *start* on `date` are considered; an event spilling over
/// from the previous day is not seen. With no such events the whole window
/// is one gap. Otherwise a cursor walks the events in start order, emitting
/// `[cursor, event.start)` when it is at least `min_gap_minutes` long and
/// then moving to `max(cursor, event.end)`. Gaps are clipped to the window.
pub fn find_gaps(events: &[ScheduledEvent<'_>], date: NaiveDate, config: &InsightsConfig) -> Vec<Gap> {
    let window_start = date.and_time(config.work_day_start);
    let window_end = date.and_time(config.work_day_end);

    let mut day_events: Vec<_> = events
        .iter()
        .map(|e| e.interval)
        .filter(|interval| interval.start.date() == date)
        .collect();

    if day_events.is_empty() {
        return vec![Gap::new(window_start, window_end)];
    }

    // Zero-length events occupy no time and must not split a free stretch.
    day_events.retain(|interval| interval.start < interval.end);

    day_events.sort_by_key(|interval| interval.start);

    let mut gaps = Vec::new();
    let mut cursor = window_start;

    for interval in day_events {
        if cursor >= window_end {
            break;
        }
        let gap_end = interval.start.min(window_end);
        push_gap(&mut gaps, cursor, gap_end, config.min_gap_minutes);
        cursor = cursor.max(interval.end);
    }

    push_gap(&mut gaps, cursor, window_end, config.min_gap_minutes);

    gaps
}

fn push_gap(gaps: &mut Vec<Gap>, start: NaiveDateTime, end: NaiveDateTime, min_minutes: i64) {
    if start < end {
        let gap = Gap::new(start, end);
        if gap.duration_minutes >= min_minutes {
            gaps.push(gap);
        }
    }
}
