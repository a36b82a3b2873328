//! Schedule analytics: conflicts, free-time gaps and the insights report.
//!
//! Everything here is recomputed from the current event list on each call.
//! Conflict detection compares every pair (O(n²)) and gap finding scans the
//! events once per day of the lookahead window; both are fine for a personal
//! calendar and would need a sweep line / interval tree for large sets.

mod aggregate;
mod conflicts;
mod gaps;
mod report;

pub use aggregate::{build_report, compute_insights};
pub use conflicts::detect_conflicts;
pub use gaps::find_gaps;
pub use report::{Conflict, DatedGap, EventRef, Gap, InsightsReport, SkipReason, SkippedEvent};

use crate::error::TimeboxError;
use crate::event::{Event, Interval};

/// An event whose timestamps parsed into a valid interval.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledEvent<'a> {
    pub event: &'a Event,
    pub interval: Interval,
}

impl<'a> ScheduledEvent<'a> {
    /// Split events into those usable for conflict/gap math and those that
    /// must be reported instead (malformed timestamps, start after end).
    /// Input order is kept in both lists.
    pub fn partition(events: &'a [Event]) -> (Vec<ScheduledEvent<'a>>, Vec<SkippedEvent>) {
        let mut scheduled = Vec::with_capacity(events.len());
        let mut skipped = Vec::new();

        for event in events {
            match event.interval() {
                Ok(interval) => scheduled.push(ScheduledEvent { event, interval }),
                Err(err) => {
                    tracing::warn!(id = %event.id, title = %event.title, error = %err, "excluding event from insights");
                    skipped.push(SkippedEvent::new(event, &err));
                }
            }
        }

        (scheduled, skipped)
    }
}

impl SkippedEvent {
    fn new(event: &Event, err: &TimeboxError) -> Self {
        let reason = match err {
            TimeboxError::InvalidInterval { .. } => SkipReason::InvalidInterval,
            _ => SkipReason::MalformedTimestamp,
        };
        SkippedEvent {
            id: event.id.clone(),
            title: event.title.clone(),
            reason,
            detail: err.to_string(),
        }
    }
}
