//! Pairwise overlap detection.

use super::ScheduledEvent;
use super::report::{Conflict, EventRef};

/// Find every pair of overlapping events.
///
/// Events are stably sorted by start, then each pair `(i, j)` with `i < j` is
/// tested with the half-open rule `start_i < end_j && start_j < end_i`. Each
/// overlapping pair is reported once, in scan order.
///
/// Back-to-back events do not conflict, and an event with `start == end`
/// never conflicts with anything, not even an event covering that instant.
pub fn detect_conflicts(events: &[ScheduledEvent<'_>]) -> Vec<Conflict> {
    let mut sorted: Vec<&ScheduledEvent<'_>> = events.iter().collect();
    sorted.sort_by_key(|e| e.interval.start);

    let mut conflicts = Vec::new();

    for (i, first) in sorted.iter().enumerate() {
        for second in &sorted[i + 1..] {
            if first.interval.overlaps(&second.interval) {
                conflicts.push(Conflict {
                    event1: EventRef::from(first.event),
                    event2: EventRef::from(second.event),
                });
            }
        }
    }

    conflicts
}
