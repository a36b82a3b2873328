//! Event types.
//!
//! An [`Event`] keeps its start and end exactly as they were submitted (by a
//! user, the chat assistant or an image import). Parsing happens on demand via
//! [`Event::interval`], so a malformed record can be stored and later reported
//! instead of being silently dropped.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{TimeboxError, TimeboxResult};
use crate::timestamp::parse_timestamp;

/// A calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque identifier assigned by the repository
    pub id: String,
    pub title: String,
    /// ISO-8601 local time, e.g. "2025-10-29T08:00:00"
    pub start: String,
    pub end: String,
    /// One of work, personal, health, study. Not validated.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Fields needed to create an event; the repository fills in `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub start: String,
    pub end: String,
    pub category: String,
}

/// Half-open `[start, end)` interval of an event with parsed timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Half-open overlap: touching intervals do not overlap, and a
    /// zero-length interval overlaps nothing.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Event {
    /// Parse start and end into an [`Interval`].
    ///
    /// Fails with `MalformedTimestamp` if either side does not parse and with
    /// `InvalidInterval` if start is after end. `start == end` is allowed.
    pub fn interval(&self) -> TimeboxResult<Interval> {
        let start = parse_timestamp(&self.start)?;
        let end = parse_timestamp(&self.end)?;

        if start > end {
            return Err(TimeboxError::InvalidInterval {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }

        Ok(Interval { start, end })
    }

    /// Parsed start time only.
    pub fn start_time(&self) -> TimeboxResult<NaiveDateTime> {
        parse_timestamp(&self.start)
    }
}

impl NewEvent {
    pub fn new(
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        NewEvent {
            title: title.into(),
            start: start.into(),
            end: end.into(),
            category: category.into(),
        }
    }

    /// Reject events that can never be displayed. Timestamps are not checked
    /// here; malformed ones are reported by the insights engine.
    pub fn validate(&self) -> TimeboxResult<()> {
        if self.title.trim().is_empty() {
            return Err(TimeboxError::Validation("Event title must not be empty".into()));
        }
        Ok(())
    }
}
