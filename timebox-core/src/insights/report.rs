//! Insights report types.
//!
//! Field names here are read directly by the frontend; renaming one is a
//! breaking change.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// The bits of an event needed to render it inside a conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRef {
    pub id: String,
    pub title: String,
    /// Start as stored on the event
    pub start: String,
}

impl From<&Event> for EventRef {
    fn from(event: &Event) -> Self {
        EventRef {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.start.clone(),
        }
    }
}

/// Two events whose intervals overlap. `event1` starts no later than `event2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub event1: EventRef,
    pub event2: EventRef,
}

/// A free interval `[start, end)` inside the working window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Whole minutes, truncated
    pub duration_minutes: i64,
}

impl Gap {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Gap {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// A gap tagged with the day it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedGap {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub gap: Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MalformedTimestamp,
    InvalidInterval,
}

/// An event left out of conflict and gap computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEvent {
    pub id: String,
    pub title: String,
    pub reason: SkipReason,
    /// Human-readable description of the problem
    pub detail: String,
}

/// Aggregated schedule analytics, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub total_events: usize,
    pub conflicts: Vec<Conflict>,
    /// First gaps of the lookahead window, in day then time order
    pub upcoming_gaps: Vec<DatedGap>,
    /// Category name to number of events. Absent for an empty calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_breakdown: Option<BTreeMap<String, usize>>,
    /// Never empty
    pub insights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_events: Vec<SkippedEvent>,
}
