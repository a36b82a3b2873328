//! Core library for TimeBox, a personal calendar assistant.
//!
//! - `event`: the `Event` record and timestamp intervals
//! - `store`: the `EventRepository` trait and an in-memory implementation
//! - `insights`: conflict detection, free-time gaps and the insights report
//! - `ics`: calendar file export

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ics;
pub mod insights;
pub mod store;
pub mod timestamp;

pub use config::InsightsConfig;
pub use error::{TimeboxError, TimeboxResult};
pub use event::{Event, Interval, NewEvent};
pub use insights::{InsightsReport, compute_insights};
pub use store::{EventRepository, InMemoryStore};
