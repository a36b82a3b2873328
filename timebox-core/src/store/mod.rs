//! Event storage.
//!
//! The insights engine and the HTTP layer only see [`EventRepository`]; the
//! in-memory [`InMemoryStore`] is the one implementation shipped today.

mod actions;
mod memory;

pub use actions::{ApplyOutcome, apply_actions, is_update_request};
pub use memory::InMemoryStore;

use chrono::NaiveDateTime;

use crate::error::TimeboxResult;
use crate::event::{Event, NewEvent};

/// Create/list/delete access to the stored events.
pub trait EventRepository: Send + Sync {
    /// All events, in insertion order.
    fn list_all(&self) -> TimeboxResult<Vec<Event>>;

    /// Store a new event, assigning its id and creation time.
    fn create(&self, event: NewEvent) -> TimeboxResult<Event>;

    /// Remove an event. Returns false if no event had that id.
    fn delete(&self, id: &str) -> TimeboxResult<bool>;

    /// Remove every event.
    fn clear(&self) -> TimeboxResult<()>;

    /// Events starting within `[from, to]` (both inclusive). Events whose
    /// start does not parse are left out.
    fn list_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> TimeboxResult<Vec<Event>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|event| {
                event
                    .start_time()
                    .map(|start| from <= start && start <= to)
                    .unwrap_or(false)
            })
            .collect())
    }
}
