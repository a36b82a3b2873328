//! In-memory event store. Contents are lost when the process exits.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Local;
use uuid::Uuid;

use super::EventRepository;
use crate::error::{TimeboxError, TimeboxResult};
use crate::event::{Event, NewEvent};
use crate::timestamp::format_timestamp;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    events: RwLock<Vec<Event>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TimeboxResult<RwLockReadGuard<'_, Vec<Event>>> {
        self.events
            .read()
            .map_err(|_| TimeboxError::Store("event store lock poisoned".into()))
    }

    fn write(&self) -> TimeboxResult<RwLockWriteGuard<'_, Vec<Event>>> {
        self.events
            .write()
            .map_err(|_| TimeboxError::Store("event store lock poisoned".into()))
    }
}

impl EventRepository for InMemoryStore {
    fn list_all(&self) -> TimeboxResult<Vec<Event>> {
        Ok(self.read()?.clone())
    }

    fn create(&self, event: NewEvent) -> TimeboxResult<Event> {
        event.validate()?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: event.title,
            start: event.start,
            end: event.end,
            category: event.category,
            created_at: Some(format_timestamp(&Local::now().naive_local())),
        };

        let mut events = self.write()?;
        events.push(event.clone());
        tracing::info!(title = %event.title, total = events.len(), "event stored");

        Ok(event)
    }

    fn delete(&self, id: &str) -> TimeboxResult<bool> {
        let mut events = self.write()?;
        let before = events.len();
        events.retain(|e| e.id != id);
        let removed = events.len() < before;
        if removed {
            tracing::info!(id, "event deleted");
        }
        Ok(removed)
    }

    fn clear(&self) -> TimeboxResult<()> {
        self.write()?.clear();
        tracing::info!("all events cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn standup() -> NewEvent {
        NewEvent::new("Standup", "2025-10-29T09:00:00", "2025-10-29T09:15:00", "work")
    }

    #[test]
    fn test_create_assigns_id_and_created_at() {
        let store = InMemoryStore::new();
        let event = store.create(standup()).unwrap();

        assert!(Uuid::parse_str(&event.id).is_ok());
        assert!(event.created_at.is_some());
        assert_eq!(event.title, "Standup");
        assert_eq!(store.list_all().unwrap(), vec![event]);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let store = InMemoryStore::new();
        let mut event = standup();
        event.title = String::new();
        assert!(matches!(store.create(event), Err(TimeboxError::Validation(_))));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_keeps_malformed_timestamps() {
        let store = InMemoryStore::new();
        let event = store
            .create(NewEvent::new("Lunch", "noon", "later", "personal"))
            .unwrap();
        assert_eq!(event.start, "noon");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = InMemoryStore::new();
        let a = store
            .create(NewEvent::new("Late", "2025-10-29T17:00:00", "2025-10-29T18:00:00", "work"))
            .unwrap();
        let b = store.create(standup()).unwrap();

        let ids: Vec<_> = store.list_all().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[test]
    fn test_delete() {
        let store = InMemoryStore::new();
        let event = store.create(standup()).unwrap();

        assert!(!store.delete("missing").unwrap());
        assert!(store.delete(&event.id).unwrap());
        assert!(store.list_all().unwrap().is_empty());
        assert!(!store.delete(&event.id).unwrap());
    }

    #[test]
    fn test_clear() {
        let store = InMemoryStore::new();
        store.create(standup()).unwrap();
        store.create(standup()).unwrap();
        store.clear().unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_between_is_inclusive_and_skips_malformed() {
        let store = InMemoryStore::new();
        store.create(standup()).unwrap();
        store
            .create(NewEvent::new("Gym", "2025-10-30T07:00:00", "2025-10-30T08:00:00", "health"))
            .unwrap();
        store
            .create(NewEvent::new("Broken", "whenever", "2025-10-29T10:00:00", "work"))
            .unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 10, 29).unwrap();
        let from = day.and_hms_opt(9, 0, 0).unwrap();
        let to = day.and_hms_opt(23, 59, 59).unwrap();

        let titles: Vec<_> = store
            .list_between(from, to)
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Standup"]);
    }
}
