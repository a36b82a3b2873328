use std::sync::Arc;

use timebox_core::{EventRepository, InMemoryStore, InsightsConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventRepository>,
    pub insights: Arc<InsightsConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventRepository>, insights: InsightsConfig) -> Self {
        AppState {
            store,
            insights: Arc::new(insights),
        }
    }

    /// State backed by an empty in-memory store. Events are lost on restart.
    pub fn in_memory(insights: InsightsConfig) -> Self {
        Self::new(Arc::new(InMemoryStore::new()), insights)
    }
}
