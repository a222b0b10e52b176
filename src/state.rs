use crate::stats::StatsCounter;
use crate::store::MemStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: MemStore<String, String>,
    pub stats: Arc<StatsCounter>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: MemStore::new(),
            stats: Arc::new(StatsCounter::new()),
        }
    }
}
