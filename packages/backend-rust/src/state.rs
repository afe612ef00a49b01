use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::store::StudentStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    store: Arc<StudentStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            store: Arc::new(StudentStore::new()),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn store(&self) -> Arc<StudentStore> {
        Arc::clone(&self.store)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
