//! In-memory event store

use super::{EventStore, StorageResult};
use crate::models::EventLog;
use std::cell::RefCell;

/// Keeps the log in memory; used by tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    log: RefCell<EventLog>,
}

impl MemoryStore {
    pub fn new(log: EventLog) -> Self {
        Self {
            log: RefCell::new(log),
        }
    }

    /// Current contents
    pub fn snapshot(&self) -> EventLog {
        self.log.borrow().clone()
    }
}

impl EventStore for MemoryStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> StorageResult<EventLog> {
        Ok(self.snapshot())
    }

    fn save(&self, log: &EventLog) -> StorageResult<()> {
        *self.log.borrow_mut() = log.clone();
        Ok(())
    }
}
