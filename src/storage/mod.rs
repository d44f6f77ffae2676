//! Event log persistence
//!
//! The forecasting core only ever sees an [`EventLog`]; where it comes from
//! is decided by whichever [`EventStore`] the CLI hands out.

mod file;
mod memory;
mod paths;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use paths::{default_data_dir, default_data_file};

use crate::models::EventLog;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the event log
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Load/save interface for the event log
pub trait EventStore {
    /// Human-readable location (for messages and logging)
    fn location(&self) -> String;

    /// Read the full log, sorted by date. A store with no data yields an empty log.
    fn load(&self) -> StorageResult<EventLog>;

    /// Replace the stored log with `log`
    fn save(&self, log: &EventLog) -> StorageResult<()>;
}
