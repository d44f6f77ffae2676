//! Line-oriented event log file
//!
//! One event per line, `<kind> <YYYY-MM-DD>` with kind `s` or `e`.
//! Anything after `#` is a comment and blank lines are skipped.

use super::{EventStore, StorageError, StorageResult};
use crate::models::{Event, EventKind, EventLog};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Event store backed by a plain text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn parse_line(&self, line_no: usize, raw: &str) -> StorageResult<Option<Event>> {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            return Ok(None);
        }

        let parse_error = |message: String| StorageError::Parse {
            path: self.path.clone(),
            line: line_no,
            message,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [kind, date] = fields.as_slice() else {
            return Err(parse_error(format!(
                "expected '<s|e> <YYYY-MM-DD>', found '{}'",
                line
            )));
        };

        let kind = EventKind::from_code(kind)
            .ok_or_else(|| parse_error(format!("unknown event kind '{}'", kind)))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| parse_error(format!("invalid date '{}': {}", date, e)))?;

        Ok(Some(Event::new(kind, date)))
    }
}

impl EventStore for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> StorageResult<EventLog> {
        if !self.path.exists() {
            tracing::debug!("No data file at {}, starting empty", self.path.display());
            return Ok(EventLog::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let mut events = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            if let Some(event) = self.parse_line(idx + 1, raw)? {
                events.push(event);
            }
        }

        tracing::debug!("Loaded {} events from {}", events.len(), self.path.display());
        Ok(EventLog::from_events(events))
    }

    fn save(&self, log: &EventLog) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content: String = log
            .events()
            .iter()
            .map(|e| format!("{} {}\n", e.kind.code(), e.date))
            .collect();
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        tracing::debug!("Saved {} events to {}", log.len(), self.path.display());
        Ok(())
    }
}
