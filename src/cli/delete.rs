//! Delete command - remove the entries on a date

use crate::storage::EventStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Run the delete command
pub fn run(store: &dyn EventStore, date: NaiveDate) -> Result<()> {
    if delete(store, date)? == 0 {
        println!("No entry was deleted");
    } else {
        println!("Entry deleted");
    }
    Ok(())
}

/// Remove every event on `date`, returning how many were removed
pub fn delete(store: &dyn EventStore, date: NaiveDate) -> Result<usize> {
    let mut log = store
        .load()
        .with_context(|| format!("Failed to load events from {}", store.location()))?;
    let removed = log.delete_on(date);
    if removed > 0 {
        store
            .save(&log)
            .with_context(|| format!("Failed to save events to {}", store.location()))?;
        tracing::info!("Deleted {} entries on {}", removed, date);
    }
    Ok(removed)
}
