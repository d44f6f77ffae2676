//! List command - print the recorded history

use crate::reporters::render_events;
use crate::storage::EventStore;
use anyhow::{Context, Result};

/// Run the list command
pub fn run(store: &dyn EventStore) -> Result<()> {
    let log = store
        .load()
        .with_context(|| format!("Failed to load events from {}", store.location()))?;
    print!("{}", render_events(&log));
    Ok(())
}
