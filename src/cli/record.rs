//! Start/end commands - append an event and show the new condition

use crate::forecast::ForecastConfig;
use crate::models::{Event, EventKind, EventLog};
use crate::storage::EventStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Run the start or end command
pub fn run(
    store: &dyn EventStore,
    kind: EventKind,
    date: NaiveDate,
    config: &ForecastConfig,
) -> Result<()> {
    let log = record(store, kind, date)?;
    println!("Period {} on {}.", kind.past_tense(), date);
    print!("{}", super::condition::report(&log, config)?);
    Ok(())
}

/// Append the event and persist the log, returning the updated log
pub fn record(store: &dyn EventStore, kind: EventKind, date: NaiveDate) -> Result<EventLog> {
    let mut log = store
        .load()
        .with_context(|| format!("Failed to load events from {}", store.location()))?;
    log.record(Event::new(kind, date));
    store
        .save(&log)
        .with_context(|| format!("Failed to save events to {}", store.location()))?;
    tracing::info!("Recorded {} on {}", kind, date);
    Ok(log)
}
