//! Condition command - show the current state and the forecast

use crate::forecast::{forecast, ForecastConfig, ForecastError};
use crate::models::EventLog;
use crate::reporters::{render_forecast, INSUFFICIENT_DATA};
use crate::storage::EventStore;
use anyhow::{Context, Result};

/// Run the condition command
pub fn run(store: &dyn EventStore, config: &ForecastConfig) -> Result<()> {
    let log = store
        .load()
        .with_context(|| format!("Failed to load events from {}", store.location()))?;
    print!("{}", report(&log, config)?);
    Ok(())
}

/// Condition text for a log; too little data is a message, not an error
pub fn report(log: &EventLog, config: &ForecastConfig) -> Result<String> {
    match forecast(log, config) {
        Ok(forecast) => Ok(render_forecast(&forecast)),
        Err(ForecastError::InsufficientData { cycles, required }) => {
            tracing::info!("Skipping forecast: {} of {} cycles", cycles, required);
            Ok(format!("{}\n", INSUFFICIENT_DATA))
        }
        // A lowered min_cycles can let through fewer samples than a fit needs
        Err(ForecastError::TooFewSamples(samples)) => {
            tracing::info!("Skipping forecast: only {} sample(s)", samples);
            Ok(format!("{}\n", INSUFFICIENT_DATA))
        }
        Err(e) => Err(e).context("Could not compute forecast"),
    }
}
