//! periodic - cycle tracking and next-transition forecasting
//!
//! Keeps a date log of cycle starts and ends, fits a recency-weighted
//! normal distribution to the observed lengths and renders the next
//! transition as a per-day probability histogram.

pub mod cli;
pub mod config;
pub mod forecast;
pub mod models;
pub mod reporters;
pub mod storage;

pub use forecast::{forecast, Forecast, ForecastConfig, ForecastError, ForecastTarget};
pub use models::{Cycle, Event, EventKind, EventLog};
pub use storage::{EventStore, FileStore, MemoryStore, StorageError};
