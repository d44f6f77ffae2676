//! Output reporters for periodic
//!
//! Reporters turn structured forecasts and event logs into strings; the
//! command handlers decide where the strings go.

mod text;

pub use text::{render_events, render_forecast, render_row, INSUFFICIENT_DATA};
