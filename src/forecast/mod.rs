//! Next-transition forecasting
//!
//! Pipeline: the event log is split into cycles and day-count samples
//! ([`segmenter`]), the samples are fitted with a recency-weighted normal
//! distribution ([`stats`]), and the fit is discretised into per-day
//! probabilities over a confidence window ([`distribution`]).
//!
//! Nothing here touches the filesystem or prints; callers get a
//! [`Forecast`] or a [`ForecastError`] naming why there is none.

pub mod distribution;
pub mod segmenter;
pub mod stats;

pub use distribution::{DayForecast, DistributionRenderer};
pub use segmenter::{CycleSegmenter, GapHeuristic};
pub use stats::WeightedEstimate;

use crate::models::{EventKind, EventLog};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-position weight multiplier for progressively older samples
pub const OLD_DATA_COEFF: f64 = 0.9;
/// Probability left outside the confidence window on each side
pub const PROB_THRESHOLD: f64 = 0.05;
/// Number of day offsets the probability table covers
pub const HORIZON_DAYS: usize = 100;
/// Bar length given to the most likely day
pub const BAR_WIDTH: u32 = 20;
/// Cycles needed before a forecast is attempted
pub const MIN_CYCLES: usize = 3;

/// Reasons a forecast could not be produced
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("not enough data: {cycles} cycle(s) recorded, at least {required} needed")]
    InsufficientData { cycles: usize, required: usize },

    #[error("at least 2 samples are needed to estimate a spread, got {0}")]
    TooFewSamples(usize),

    #[error("invalid forecast setting: {0}")]
    InvalidConfig(String),

    #[error("cannot build a distribution from mean={mean}, sd={sd}: {reason}")]
    InvalidEstimate { mean: f64, sd: f64, reason: String },
}

/// Tunable constants of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Weight decay per sample position (newest sample has weight 1)
    pub decay: f64,
    /// Tail probability cut from each side of the window
    pub tail_probability: f64,
    /// Size of the day-offset probability table
    pub horizon_days: usize,
    /// Bar length for the modal day
    pub bar_width: u32,
    /// Minimum number of cycles before forecasting
    pub min_cycles: usize,
    #[serde(flatten)]
    pub gaps: GapHeuristic,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            decay: OLD_DATA_COEFF,
            tail_probability: PROB_THRESHOLD,
            horizon_days: HORIZON_DAYS,
            bar_width: BAR_WIDTH,
            min_cycles: MIN_CYCLES,
            gaps: GapHeuristic::default(),
        }
    }
}

/// What the forecast predicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastTarget {
    /// Last event was an End; predicting the next Start
    NextStart,
    /// Last event was a Start; predicting its End
    NextEnd,
}

impl ForecastTarget {
    /// Whether a cycle is currently in progress
    pub fn is_active(&self) -> bool {
        matches!(self, ForecastTarget::NextEnd)
    }
}

/// A complete forecast ready for presentation
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub target: ForecastTarget,
    /// Date of the event the offsets are counted from
    pub anchor: NaiveDate,
    /// Samples used for the fit, in weighting order (position 0 weighs most)
    pub samples: Vec<i64>,
    pub estimate: WeightedEstimate,
    /// One row per day of the confidence window, in date order
    pub days: Vec<DayForecast>,
}

impl Forecast {
    /// True when all samples agreed and the forecast is a single day
    pub fn is_point_mass(&self) -> bool {
        self.estimate.is_degenerate()
    }

    /// Row with the highest probability (earliest on ties)
    pub fn most_likely(&self) -> Option<&DayForecast> {
        self.days.iter().fold(None, |best: Option<&DayForecast>, day| match best {
            Some(b) if b.probability >= day.probability => Some(b),
            _ => Some(day),
        })
    }
}

/// Forecast the next transition from the full event log
pub fn forecast(log: &EventLog, config: &ForecastConfig) -> Result<Forecast, ForecastError> {
    let segmenter = CycleSegmenter::with_heuristic(log.events(), config.gaps.clone());
    let cycles = segmenter.cycles();
    tracing::debug!("Derived {} cycles from {} events", cycles.len(), log.len());

    if cycles.len() < config.min_cycles {
        return Err(ForecastError::InsufficientData {
            cycles: cycles.len(),
            required: config.min_cycles,
        });
    }

    let last = log.last().ok_or(ForecastError::InsufficientData {
        cycles: 0,
        required: config.min_cycles,
    })?;

    // Estimator weights position 0 highest; only gaps are put newest first
    let (target, samples) = match last.kind {
        EventKind::End => {
            let mut gaps = segmenter.cycle_lengths();
            gaps.reverse();
            (ForecastTarget::NextStart, gaps)
        }
        EventKind::Start => (ForecastTarget::NextEnd, segmenter.period_lengths()),
    };
    tracing::debug!("Forecasting {:?} from {} samples", target, samples.len());

    let values: Vec<f64> = samples.iter().map(|&s| s as f64).collect();
    let estimate = WeightedEstimate::compute(&values, config.decay)?;
    tracing::debug!(
        "Weighted estimate: mean={:.2} sd={:.2}",
        estimate.mean,
        estimate.sd
    );

    let renderer = DistributionRenderer::from_config(config);
    let days = renderer.render(last.date, &estimate)?;

    Ok(Forecast {
        target,
        anchor: last.date,
        samples,
        estimate,
        days,
    })
}
