//! Discretised normal distribution over day offsets
//!
//! Offset `i` gets the probability mass of the unit interval centred on it,
//! `Φ((i-μ+½)/σ) - Φ((i-μ-½)/σ)`. Only the central `1 - 2·tail` of the mass
//! is shown, and every row carries a bar scaled so the modal day is full
//! width.

use super::{ForecastConfig, ForecastError, WeightedEstimate};
use chrono::{Duration, NaiveDate};
use statrs::distribution::{ContinuousCDF, Normal};

/// Character bars are drawn with
pub const BAR_CHAR: char = '\u{25A0}';

/// One day of the forecast window
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    /// Days after the anchor event
    pub offset: i64,
    pub date: NaiveDate,
    /// Probability mass for this day, 0.0..=1.0
    pub probability: f64,
    /// Probability in percent, rounded to one decimal
    pub percent: f64,
    /// Bar length, 0..=bar width
    pub score: u32,
}

impl DayForecast {
    pub fn bar(&self) -> String {
        std::iter::repeat(BAR_CHAR).take(self.score as usize).collect()
    }
}

/// Turns a fitted estimate into per-day forecast rows
#[derive(Debug, Clone)]
pub struct DistributionRenderer {
    horizon: usize,
    tail: f64,
    bar_width: u32,
}

impl Default for DistributionRenderer {
    fn default() -> Self {
        Self::from_config(&ForecastConfig::default())
    }
}

impl DistributionRenderer {
    pub fn from_config(config: &ForecastConfig) -> Self {
        Self {
            horizon: config.horizon_days.max(1),
            tail: config.tail_probability,
            bar_width: config.bar_width,
        }
    }

    /// Probability mass for each offset in `[0, horizon)`
    pub fn probabilities(&self, estimate: &WeightedEstimate) -> Result<Vec<f64>, ForecastError> {
        let normal = normal(estimate)?;
        Ok((0..self.horizon)
            .map(|i| {
                let x = i as f64;
                normal.cdf(x + 0.5) - normal.cdf(x - 0.5)
            })
            .collect())
    }

    /// Inclusive offset range holding the central mass, clamped to the horizon
    pub fn window(&self, estimate: &WeightedEstimate) -> Result<(usize, usize), ForecastError> {
        if !(self.tail > 0.0 && self.tail < 0.5) {
            return Err(ForecastError::InvalidConfig(format!(
                "tail_probability must be between 0 and 0.5, got {}",
                self.tail
            )));
        }
        let normal = normal(estimate)?;
        let start = normal.inverse_cdf(self.tail).round_ties_even();
        let end = normal.inverse_cdf(1.0 - self.tail).round_ties_even();
        Ok((self.clamp_offset(start), self.clamp_offset(end)))
    }

    /// Bar lengths, scaled so the largest probability gets the full width
    pub fn scores(&self, probabilities: &[f64]) -> Vec<u32> {
        let highest = probabilities.iter().copied().fold(0.0, f64::max);
        if highest <= 0.0 {
            tracing::warn!("No probability mass inside the {}-day horizon", self.horizon);
            return vec![0; probabilities.len()];
        }
        probabilities
            .iter()
            .map(|p| (p / highest * self.bar_width as f64).round_ties_even() as u32)
            .collect()
    }

    /// Forecast rows for the confidence window, counted from `anchor`
    pub fn render(
        &self,
        anchor: NaiveDate,
        estimate: &WeightedEstimate,
    ) -> Result<Vec<DayForecast>, ForecastError> {
        if estimate.is_degenerate() {
            return Ok(vec![self.point_mass(anchor, estimate)]);
        }

        let probabilities = self.probabilities(estimate)?;
        let scores = self.scores(&probabilities);
        let (start, end) = self.window(estimate)?;

        Ok((start..=end)
            .map(|i| DayForecast {
                offset: i as i64,
                date: anchor + Duration::days(i as i64),
                probability: probabilities[i],
                percent: round_percent(probabilities[i]),
                score: scores[i],
            })
            .collect())
    }

    // Zero spread: the whole mass sits on the (rounded) mean
    fn point_mass(&self, anchor: NaiveDate, estimate: &WeightedEstimate) -> DayForecast {
        let offset = self.clamp_offset(estimate.mean.round_ties_even()) as i64;
        DayForecast {
            offset,
            date: anchor + Duration::days(offset),
            probability: 1.0,
            percent: 100.0,
            score: self.bar_width,
        }
    }

    fn clamp_offset(&self, offset: f64) -> usize {
        let max = (self.horizon - 1) as f64;
        if !(0.0..=max).contains(&offset) {
            tracing::warn!("Forecast offset {} clamped to [0, {}]", offset, max);
        }
        // `as` saturates and maps NaN to 0
        offset.clamp(0.0, max) as usize
    }
}

fn normal(estimate: &WeightedEstimate) -> Result<Normal, ForecastError> {
    Normal::new(estimate.mean, estimate.sd).map_err(|e| ForecastError::InvalidEstimate {
        mean: estimate.mean,
        sd: estimate.sd,
        reason: format!("{:?}", e),
    })
}

fn round_percent(probability: f64) -> f64 {
    (probability * 1000.0).round_ties_even() / 10.0
}
