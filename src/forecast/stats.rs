//! Recency-weighted mean and standard deviation

use super::ForecastError;

/// Spreads below this many days are treated as a single certain day
const DEGENERATE_SD: f64 = 1e-9;

/// Mean and spread fitted to a sample sequence, in days
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEstimate {
    pub mean: f64,
    pub sd: f64,
}

impl WeightedEstimate {
    /// Fit `samples`, where `samples[i]` gets weight `decay^i`.
    ///
    /// The variance uses the reliability-weights correction
    /// `Σw(x-μ)² / (V1 - V2/V1)`, which reduces to the usual unbiased sample
    /// variance when all weights are equal.
    pub fn compute(samples: &[f64], decay: f64) -> Result<Self, ForecastError> {
        if samples.len() < 2 {
            return Err(ForecastError::TooFewSamples(samples.len()));
        }

        let weights: Vec<f64> = (0..samples.len()).map(|i| decay.powi(i as i32)).collect();
        let v1: f64 = weights.iter().sum();
        let v2: f64 = weights.iter().map(|w| w * w).sum();

        // Averaging offsets from the first sample keeps equal samples exact
        let origin = samples[0];
        let mean = origin
            + samples
                .iter()
                .zip(&weights)
                .map(|(x, w)| w * (x - origin))
                .sum::<f64>()
                / v1;

        let spread: f64 = samples
            .iter()
            .zip(&weights)
            .map(|(x, w)| w * (x - mean).powi(2))
            .sum();
        let variance = spread / (v1 - v2 / v1);

        Ok(Self {
            mean,
            sd: variance.sqrt(),
        })
    }

    /// All samples agreed: there is no spread to draw a curve from
    pub fn is_degenerate(&self) -> bool {
        self.sd < DEGENERATE_SD
    }
}
