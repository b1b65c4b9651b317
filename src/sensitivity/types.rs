use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{PricingError, PricingResult};
use crate::models::types::{Metric, OptionParameters};
use crate::models::utils::linspace;

/// Parameter varied by a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Spot,
    Strike,
    TimeToExpiry,
    Volatility,
    RiskFreeRate,
}

impl Axis {
    /// Axis label used on plots and CSV headers.
    pub fn label(self) -> &'static str {
        match self {
            Axis::Spot => "Underlying Price (S)",
            Axis::Strike => "Strike Price (K)",
            Axis::TimeToExpiry => "Time to Expiry (T, years)",
            Axis::Volatility => "Volatility (σ)",
            Axis::RiskFreeRate => "Risk-Free Rate (r)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Spot => "Underlying Price",
            Axis::Strike => "Strike Price",
            Axis::TimeToExpiry => "Time to Expiry",
            Axis::Volatility => "Volatility",
            Axis::RiskFreeRate => "Risk-Free Rate",
        }
    }

    /// Copy of `params` with this axis set to `x`.
    pub fn apply(self, params: &OptionParameters, x: f64) -> OptionParameters {
        let mut p = *params;
        match self {
            Axis::Spot => p.spot = x,
            Axis::Strike => p.strike = x,
            Axis::TimeToExpiry => p.time_to_expiry = x,
            Axis::Volatility => p.volatility = x,
            Axis::RiskFreeRate => p.risk_free_rate = x,
        }
        p
    }

    /// Current value of this axis in `params`.
    pub fn get(self, params: &OptionParameters) -> f64 {
        match self {
            Axis::Spot => params.spot,
            Axis::Strike => params.strike,
            Axis::TimeToExpiry => params.time_to_expiry,
            Axis::Volatility => params.volatility,
            Axis::RiskFreeRate => params.risk_free_rate,
        }
    }

    fn admits(self, x: f64) -> bool {
        match self {
            Axis::Spot | Axis::Strike => x > 0.0,
            Axis::TimeToExpiry | Axis::Volatility => x >= 0.0,
            Axis::RiskFreeRate => true,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Range of one parameter for a sweep: `steps` points from `min` to `max` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub axis: Axis,
    pub min: f64,
    pub max: f64,
    pub steps: usize,
}

impl RangeSpec {
    pub fn new(axis: Axis, min: f64, max: f64, steps: usize) -> PricingResult<Self> {
        let spec = Self {
            axis,
            min,
            max,
            steps,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> PricingResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PricingError::invalid_range(format!(
                "{}: bounds must be finite (min={}, max={})",
                self.axis, self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(PricingError::invalid_range(format!(
                "{}: minimum ({}) must be less than maximum ({})",
                self.axis, self.min, self.max
            )));
        }
        if self.steps < 2 {
            return Err(PricingError::invalid_range(format!(
                "{}: at least 2 steps required, got {}",
                self.axis, self.steps
            )));
        }
        if !self.axis.admits(self.min) || !self.axis.admits(self.max) {
            return Err(PricingError::invalid_range(format!(
                "{}: range [{}, {}] leaves the parameter domain",
                self.axis, self.min, self.max
            )));
        }
        Ok(())
    }

    /// Evenly spaced sample points.
    pub fn values(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.steps)
    }
}

/// One-dimensional sweep result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCurve {
    pub metric: Metric,
    pub axis: Axis,
    pub xs: Vec<f64>,
    pub values: Vec<f64>,
}

impl SensitivityCurve {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.values.iter().copied())
    }

    pub fn value_range(&self) -> (f64, f64) {
        min_max(self.values.iter().copied())
    }
}

/// Two-dimensional sweep result.
///
/// `values[row][col]` is the metric at `y_values[row]`, `x_values[col]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrid {
    pub metric: Metric,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl SensitivityGrid {
    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.y_values.len(), self.x_values.len())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn min(&self) -> f64 {
        self.value_range().0
    }

    pub fn max(&self) -> f64 {
        self.value_range().1
    }

    pub fn value_range(&self) -> (f64, f64) {
        min_max(self.values.iter().flatten().copied())
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
