//! Error types for the pricing engine and sensitivity sweeps.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid or degenerate model input (non-positive spot/strike, negative
    /// volatility or time, zero volatility/time for a closed-form evaluator).
    #[error("Domain error: {0}")]
    Domain(String),

    /// Malformed sensitivity range specification.
    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
