pub mod bs;
pub mod types;

/// Common traits used by pricing models
pub mod traits {
    use crate::errors::PricingResult;
    use crate::models::types::{Greeks, Metric, OptionParameters};

    /// Pricing model seam used by the sensitivity sweeps.
    ///
    /// The strict methods fail on degenerate inputs; the `_or_limit` variants
    /// substitute boundary values so sweeps can cross σ = 0 or T = 0.
    pub trait PricingModel {
        fn model_name(&self) -> &str;
        fn price(&self, params: &OptionParameters) -> PricingResult<f64>;
        fn greeks(&self, params: &OptionParameters) -> PricingResult<Greeks>;
        fn value(&self, params: &OptionParameters) -> PricingResult<f64>;
        fn greeks_or_limit(&self, params: &OptionParameters) -> PricingResult<Greeks>;

        fn evaluate_or_limit(&self, metric: Metric, params: &OptionParameters) -> PricingResult<f64> {
            match metric {
                Metric::Price => self.value(params),
                greek => self
                    .greeks_or_limit(params)
                    .map(|g| g.get(greek).unwrap_or_default()),
            }
        }
    }
}

/// Black-Scholes as a [`traits::PricingModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl traits::PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn price(&self, params: &types::OptionParameters) -> crate::errors::PricingResult<f64> {
        bs::price(params)
    }

    fn greeks(&self, params: &types::OptionParameters) -> crate::errors::PricingResult<types::Greeks> {
        bs::greeks(params)
    }

    fn value(&self, params: &types::OptionParameters) -> crate::errors::PricingResult<f64> {
        bs::value(params)
    }

    fn greeks_or_limit(
        &self,
        params: &types::OptionParameters,
    ) -> crate::errors::PricingResult<types::Greeks> {
        bs::greeks_or_limit(params)
    }

    fn evaluate_or_limit(
        &self,
        metric: types::Metric,
        params: &types::OptionParameters,
    ) -> crate::errors::PricingResult<f64> {
        bs::evaluate_or_limit(metric, params)
    }
}

/// Numeric helpers shared by the sweeps
pub mod utils {
    /// `n` points evenly spaced over `[start, end]`, both ends included.
    pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                    .collect()
            }
        }
    }
}
