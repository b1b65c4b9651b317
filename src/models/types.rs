use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{PricingError, PricingResult};

/// Option type: call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    #[serde(alias = "Call", alias = "CALL")]
    Call,
    #[serde(alias = "Put", alias = "PUT")]
    Put,
}

impl OptionType {
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Payoff at expiry for the given spot and strike.
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> PricingResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::domain(format!(
                "option type must be 'call' or 'put', got '{}'",
                other
            ))),
        }
    }
}

/// Inputs to a single Black-Scholes evaluation.
///
/// Build with [`OptionParameters::new`] to get validation up front. Values built
/// by struct literal or deserialization can be checked with [`validate`].
///
/// [`validate`]: OptionParameters::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Current price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time_to_expiry: f64,
    /// Annualized volatility (as decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
    /// Continuously compounded annual risk-free rate
    pub risk_free_rate: f64,
    pub option_type: OptionType,
}

fn validate_option_params(spot: f64, strike: f64, t: f64, sigma: f64, r: f64) -> PricingResult<()> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(PricingError::domain(format!(
            "spot (S={}) must be > 0 and finite",
            spot
        )));
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(PricingError::domain(format!(
            "strike (K={}) must be > 0 and finite",
            strike
        )));
    }
    if t < 0.0 || !t.is_finite() {
        return Err(PricingError::domain(format!(
            "time to expiry (T={}) must be >= 0 and finite",
            t
        )));
    }
    if sigma < 0.0 || !sigma.is_finite() {
        return Err(PricingError::domain(format!(
            "volatility (sigma={}) must be >= 0 and finite",
            sigma
        )));
    }
    if !r.is_finite() {
        return Err(PricingError::domain(format!(
            "risk-free rate (r={}) must be finite",
            r
        )));
    }
    Ok(())
}

impl OptionParameters {
    /// Creates a new parameter set with validation.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        validate_option_params(spot, strike, time_to_expiry, volatility, risk_free_rate)?;

        Ok(Self {
            spot,
            strike,
            time_to_expiry,
            volatility,
            risk_free_rate,
            option_type,
        })
    }

    pub fn validate(&self) -> PricingResult<()> {
        validate_option_params(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.volatility,
            self.risk_free_rate,
        )
    }

    /// True when d1/d2 are undefined (zero volatility or zero time).
    pub fn is_degenerate(&self) -> bool {
        self.volatility <= 0.0 || self.time_to_expiry <= 0.0
    }

    /// Same parameters with the other option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Discount factor e^(-rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }
}

/// First and second order sensitivities from one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// dV/dS
    pub delta: f64,
    /// d²V/dS²
    pub gamma: f64,
    /// dV/dt per calendar day
    pub theta: f64,
    /// dV/dσ per unit of volatility
    pub vega: f64,
}

impl Greeks {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Price => None,
            Metric::Delta => Some(self.delta),
            Metric::Gamma => Some(self.gamma),
            Metric::Theta => Some(self.theta),
            Metric::Vega => Some(self.vega),
        }
    }
}

/// Quantity produced by an evaluation, used to tag sweep outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Price,
    Delta,
    Gamma,
    Theta,
    Vega,
}

impl Metric {
    pub const GREEKS: [Metric; 4] = [Metric::Delta, Metric::Gamma, Metric::Theta, Metric::Vega];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Price => "Price",
            Metric::Delta => "Delta",
            Metric::Gamma => "Gamma",
            Metric::Theta => "Theta",
            Metric::Vega => "Vega",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = PricingError;

    fn from_str(s: &str) -> PricingResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(Metric::Price),
            "delta" => Ok(Metric::Delta),
            "gamma" => Ok(Metric::Gamma),
            "theta" => Ok(Metric::Theta),
            "vega" => Ok(Metric::Vega),
            other => Err(PricingError::domain(format!("unknown metric '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_params_validation() {
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call).is_ok());
        // Degenerate but valid
        assert!(OptionParameters::new(100.0, 100.0, 0.0, 0.0, 0.05, OptionType::Put).is_ok());
        // Negative rates are allowed
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.2, -0.01, OptionType::Call).is_ok());

        assert!(OptionParameters::new(0.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call).is_err()); // zero spot
        assert!(OptionParameters::new(100.0, -1.0, 1.0, 0.2, 0.05, OptionType::Call).is_err()); // negative strike
        assert!(OptionParameters::new(100.0, 100.0, -0.5, 0.2, 0.05, OptionType::Call).is_err()); // negative time
        assert!(OptionParameters::new(100.0, 100.0, 1.0, -0.2, 0.05, OptionType::Call).is_err()); // negative vol
        assert!(OptionParameters::new(f64::NAN, 100.0, 1.0, 0.2, 0.05, OptionType::Call).is_err());
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.2, f64::INFINITY, OptionType::Call).is_err());
    }

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" put ".parse::<OptionType>().unwrap(), OptionType::Put);
        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert!(err.is_domain());
        assert_eq!(OptionType::Put.to_string(), "Put");
    }

    #[test]
    fn test_payoff() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
    }
}
