// Closed-form Black-Scholes pricing and Greeks for European options without
// dividends. Rates are continuously compounded; theta is reported per calendar
// day and vega per unit of volatility.

use std::f64::consts::{PI, SQRT_2};

use tracing::trace;

use crate::errors::{PricingError, PricingResult};
use crate::models::types::{Greeks, Metric, OptionParameters, OptionType};

/// Calendar days used to convert annualized theta to a daily figure.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Standard normal cumulative distribution function.
///
/// Uses `erfc` rather than `1 + erf` so the lower tail keeps full relative precision.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

fn require_closed_form(params: &OptionParameters) -> PricingResult<()> {
    params.validate()?;
    if params.volatility <= 0.0 {
        return Err(PricingError::domain(format!(
            "volatility (sigma={}) must be > 0 for the closed-form formula",
            params.volatility
        )));
    }
    if params.time_to_expiry <= 0.0 {
        return Err(PricingError::domain(format!(
            "time to expiry (T={}) must be > 0 for the closed-form formula",
            params.time_to_expiry
        )));
    }
    Ok(())
}

/// Black-Scholes d1 and d2.
#[allow(non_snake_case)]
pub fn d1_d2(params: &OptionParameters) -> PricingResult<(f64, f64)> {
    require_closed_form(params)?;
    let OptionParameters {
        spot: S,
        strike: K,
        time_to_expiry: T,
        volatility: sigma,
        risk_free_rate: r,
        ..
    } = *params;

    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / vol_sqrt_t;
    Ok((d1, d1 - vol_sqrt_t))
}

/// Price of a European option under Black-Scholes assumptions.
///
/// Fails with [`PricingError::Domain`] when volatility or time to expiry is zero;
/// use [`value`] to get the boundary value in that case.
pub fn price(params: &OptionParameters) -> PricingResult<f64> {
    let (d1, d2) = d1_d2(params)?;
    let df_strike = params.strike * params.discount_factor();

    let price = match params.option_type {
        OptionType::Call => params.spot * norm_cdf(d1) - df_strike * norm_cdf(d2),
        OptionType::Put => df_strike * norm_cdf(-d2) - params.spot * norm_cdf(-d1),
    };
    Ok(price)
}

/// dV/dS: Φ(d1) for a call, Φ(d1) - 1 for a put.
pub fn delta(params: &OptionParameters) -> PricingResult<f64> {
    let (d1, _) = d1_d2(params)?;
    Ok(match params.option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    })
}

/// d²V/dS², identical for calls and puts.
pub fn gamma(params: &OptionParameters) -> PricingResult<f64> {
    let (d1, _) = d1_d2(params)?;
    Ok(norm_pdf(d1) / (params.spot * params.volatility * params.time_to_expiry.sqrt()))
}

/// Time decay per calendar day. Negative when the option loses value as time passes.
pub fn theta(params: &OptionParameters) -> PricingResult<f64> {
    let (d1, d2) = d1_d2(params)?;
    Ok(annual_theta(params, d1, d2) / DAYS_PER_YEAR)
}

/// dV/dσ per unit of volatility, identical for calls and puts.
pub fn vega(params: &OptionParameters) -> PricingResult<f64> {
    let (d1, _) = d1_d2(params)?;
    Ok(params.spot * norm_pdf(d1) * params.time_to_expiry.sqrt())
}

fn annual_theta(params: &OptionParameters, d1: f64, d2: f64) -> f64 {
    let decay = -params.spot * norm_pdf(d1) * params.volatility
        / (2.0 * params.time_to_expiry.sqrt());
    let carry = params.risk_free_rate * params.strike * params.discount_factor();
    match params.option_type {
        OptionType::Call => decay - carry * norm_cdf(d2),
        OptionType::Put => decay + carry * norm_cdf(-d2),
    }
}

/// All four Greeks from a single d1/d2 evaluation.
pub fn greeks(params: &OptionParameters) -> PricingResult<Greeks> {
    let (d1, d2) = d1_d2(params)?;
    let sqrt_t = params.time_to_expiry.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let delta = match params.option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    };

    Ok(Greeks {
        delta,
        gamma: pdf_d1 / (params.spot * params.volatility * sqrt_t),
        theta: annual_theta(params, d1, d2) / DAYS_PER_YEAR,
        vega: params.spot * pdf_d1 * sqrt_t,
    })
}

/// Payoff if exercised now: max(S-K, 0) for a call, max(K-S, 0) for a put.
pub fn intrinsic_value(params: &OptionParameters) -> f64 {
    params.option_type.payoff(params.spot, params.strike)
}

/// Weight of the in-the-money branch in the degenerate limit: 1 when spot is
/// above the discounted strike, 0 below, 0.5 exactly at it.
fn degenerate_call_weight(params: &OptionParameters) -> f64 {
    let df_strike = params.strike * params.discount_factor();
    if params.spot > df_strike {
        1.0
    } else if params.spot < df_strike {
        0.0
    } else {
        0.5
    }
}

/// Option value that also covers the zero-volatility and zero-time boundaries.
///
/// * `T = 0`: intrinsic value.
/// * `σ = 0, T > 0`: the σ → 0⁺ limit, i.e. the payoff against the discounted strike.
pub fn value(params: &OptionParameters) -> PricingResult<f64> {
    params.validate()?;
    if !params.is_degenerate() {
        return price(params);
    }

    let df_strike = params.strike * params.discount_factor();
    let boundary = params.option_type.payoff(params.spot, df_strike);
    trace!(
        sigma = params.volatility,
        t = params.time_to_expiry,
        boundary,
        "degenerate inputs, using boundary value"
    );
    Ok(boundary)
}

/// Greeks that also cover the zero-volatility and zero-time boundaries.
///
/// Gamma and vega vanish, delta becomes a step in moneyness against the
/// discounted strike, and theta reduces to the carry on the discounted strike
/// (zero once expired).
pub fn greeks_or_limit(params: &OptionParameters) -> PricingResult<Greeks> {
    params.validate()?;
    if !params.is_degenerate() {
        return greeks(params);
    }

    let w = degenerate_call_weight(params);
    let carry = if params.time_to_expiry > 0.0 {
        params.risk_free_rate * params.strike * params.discount_factor() / DAYS_PER_YEAR
    } else {
        0.0
    };

    let (delta, theta) = match params.option_type {
        OptionType::Call => (w, -carry * w),
        OptionType::Put => (w - 1.0, carry * (1.0 - w)),
    };

    Ok(Greeks {
        delta,
        gamma: 0.0,
        theta,
        vega: 0.0,
    })
}

/// Evaluate one metric with the closed-form formula.
pub fn evaluate(metric: Metric, params: &OptionParameters) -> PricingResult<f64> {
    match metric {
        Metric::Price => price(params),
        Metric::Delta => delta(params),
        Metric::Gamma => gamma(params),
        Metric::Theta => theta(params),
        Metric::Vega => vega(params),
    }
}

/// Evaluate one metric, substituting boundary values for degenerate inputs.
pub fn evaluate_or_limit(metric: Metric, params: &OptionParameters) -> PricingResult<f64> {
    match metric {
        Metric::Price => value(params),
        greek => greeks_or_limit(params).map(|g| g.get(greek).unwrap_or_default()),
    }
}
