use tracing::debug;

use super::types::{RangeSpec, SensitivityCurve, SensitivityGrid};
use crate::errors::{PricingError, PricingResult};
use crate::models::traits::PricingModel;
use crate::models::types::{Metric, OptionParameters};

/// Sweep one parameter, holding the rest of `base` fixed.
///
/// Cells that hit σ = 0 or T = 0 get boundary values instead of failing.
pub fn evaluate_curve<M: PricingModel>(
    model: &M,
    base: &OptionParameters,
    metric: Metric,
    range: &RangeSpec,
) -> PricingResult<SensitivityCurve> {
    base.validate()?;
    range.validate()?;

    let xs = range.values();
    let values = xs
        .iter()
        .map(|&x| model.evaluate_or_limit(metric, &range.axis.apply(base, x)))
        .collect::<PricingResult<Vec<f64>>>()?;

    debug!(
        model = model.model_name(),
        metric = %metric,
        axis = %range.axis,
        points = xs.len(),
        "evaluated sensitivity curve"
    );

    Ok(SensitivityCurve {
        metric,
        axis: range.axis,
        xs,
        values,
    })
}

/// Sweep two parameters over a grid, holding the rest of `base` fixed.
///
/// Rows follow `y_range`, columns follow `x_range`. Every cell is an independent
/// scalar evaluation.
pub fn evaluate_grid<M: PricingModel>(
    model: &M,
    base: &OptionParameters,
    metric: Metric,
    x_range: &RangeSpec,
    y_range: &RangeSpec,
) -> PricingResult<SensitivityGrid> {
    base.validate()?;
    x_range.validate()?;
    y_range.validate()?;
    if x_range.axis == y_range.axis {
        return Err(PricingError::invalid_range(format!(
            "grid axes must differ, both are {}",
            x_range.axis
        )));
    }

    let x_values = x_range.values();
    let y_values = y_range.values();

    let mut values = Vec::with_capacity(y_values.len());
    for &y in &y_values {
        let row_params = y_range.axis.apply(base, y);
        let row = x_values
            .iter()
            .map(|&x| model.evaluate_or_limit(metric, &x_range.axis.apply(&row_params, x)))
            .collect::<PricingResult<Vec<f64>>>()?;
        values.push(row);
    }

    debug!(
        model = model.model_name(),
        metric = %metric,
        x_axis = %x_range.axis,
        y_axis = %y_range.axis,
        rows = y_values.len(),
        cols = x_values.len(),
        "evaluated sensitivity grid"
    );

    Ok(SensitivityGrid {
        metric,
        x_axis: x_range.axis,
        y_axis: y_range.axis,
        x_values,
        y_values,
        values,
    })
}

/// Delta, gamma, theta and vega curves over one range.
pub fn greek_curves<M: PricingModel>(
    model: &M,
    base: &OptionParameters,
    range: &RangeSpec,
) -> PricingResult<Vec<SensitivityCurve>> {
    Metric::GREEKS
        .iter()
        .map(|&metric| evaluate_curve(model, base, metric, range))
        .collect()
}
