use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

use crate::models::types::Metric;
use crate::sensitivity::SensitivityCurve;

fn line_colour(metric: Metric) -> RGBColor {
    match metric {
        Metric::Delta => CYAN,
        Metric::Gamma => MAGENTA,
        Metric::Theta => RGBColor(204, 163, 0),
        Metric::Vega => GREEN,
        Metric::Price => BLUE,
    }
}

/// y-range with 5% padding; flat curves get a unit band.
fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if !span.is_finite() || span.abs() < 1e-12 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - span * 0.05, hi + span * 0.05)
}

/// Render up to four curves as a 2x2 panel of "<metric> vs <axis>" charts.
pub fn render_greek_curves(curves: &[SensitivityCurve], path: &Path) -> Result<()> {
    if curves.is_empty() {
        anyhow::bail!("No curves to render");
    }

    let root = SVGBackend::new(path, (1400, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    for (area, curve) in panels.iter().zip(curves) {
        let (x_lo, x_hi) = match (curve.xs.first(), curve.xs.last()) {
            (Some(&lo), Some(&hi)) if hi > lo => (lo, hi),
            _ => anyhow::bail!("{} curve needs at least two distinct points", curve.metric),
        };
        let (v_lo, v_hi) = curve.value_range();
        let (y_lo, y_hi) = padded_range(v_lo, v_hi);

        let mut chart = ChartBuilder::on(area)
            .margin(15)
            .caption(
                format!("{} vs {}", curve.metric, curve.axis.name()),
                ("sans-serif", 22),
            )
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .x_desc(curve.axis.label())
            .y_desc(curve.metric.label())
            .draw()?;

        chart.draw_series(std::iter::once(PathElement::new(
            curve.points().collect::<Vec<_>>(),
            line_colour(curve.metric).stroke_width(2),
        )))?;
    }

    root.present()
        .with_context(|| format!("Failed to write curves to {}", path.display()))?;
    Ok(())
}
