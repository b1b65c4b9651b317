use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use crate::sensitivity::SensitivityGrid;

// Viridis anchor colours, dark to light.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Viridis-like colour for `t` in [0, 1].
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let f = scaled - i as f64;
    let (r0, g0, b0) = VIRIDIS[i];
    let (r1, g1, b1) = VIRIDIS[i + 1];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Half the spacing between adjacent samples, used as the cell half-width.
fn half_step(values: &[f64]) -> f64 {
    match values {
        [first, second, ..] => (second - first).abs() / 2.0,
        _ => 0.5,
    }
}

/// Render `grid` as an annotated SVG heatmap.
///
/// Columns follow the grid's x axis and rows its y axis; each cell is labelled
/// with its value to two decimals.
pub fn render_heatmap(grid: &SensitivityGrid, path: &Path, title: &str) -> Result<()> {
    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        anyhow::bail!("Cannot render an empty {} grid", grid.metric);
    }

    let hx = half_step(&grid.x_values);
    let hy = half_step(&grid.y_values);
    let x_lo = grid.x_values[0] - hx;
    let x_hi = grid.x_values[cols - 1] + hx;
    let y_lo = grid.y_values[0] - hy;
    let y_hi = grid.y_values[rows - 1] + hy;

    let (v_min, v_max) = grid.value_range();
    let span = v_max - v_min;
    let normalise = |v: f64| if span > 0.0 { (v - v_min) / span } else { 0.5 };

    let root = SVGBackend::new(path, (1400, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 28))
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(cols)
        .y_labels(rows)
        .x_label_formatter(&|x| format!("{:.2}", x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .x_desc(grid.x_axis.label())
        .y_desc(grid.y_axis.label())
        .draw()?;

    let cells: Vec<(f64, f64, f64)> = grid
        .y_values
        .iter()
        .zip(&grid.values)
        .flat_map(|(&y, row)| grid.x_values.iter().zip(row).map(move |(&x, &v)| (x, y, v)))
        .collect();

    chart.draw_series(cells.iter().map(|&(x, y, v)| {
        Rectangle::new(
            [(x - hx, y - hy), (x + hx, y + hy)],
            viridis(normalise(v)).filled(),
        )
    }))?;

    let centred = Pos::new(HPos::Center, VPos::Center);
    chart.draw_series(cells.iter().map(|&(x, y, v)| {
        // Light text on the dark end of the ramp
        let ink: &'static RGBColor = if normalise(v) < 0.5 { &WHITE } else { &BLACK };
        let style = TextStyle::from(("sans-serif", 11.0).into_font())
            .pos(centred)
            .color(ink);
        Text::new(format!("{:.2}", v), (x, y), style)
    }))?;

    root.present()
        .with_context(|| format!("Failed to write heatmap to {}", path.display()))?;
    Ok(())
}
