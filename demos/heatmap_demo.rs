// Example: heatmap_demo.rs
// Sweeps call delta over spot x time to expiry and writes the result as an SVG
// heatmap and a CSV file.
//
// Usage:
//     cargo run --example heatmap_demo -- [output_dir]

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use bs_pricer::render::{render_heatmap, write_grid_csv};
use bs_pricer::{evaluate_grid, Axis, BlackScholes, Metric, OptionParameters, OptionType, RangeSpec};

fn main() -> Result<()> {
    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let base = OptionParameters::new(100.0, 100.0, 1.0, 0.25, 0.03, OptionType::Call)?;

    // Time axis starts at expiry, where delta collapses to a step
    let spot = RangeSpec::new(Axis::Spot, 70.0, 130.0, 13)?;
    let time = RangeSpec::new(Axis::TimeToExpiry, 0.0, 1.0, 11)?;
    let grid = evaluate_grid(&BlackScholes, &base, Metric::Delta, &spot, &time)?;

    let (rows, cols) = grid.shape();
    println!("Delta grid: {} rows (T) x {} cols (S)", rows, cols);
    println!("  range [{:.4}, {:.4}]", grid.min(), grid.max());

    let svg = out_dir.join("delta_heatmap.svg");
    render_heatmap(&grid, &svg, "Call Delta: Spot vs Time to Expiry")?;
    println!("Chart saved to {}", svg.display());

    let csv = out_dir.join("delta_heatmap.csv");
    write_grid_csv(&grid, &csv)?;
    println!("Grid saved to {}", csv.display());

    Ok(())
}
