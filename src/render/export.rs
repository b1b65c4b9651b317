use anyhow::{Context, Result};
use std::path::Path;

use crate::sensitivity::SensitivityGrid;

/// Write `grid` as CSV: a header of x values, then one row per y value.
pub fn write_grid_csv(grid: &SensitivityGrid, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let corner = format!("{} \\ {}", grid.y_axis.name(), grid.x_axis.name());
    let header = std::iter::once(corner).chain(grid.x_values.iter().map(|x| x.to_string()));
    writer.write_record(header)?;

    for (y, row) in grid.y_values.iter().zip(&grid.values) {
        let record = std::iter::once(y.to_string()).chain(row.iter().map(|v| v.to_string()));
        writer.write_record(record)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
