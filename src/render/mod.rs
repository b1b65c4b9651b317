//! SVG figures and CSV export for sensitivity results

pub mod curves;
pub mod export;
pub mod heatmap;

pub use curves::render_greek_curves;
pub use export::write_grid_csv;
pub use heatmap::{render_heatmap, viridis};
