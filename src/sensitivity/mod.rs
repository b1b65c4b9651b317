//! Sensitivity sweeps
//!
//! Evaluates a pricing model over 1-D ranges (Greek-vs-spot curves) and 2-D
//! grids (spot x volatility heatmaps). Cells are independent scalar evaluations.

pub mod config;
pub mod grid;
pub mod types;

pub use grid::*;
pub use types::*;
