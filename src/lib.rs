//! # bs-pricer: Black-Scholes Option Pricing and Sensitivity Analysis
//!
//! `bs-pricer` evaluates the Black-Scholes closed-form formula for European calls
//! and puts, together with their first and second order sensitivities, and sweeps
//! those quantities over parameter ranges to build heatmaps and Greek curves.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: closed-form price, delta, gamma, theta and vega
//! - **Boundary Handling**: intrinsic / limit values for zero volatility or expiry
//! - **Sensitivity Sweeps**: 1-D curves and 2-D grids over any two parameters
//! - **Rendering**: annotated SVG heatmaps, Greek panels and CSV export
//!
//! ## Conventions
//!
//! - Rates are continuously compounded
//! - Theta is reported per calendar day (annual value / 365)
//! - Vega is per unit of volatility (1.00 = 100 vol points)
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::{evaluate_option, OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call)?;
//! let report = evaluate_option(&params)?;
//! assert!((report.price - 10.4506).abs() < 1e-4);
//! assert!((report.greeks.delta - 0.6368).abs() < 1e-4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration Presets
//!
//! The [`default_configs`] module mirrors the interactive pricer defaults:
//! - `standard()`: 10x10 heatmap, 100-point curves
//! - `fine()`: 25x25 heatmap, 250-point curves
//! - `coarse()`: 5x5 heatmap, 20-point curves

// ================================================================================================
// MODULES
// ================================================================================================

pub mod errors;
pub mod models;
pub mod render;
pub mod sensitivity;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use errors::{PricingError, PricingResult};
pub use models::bs::{
    delta, evaluate, evaluate_or_limit, gamma, greeks, greeks_or_limit, intrinsic_value,
    norm_cdf, norm_pdf, price, theta, value, vega, DAYS_PER_YEAR,
};
pub use models::traits::PricingModel;
pub use models::BlackScholes;
pub use models::types::{Greeks, Metric, OptionParameters, OptionType};
pub use sensitivity::config::AppConfig;
pub use sensitivity::{
    evaluate_curve, evaluate_grid, greek_curves, Axis, RangeSpec, SensitivityCurve,
    SensitivityGrid,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured application settings.
///
/// # Available Configurations
///
/// - [`standard()`]: defaults of the interactive pricer
/// - [`fine()`]: dense grids for presentation
/// - [`coarse()`]: small grids for quick checks
pub mod default_configs {
    use crate::sensitivity::config::AppConfig;

    /// At-the-money one-year call, 20% volatility, 5% rate.
    ///
    /// Heatmap over 0.5x..1.5x spot and 10%..50% volatility on a 10x10 grid;
    /// Greek curves with 100 points over the same spot range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_pricer::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.heatmap.steps, 10);
    /// ```
    pub fn standard() -> AppConfig {
        AppConfig::standard()
    }

    /// Same inputs as [`standard()`] with a 25x25 heatmap and 250-point curves.
    pub fn fine() -> AppConfig {
        AppConfig::fine()
    }

    /// Same inputs as [`standard()`] with a 5x5 heatmap and 20-point curves.
    pub fn coarse() -> AppConfig {
        AppConfig::coarse()
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Option<AppConfig> {
        match name.to_lowercase().as_str() {
            "standard" => Some(standard()),
            "fine" => Some(fine()),
            "coarse" => Some(coarse()),
            _ => None,
        }
    }
}

// ================================================================================================
// HIGH-LEVEL API
// ================================================================================================

/// Price and Greeks for one option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingReport {
    pub params: OptionParameters,
    /// Option value (boundary value when volatility or time is zero)
    pub price: f64,
    pub greeks: Greeks,
    /// True when boundary values were substituted for the closed form
    pub boundary: bool,
}

/// Price and Greeks, falling back to boundary values for degenerate inputs.
///
/// # Errors
///
/// [`PricingError::Domain`] if `params` violates its invariants (non-positive
/// spot or strike, negative volatility or time, non-finite values).
pub fn evaluate_option(params: &OptionParameters) -> PricingResult<PricingReport> {
    Ok(PricingReport {
        params: *params,
        price: value(params)?,
        greeks: greeks_or_limit(params)?,
        boundary: params.is_degenerate(),
    })
}

/// Option price over the configured spot x volatility grid.
pub fn price_heatmap(config: &AppConfig) -> Result<SensitivityGrid> {
    let params = config.option_parameters()?;
    let grid = evaluate_grid(
        &BlackScholes,
        &params,
        Metric::Price,
        &config.heatmap_spot_range()?,
        &config.heatmap_vol_range()?,
    )?;
    Ok(grid)
}

/// Delta, gamma, theta and vega against spot at the configured volatility.
pub fn spot_greek_curves(config: &AppConfig) -> Result<Vec<SensitivityCurve>> {
    let params = config.option_parameters()?;
    let curves = greek_curves(&BlackScholes, &params, &config.curve_spot_range()?)?;
    Ok(curves)
}

/// Files written by [`generate_report`]
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub summary: PricingReport,
    pub heatmap_svg: PathBuf,
    pub greeks_svg: PathBuf,
    pub heatmap_csv: Option<PathBuf>,
}

/// Evaluate the configured option and write the heatmap and Greek figures.
///
/// Creates the output directory if needed. Writes `price_heatmap.svg`,
/// `greeks.svg` and, when `output.csv` is set, `price_heatmap.csv`.
pub fn generate_report(config: &AppConfig) -> Result<ReportArtifacts> {
    config.validate()?;
    let params = config.option_parameters()?;
    let summary = evaluate_option(&params)?;

    let dir = &config.output.directory;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let grid = price_heatmap(config)?;
    let heatmap_svg = dir.join("price_heatmap.svg");
    render::render_heatmap(
        &grid,
        &heatmap_svg,
        &format!("{} Option Price Heatmap", params.option_type),
    )?;
    info!(path = %heatmap_svg.display(), rows = grid.y_values.len(), cols = grid.x_values.len(), "wrote price heatmap");

    let curves = spot_greek_curves(config)?;
    let greeks_svg = dir.join("greeks.svg");
    render::render_greek_curves(&curves, &greeks_svg)?;
    info!(path = %greeks_svg.display(), points = config.curves.points, "wrote greek curves");

    let heatmap_csv = if config.output.csv {
        let path = dir.join("price_heatmap.csv");
        render::write_grid_csv(&grid, &path)?;
        info!(path = %path.display(), "wrote heatmap csv");
        Some(path)
    } else {
        None
    };

    Ok(ReportArtifacts {
        summary,
        heatmap_svg,
        greeks_svg,
        heatmap_csv,
    })
}
