use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::types::{Axis, RangeSpec};
use crate::models::types::{OptionParameters, OptionType};

/// Option inputs as they appear in the config file
#[derive(Debug, Clone, Deserialize)]
pub struct OptionConfig {
    #[serde(default = "default_spot")]
    pub spot: f64,

    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Time to expiry in years
    #[serde(default = "default_time_to_expiry")]
    pub time_to_expiry: f64,

    #[serde(default = "default_volatility")]
    pub volatility: f64,

    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    #[serde(default)]
    pub option_type: OptionType,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            time_to_expiry: default_time_to_expiry(),
            volatility: default_volatility(),
            risk_free_rate: default_risk_free_rate(),
            option_type: OptionType::default(),
        }
    }
}

/// Spot x volatility price heatmap bounds
#[derive(Debug, Clone, Deserialize)]
pub struct HeatmapConfig {
    /// Lower spot bound; half the configured spot when absent
    #[serde(default)]
    pub spot_min: Option<f64>,

    /// Upper spot bound; 1.5x the configured spot when absent
    #[serde(default)]
    pub spot_max: Option<f64>,

    #[serde(default = "default_vol_min")]
    pub vol_min: f64,

    #[serde(default = "default_vol_max")]
    pub vol_max: f64,

    /// Grid points per axis
    #[serde(default = "default_heatmap_steps")]
    pub steps: usize,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            spot_min: None,
            spot_max: None,
            vol_min: default_vol_min(),
            vol_max: default_vol_max(),
            steps: default_heatmap_steps(),
        }
    }
}

/// Greek-vs-spot curve sampling
#[derive(Debug, Clone, Deserialize)]
pub struct CurvesConfig {
    #[serde(default = "default_curve_points")]
    pub points: usize,
}

impl Default for CurvesConfig {
    fn default() -> Self {
        Self {
            points: default_curve_points(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// Also write the heatmap grid as CSV
    #[serde(default)]
    pub csv: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            csv: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub option: OptionConfig,

    #[serde(default)]
    pub heatmap: HeatmapConfig,

    #[serde(default)]
    pub curves: CurvesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Defaults of the interactive pricer: ATM one-year option, 20% vol, 5% rate,
    /// 10x10 heatmap and 100-point Greek curves.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Denser grids for presentation output
    pub fn fine() -> Self {
        Self {
            heatmap: HeatmapConfig {
                steps: 25,
                ..HeatmapConfig::default()
            },
            curves: CurvesConfig { points: 250 },
            ..Self::default()
        }
    }

    /// Small grids for quick checks
    pub fn coarse() -> Self {
        Self {
            heatmap: HeatmapConfig {
                steps: 5,
                ..HeatmapConfig::default()
            },
            curves: CurvesConfig { points: 20 },
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(s).context("Failed to parse TOML config")?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Validated option parameters.
    pub fn option_parameters(&self) -> Result<OptionParameters> {
        let o = &self.option;
        OptionParameters::new(
            o.spot,
            o.strike,
            o.time_to_expiry,
            o.volatility,
            o.risk_free_rate,
            o.option_type,
        )
        .context("Invalid option parameters")
    }

    /// Spot axis of the heatmap, defaulting to 0.5x..1.5x spot.
    pub fn heatmap_spot_range(&self) -> Result<RangeSpec> {
        let min = self.heatmap.spot_min.unwrap_or(self.option.spot * 0.5);
        let max = self.heatmap.spot_max.unwrap_or(self.option.spot * 1.5);
        RangeSpec::new(Axis::Spot, min, max, self.heatmap.steps).context("Invalid heatmap spot range")
    }

    pub fn heatmap_vol_range(&self) -> Result<RangeSpec> {
        RangeSpec::new(
            Axis::Volatility,
            self.heatmap.vol_min,
            self.heatmap.vol_max,
            self.heatmap.steps,
        )
        .context("Invalid heatmap volatility range")
    }

    /// Spot axis of the Greek curves; same bounds as the heatmap.
    pub fn curve_spot_range(&self) -> Result<RangeSpec> {
        let heatmap = self.heatmap_spot_range()?;
        RangeSpec::new(Axis::Spot, heatmap.min, heatmap.max, self.curves.points)
            .context("Invalid curve range")
    }

    pub fn validate(&self) -> Result<()> {
        self.option_parameters()?;
        if self.heatmap.vol_min < 0.0 || self.heatmap.vol_max > 1.0 {
            return Err(anyhow!(
                "Heatmap volatility must lie within [0, 1], got [{}, {}]",
                self.heatmap.vol_min,
                self.heatmap.vol_max
            ));
        }
        self.heatmap_spot_range()?;
        self.heatmap_vol_range()?;
        self.curve_spot_range()?;
        Ok(())
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_time_to_expiry() -> f64 {
    1.0
}

fn default_volatility() -> f64 {
    0.2
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_vol_min() -> f64 {
    0.1
}

fn default_vol_max() -> f64 {
    0.5
}

fn default_heatmap_steps() -> usize {
    10
}

fn default_curve_points() -> usize {
    100
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}
