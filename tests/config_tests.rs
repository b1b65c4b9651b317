
use bs_pricer::{default_configs, AppConfig, Axis, OptionType};
use std::path::PathBuf;
use test_utils::scratch_dir;

/// Defaults reproduce the interactive pricer's initial inputs.
#[test]
fn test_standard_defaults() {
    let config = default_configs::standard();
    let p = config.option_parameters().unwrap();
    assert_eq!(p.spot, 100.0);
    assert_eq!(p.strike, 100.0);
    assert_eq!(p.time_to_expiry, 1.0);
    assert_eq!(p.volatility, 0.2);
    assert_eq!(p.risk_free_rate, 0.05);
    assert_eq!(p.option_type, OptionType::Call);

    let spot = config.heatmap_spot_range().unwrap();
    assert_eq!(spot.axis, Axis::Spot);
    assert_eq!((spot.min, spot.max, spot.steps), (50.0, 150.0, 10));

    let vol = config.heatmap_vol_range().unwrap();
    assert_eq!((vol.min, vol.max, vol.steps), (0.1, 0.5, 10));

    let curve = config.curve_spot_range().unwrap();
    assert_eq!((curve.min, curve.max, curve.steps), (50.0, 150.0, 100));

    assert_eq!(config.output.directory, PathBuf::from("out"));
    assert!(!config.output.csv);
    assert!(config.validate().is_ok());
}

/// Presets differ only in grid density.
#[test]
fn test_presets() {
    let fine = default_configs::fine();
    assert_eq!(fine.heatmap.steps, 25);
    assert_eq!(fine.curves.points, 250);

    let coarse = default_configs::coarse();
    assert_eq!(coarse.heatmap.steps, 5);
    assert_eq!(coarse.curves.points, 20);

    assert!(default_configs::by_name("FINE").is_some());
    assert!(default_configs::by_name("ultra").is_none());
}

/// Partial TOML: missing fields fall back to defaults, spot bounds follow spot.
#[test]
fn test_partial_toml() {
    let config = AppConfig::from_toml_str(
        r#"
        [option]
        spot = 40.0
        option_type = "Put"

        [heatmap]
        steps = 6
        "#,
    )
    .unwrap();

    let p = config.option_parameters().unwrap();
    assert_eq!(p.spot, 40.0);
    assert_eq!(p.strike, 100.0);
    assert_eq!(p.option_type, OptionType::Put);

    let spot = config.heatmap_spot_range().unwrap();
    assert_eq!((spot.min, spot.max, spot.steps), (20.0, 60.0, 6));
    assert_eq!(config.curves.points, 100);
}

/// A full file round-trips through from_file.
#[test]
fn test_full_toml_from_file() {
    let dir = scratch_dir("config");
    let path = dir.join("pricer.toml");
    std::fs::write(
        &path,
        r#"
        [option]
        spot = 120.0
        strike = 110.0
        time_to_expiry = 0.5
        volatility = 0.35
        risk_free_rate = 0.01
        option_type = "call"

        [heatmap]
        spot_min = 90.0
        spot_max = 150.0
        vol_min = 0.05
        vol_max = 0.9
        steps = 12

        [curves]
        points = 50

        [output]
        directory = "figures"
        csv = true
        "#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.option.strike, 110.0);
    assert_eq!(config.heatmap.spot_min, Some(90.0));
    assert_eq!(config.heatmap_vol_range().unwrap().max, 0.9);
    assert_eq!(config.curve_spot_range().unwrap().steps, 50);
    assert_eq!(config.output.directory, PathBuf::from("figures"));
    assert!(config.output.csv);
}

/// Inconsistent inputs are rejected with a descriptive error.
#[test]
fn test_invalid_configs() {
    // Heatmap minimum above maximum
    let config = AppConfig::from_toml_str("[heatmap]\nspot_min = 200.0\nspot_max = 100.0\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(
        format!("{:#}", err).contains("must be less than maximum"),
        "unexpected error: {:#}",
        err
    );

    // Volatility outside [0, 1]
    let config = AppConfig::from_toml_str("[heatmap]\nvol_max = 1.5\n").unwrap();
    assert!(config.validate().is_err());

    // Non-positive strike
    let config = AppConfig::from_toml_str("[option]\nstrike = 0.0\n").unwrap();
    assert!(config.option_parameters().is_err());
    assert!(config.validate().is_err());

    // Unknown option type fails at parse time
    assert!(AppConfig::from_toml_str("[option]\noption_type = \"straddle\"\n").is_err());

    // Missing file
    assert!(AppConfig::from_file("/nonexistent/bs_pricer.toml").is_err());
}
