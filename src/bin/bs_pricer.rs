//! Black-Scholes pricer CLI
//!
//! Prices one European option, prints its Greeks and writes a spot x volatility
//! price heatmap plus Greek-vs-spot curves as SVG.
//!
//! Usage:
//!     bs-pricer [CONFIG.toml] [--preset standard|fine|coarse] [--out DIR] [--csv]

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use bs_pricer::{default_configs, generate_report, AppConfig, PricingReport};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    preset: Option<String>,
    out_dir: Option<PathBuf>,
    csv: bool,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} [CONFIG.toml] [--preset standard|fine|coarse] [--out DIR] [--csv]",
        program
    )
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--preset" => {
                let name = iter.next().ok_or_else(|| anyhow!("--preset needs a value"))?;
                cli.preset = Some(name.clone());
            }
            "--out" => {
                let dir = iter.next().ok_or_else(|| anyhow!("--out needs a value"))?;
                cli.out_dir = Some(PathBuf::from(dir));
            }
            "--csv" => cli.csv = true,
            flag if flag.starts_with("--") => bail!("Unknown flag {}", flag),
            path => {
                if cli.config_path.is_some() {
                    bail!("Only one config file may be given");
                }
                cli.config_path = Some(PathBuf::from(path));
            }
        }
    }
    Ok(cli)
}

fn load_config(cli: &CliArgs) -> Result<AppConfig> {
    let mut config = match (&cli.config_path, &cli.preset) {
        (Some(path), preset) => {
            if preset.is_some() {
                warn!("--preset ignored because a config file was given");
            }
            AppConfig::from_file(path)?
        }
        (None, Some(name)) => {
            default_configs::by_name(name).ok_or_else(|| anyhow!("Unknown preset '{}'", name))?
        }
        (None, None) => default_configs::standard(),
    };

    if let Some(dir) = &cli.out_dir {
        config.output.directory = dir.clone();
    }
    if cli.csv {
        config.output.csv = true;
    }
    Ok(config)
}

fn print_summary(report: &PricingReport) {
    let p = &report.params;
    println!("Black-Scholes Option Pricer");
    println!("===========================");
    println!("  Underlying Price:  {:.2}", p.spot);
    println!("  Strike Price:      {:.2}", p.strike);
    println!("  Time to Expiry:    {:.4} years", p.time_to_expiry);
    println!("  Risk-Free Rate:    {:.4}", p.risk_free_rate);
    println!("  Volatility (σ):    {:.4}", p.volatility);
    println!();
    println!("{} Option Price: ${:.2}", p.option_type, report.price);
    if report.boundary {
        println!("  (boundary value: zero volatility or time to expiry)");
    }
    println!();
    println!("{:<8} {:<8} {:<8} {:<8}", "Delta", "Gamma", "Theta", "Vega");
    println!(
        "{:<8.2} {:<8.4} {:<8.2} {:<8.4}",
        report.greeks.delta, report.greeks.gamma, report.greeks.theta, report.greeks.vega
    );
    println!("(theta per calendar day, vega per unit volatility)");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bs-pricer");
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", usage(program));
        return Ok(());
    }

    let cli = parse_args(&args).with_context(|| usage(program))?;
    let config = load_config(&cli)?;
    info!(
        output = %config.output.directory.display(),
        steps = config.heatmap.steps,
        curve_points = config.curves.points,
        "configuration loaded"
    );

    let artifacts = generate_report(&config)?;
    print_summary(&artifacts.summary);

    println!();
    println!("Heatmap: {}", artifacts.heatmap_svg.display());
    println!("Greeks:  {}", artifacts.greeks_svg.display());
    if let Some(csv) = &artifacts.heatmap_csv {
        println!("CSV:     {}", csv.display());
    }
    Ok(())
}
