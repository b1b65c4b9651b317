// demos/pricing_demo.rs

//! Demonstration of closed-form pricing and Greeks
//!
//! This example shows how to:
//! 1. Build validated option parameters
//! 2. Price calls and puts and compute their Greeks
//! 3. Check put-call parity
//! 4. Handle the zero-volatility / expiry boundary

use anyhow::Result;
use bs_pricer::{
    evaluate_option, price, OptionParameters, OptionType, PricingError,
};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let call = OptionParameters::new(100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call)?;
    let put = call.with_option_type(OptionType::Put);

    println!("\nStep 1: Price and Greeks (S=100, K=100, T=1y, σ=20%, r=5%)");
    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Type", "Price", "Delta", "Gamma", "Theta/day", "Vega"
    );
    println!("{}", "-".repeat(62));
    for params in [call, put] {
        let report = evaluate_option(&params)?;
        println!(
            "{:<6} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            params.option_type.to_string(),
            report.price,
            report.greeks.delta,
            report.greeks.gamma,
            report.greeks.theta,
            report.greeks.vega
        );
    }

    println!("\nStep 2: Put-call parity");
    let lhs = price(&call)? - price(&put)?;
    let rhs = call.spot - call.strike * call.discount_factor();
    println!("  C - P         = {:.10}", lhs);
    println!("  S - K·e^(-rT) = {:.10}", rhs);

    println!("\nStep 3: Boundary cases");
    let expired = OptionParameters::new(112.0, 100.0, 0.0, 0.2, 0.05, OptionType::Call)?;
    match price(&expired) {
        Err(PricingError::Domain(msg)) => println!("  closed form refuses: {}", msg),
        other => println!("  unexpected: {:?}", other),
    }
    let report = evaluate_option(&expired)?;
    println!(
        "  boundary value: {:.2} (delta {:.1}, gamma {:.1})",
        report.price, report.greeks.delta, report.greeks.gamma
    );

    println!("\nStep 4: Invalid input");
    if let Err(e) = OptionParameters::new(-1.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call) {
        println!("  rejected: {}", e);
    }

    Ok(())
}
