
use bs_pricer::{
    delta, evaluate, evaluate_option, gamma, greeks, greeks_or_limit, intrinsic_value, norm_cdf,
    price, theta, value, vega, Metric, OptionParameters, OptionType, PricingError,
};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{assert_close, params, random_params, reference_params, seeded_rng};

/// Standard reference values for the ATM one-year option.
#[test]
fn test_reference_scenario() {
    let call = reference_params(OptionType::Call);
    let put = reference_params(OptionType::Put);

    assert_close(price(&call).unwrap(), 10.4506, 1e-4, "call price");
    assert_close(price(&put).unwrap(), 5.5735, 1e-4, "put price");
    assert_close(delta(&call).unwrap(), 0.6368, 1e-4, "call delta");
    assert_close(gamma(&call).unwrap(), 0.0188, 1e-4, "gamma");
    assert_close(vega(&call).unwrap(), 37.52, 1e-2, "vega");
}

/// Theta is reported per calendar day and is negative for this call.
#[test]
fn test_theta_convention() {
    let call = reference_params(OptionType::Call);
    let put = reference_params(OptionType::Put);

    // Annualized call theta is -6.4140; per day that is -0.017573
    assert_close(theta(&call).unwrap(), -6.414_027_546_438_197 / 365.0, 1e-12, "call theta");
    assert_close(theta(&put).unwrap(), -1.657_880_423_934_626 / 365.0, 1e-12, "put theta");

    // Finite-difference check: one calendar day later the call should be worth about theta less
    let one_day = 1.0 / 365.0;
    let later = OptionParameters {
        time_to_expiry: call.time_to_expiry - one_day,
        ..call
    };
    let decay = price(&later).unwrap() - price(&call).unwrap();
    assert_close(decay, theta(&call).unwrap(), 1e-4, "one-day decay");
}

/// Φ matches statrs' normal CDF to well under 1e-8 across the real line.
#[test]
fn test_norm_cdf_accuracy() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut x = -8.0;
    while x <= 8.0 {
        assert_close(norm_cdf(x), normal.cdf(x), 1e-10, &format!("Phi({})", x));
        x += 0.01;
    }
}

/// C - P = S - K·e^(-rT) over random parameter sets.
#[test]
fn test_put_call_parity() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let call = random_params(&mut rng);
        let put = call.with_option_type(OptionType::Put);
        let lhs = price(&call).unwrap() - price(&put).unwrap();
        let rhs = call.spot - call.strike * call.discount_factor();
        assert!(
            (lhs - rhs).abs() <= 1e-6 * call.spot.max(call.strike),
            "parity violated for {:?}: {} vs {}",
            call,
            lhs,
            rhs
        );
    }
}

/// delta(call) - delta(put) = 1; gamma and vega agree between calls and puts.
#[test]
fn test_call_put_greek_relations() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let call = random_params(&mut rng);
        let put = call.with_option_type(OptionType::Put);
        let gc = greeks(&call).unwrap();
        let gp = greeks(&put).unwrap();

        assert_close(gc.delta - gp.delta, 1.0, 1e-12, "delta spread");
        assert_eq!(gc.gamma, gp.gamma, "gamma must match for {:?}", call);
        assert_eq!(gc.vega, gp.vega, "vega must match for {:?}", call);
    }
}

/// Call price non-decreasing and put price non-increasing in spot.
#[test]
fn test_monotonic_in_spot() {
    for &sigma in &[0.05, 0.2, 0.8] {
        let mut prev_call = f64::NEG_INFINITY;
        let mut prev_put = f64::INFINITY;
        for i in 1..=400 {
            let spot = i as f64 * 0.5;
            let call = params(spot, 100.0, 0.5, sigma, 0.03, OptionType::Call);
            let c = price(&call).unwrap();
            let p = price(&call.with_option_type(OptionType::Put)).unwrap();
            assert!(c >= prev_call - 1e-12, "call price fell at S={} sigma={}", spot, sigma);
            assert!(p <= prev_put + 1e-12, "put price rose at S={} sigma={}", spot, sigma);
            prev_call = c;
            prev_put = p;
        }
    }
}

/// Analytic Greeks agree with central finite differences of the price.
#[test]
fn test_greeks_match_finite_differences() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let p = params(105.0, 100.0, 0.75, 0.3, 0.04, option_type);
        let g = greeks(&p).unwrap();

        let h = 1e-3;
        let up = price(&OptionParameters { spot: p.spot + h, ..p }).unwrap();
        let mid = price(&p).unwrap();
        let down = price(&OptionParameters { spot: p.spot - h, ..p }).unwrap();
        assert_close(g.delta, (up - down) / (2.0 * h), 1e-6, "delta vs FD");
        assert_close(g.gamma, (up - 2.0 * mid + down) / (h * h), 1e-4, "gamma vs FD");

        let hv = 1e-5;
        let v_up = price(&OptionParameters { volatility: p.volatility + hv, ..p }).unwrap();
        let v_down = price(&OptionParameters { volatility: p.volatility - hv, ..p }).unwrap();
        assert_close(g.vega, (v_up - v_down) / (2.0 * hv), 1e-4, "vega vs FD");

        let ht = 1e-5;
        let t_up = price(&OptionParameters { time_to_expiry: p.time_to_expiry + ht, ..p }).unwrap();
        let t_down = price(&OptionParameters { time_to_expiry: p.time_to_expiry - ht, ..p }).unwrap();
        let annual = -(t_up - t_down) / (2.0 * ht);
        assert_close(g.theta * 365.0, annual, 1e-4, "theta vs FD");
    }
}

/// Degenerate inputs are rejected by the closed form with a domain error.
#[test]
fn test_closed_form_domain_errors() {
    let zero_vol = params(100.0, 100.0, 1.0, 0.0, 0.05, OptionType::Call);
    let expired = params(100.0, 100.0, 0.0, 0.2, 0.05, OptionType::Put);

    for p in [zero_vol, expired] {
        for metric in [Metric::Price, Metric::Delta, Metric::Gamma, Metric::Theta, Metric::Vega] {
            match evaluate(metric, &p) {
                Err(PricingError::Domain(_)) => {}
                other => panic!("{} on {:?} should be a domain error, got {:?}", metric, p, other),
            }
        }
    }

    // Invariant violations built by struct literal are caught too
    let bad = OptionParameters {
        spot: -5.0,
        ..reference_params(OptionType::Call)
    };
    assert!(price(&bad).unwrap_err().is_domain());
    assert!(value(&bad).is_err());
    assert!(greeks_or_limit(&bad).is_err());
}

/// As σ → 0⁺ the price approaches the payoff against the discounted strike,
/// which is the plain intrinsic value when r = 0. Gamma and vega vanish.
#[test]
fn test_zero_volatility_limit() {
    let tiny = 1e-7;
    for &(spot, strike, r) in &[(110.0, 100.0, 0.0), (90.0, 100.0, 0.0), (120.0, 100.0, 0.05), (80.0, 100.0, 0.05)] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let near = params(spot, strike, 1.0, tiny, r, option_type);
            let at = params(spot, strike, 1.0, 0.0, r, option_type);

            assert_close(price(&near).unwrap(), value(&at).unwrap(), 1e-6, "price -> boundary");
            if r == 0.0 {
                assert_close(value(&at).unwrap(), intrinsic_value(&at), 1e-12, "boundary = intrinsic");
            }
            assert_close(gamma(&near).unwrap(), 0.0, 1e-9, "gamma -> 0");
            assert_close(vega(&near).unwrap(), 0.0, 1e-9, "vega -> 0");

            let limit = greeks_or_limit(&at).unwrap();
            let g = greeks(&near).unwrap();
            assert_close(g.delta, limit.delta, 1e-9, "delta -> step");
            assert_close(g.theta, limit.theta, 1e-9, "theta -> carry");
        }
    }
}

/// As T → 0⁺ the price approaches intrinsic value.
#[test]
fn test_expiry_limit() {
    for &(spot, strike) in &[(110.0, 100.0), (90.0, 100.0), (100.0, 100.0)] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let near = params(spot, strike, 1e-12, 0.2, 0.05, option_type);
            let expired = params(spot, strike, 0.0, 0.2, 0.05, option_type);

            assert_close(price(&near).unwrap(), intrinsic_value(&near), 1e-4, "price -> intrinsic");
            assert_eq!(value(&expired).unwrap(), intrinsic_value(&expired));
        }
    }

    let expired_call = params(100.0, 100.0, 0.0, 0.2, 0.05, OptionType::Call);
    let g = greeks_or_limit(&expired_call).unwrap();
    assert_eq!(g.delta, 0.5, "at-the-money expiry splits the step");
    assert_eq!(g.theta, 0.0);
}

/// evaluate_option reports closed-form values and flags boundary substitutions.
#[test]
fn test_evaluate_option_report() {
    let report = evaluate_option(&reference_params(OptionType::Put)).unwrap();
    assert!(!report.boundary);
    assert_close(report.price, 5.5735, 1e-4, "put price");
    assert_close(report.greeks.delta, 0.6368 - 1.0, 1e-4, "put delta");

    let degenerate = params(120.0, 100.0, 0.0, 0.2, 0.05, OptionType::Call);
    let report = evaluate_option(&degenerate).unwrap();
    assert!(report.boundary);
    assert_eq!(report.price, 20.0);
    assert_eq!(report.greeks.delta, 1.0);
    assert_eq!(report.greeks.vega, 0.0);
}
