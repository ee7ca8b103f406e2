//! End-to-end scenarios through the façade, mirroring the four historical
//! report cases: a plain European call sweep, an American vs European put,
//! an American call with dividends, and the laddered variant.

use approx::assert_relative_eq;
use optval::pricingengines::BinomialVanillaEngine;

#[test]
fn european_call_sweep_settles_within_one_percent_of_oracle() {
    let engine = BinomialVanillaEngine::new(190.0, 192.6, 0.0107, 0.1203560368, 3).unwrap();
    let oracle = engine.price_black_scholes_call();

    // Find the last step count in 1..200 still off by more than 1%.
    let mut last_bad = 0;
    for steps in 1..200 {
        let price = engine.price_european_call(steps).unwrap();
        if ((oracle / price - 1.0) * 100.0).abs() > 1.0 {
            last_bad = steps;
        }
    }
    let settled = last_bad + 1;
    let price = engine.price_european_call(settled).unwrap();
    assert!(settled < 50, "still off by >1% at {last_bad} steps");
    assert!(((oracle / price - 1.0) * 100.0).abs() <= 1.0);
}

#[test]
fn american_put_premium_over_european() {
    let engine = BinomialVanillaEngine::new(170.0, 192.6, 0.0107, 0.1203560368, 3).unwrap();
    let us = engine.price_american_put(64).unwrap();
    let eu = engine.price_european_put(64).unwrap();
    assert!(us >= eu);
    assert!(us - eu < 0.01, "early-exercise premium {} implausibly large", us - eu);
}

#[test]
fn dividend_and_ladder_scenarios() {
    let mut engine = BinomialVanillaEngine::new(70.0, 62.9, 0.0107, 0.2480265295, 20).unwrap();
    engine.add_dividend(7, 4.0).unwrap();
    engine.add_dividend(19, 5.0).unwrap();

    let with_dividends = engine.price_american_call(420).unwrap();
    assert_relative_eq!(with_dividends, 3.1713248030891648, max_relative = 1e-6);

    engine.add_ladder_step(1, 75.0).unwrap();
    engine.add_ladder_step(5, 80.0).unwrap();
    engine.add_ladder_step(10, 85.0).unwrap();
    engine.add_ladder_step(16, 90.0).unwrap();

    let laddered = engine.price_american_call(420).unwrap();
    assert_relative_eq!(laddered, 1.0496574403158183, max_relative = 1e-6);
    // The escalating strike schedule cuts into the call's value.
    assert!(laddered < with_dividends);
}
