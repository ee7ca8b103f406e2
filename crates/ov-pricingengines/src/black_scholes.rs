//! Closed-form Black–Scholes European oracle.
//!
//! Serves as the reference value for lattice convergence checks. Two
//! different day-count conventions are deliberately in play and must stay
//! that way: the rate is rescaled over 360 days
//! ([`RATE_DAYS_PER_YEAR`](ov_core::RATE_DAYS_PER_YEAR)) while the tenor
//! is rescaled over 252 bank days
//! ([`BANK_DAYS_PER_YEAR`](ov_core::BANK_DAYS_PER_YEAR)).

use ov_core::{Price, Real, BANK_DAYS_PER_YEAR, RATE_DAYS_PER_YEAR};
use ov_instruments::ContractParams;
use ov_math::normal_cdf;

/// Black–Scholes price of the European call.
///
/// $$C = S\,N(d_1) - K e^{-r'T'} N(d_2)$$
///
/// with `r' = r/360`, `T' = T/252`, and
/// `d₁ = (ln(S/K) + (r' + σ²/2)T') / (σ√T')`, `d₂ = d₁ − σ√T'`.
pub fn black_scholes_call(contract: &ContractParams) -> Price {
    let s = contract.spot();
    let k = contract.strike();
    let sigma = contract.sigma();
    let r = contract.rate() / RATE_DAYS_PER_YEAR;
    let t = contract.tenor_bank_days() / BANK_DAYS_PER_YEAR;

    let sqrt_t = t.sqrt();
    let d1 = ((s / k).ln() + (r + sigma * sigma / 2.0) * t) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;

    normal_cdf(d1) * s - normal_cdf(d2) * k * (-r * t).exp()
}

/// Black–Scholes price of the European put, via put–call parity:
/// `P = K e^{-r'T'} − S + C`.
pub fn black_scholes_put(contract: &ContractParams) -> Price {
    let k = contract.strike();
    let s = contract.spot();
    let r = contract.rate() / RATE_DAYS_PER_YEAR;
    let t = contract.tenor_bank_days() / BANK_DAYS_PER_YEAR;

    k * (-r * t).exp() - s + black_scholes_call(contract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ov_core::Real;

    fn reference_contract() -> ContractParams {
        ContractParams::new(190.0, 192.6, 0.0107, 0.1203560368, 3).unwrap()
    }

    #[test]
    fn reference_call_price() {
        let c = reference_contract();
        assert_relative_eq!(
            black_scholes_call(&c),
            6.009352778908891,
            max_relative = 1e-9
        );
    }

    #[test]
    fn reference_put_price() {
        let c = reference_contract();
        assert_relative_eq!(
            black_scholes_put(&c),
            3.407940978598589,
            max_relative = 1e-9
        );
    }

    #[test]
    fn put_call_parity_holds_by_construction() {
        let c = reference_contract();
        let r = c.rate() / RATE_DAYS_PER_YEAR;
        let t = c.tenor_bank_days() / BANK_DAYS_PER_YEAR;
        let parity: Real = c.spot() - c.strike() * (-r * t).exp();
        let call = black_scholes_call(&c);
        let put = black_scholes_put(&c);
        assert_relative_eq!(call - put, parity, max_relative = 1e-12);
    }

    #[test]
    fn vega_is_positive() {
        // Bumping σ raises both the call and the put.
        let lo = ContractParams::new(190.0, 192.6, 0.0107, 0.10, 3).unwrap();
        let hi = ContractParams::new(190.0, 192.6, 0.0107, 0.20, 3).unwrap();
        assert!(black_scholes_call(&hi) > black_scholes_call(&lo));
        assert!(black_scholes_put(&hi) > black_scholes_put(&lo));
    }

    #[test]
    fn deep_in_the_money_call_approaches_forward_intrinsic() {
        let c = ContractParams::new(50.0, 200.0, 0.0107, 0.15, 3).unwrap();
        let r = c.rate() / RATE_DAYS_PER_YEAR;
        let t = c.tenor_bank_days() / BANK_DAYS_PER_YEAR;
        let intrinsic = 200.0 - 50.0 * (-r * t).exp();
        assert_relative_eq!(black_scholes_call(&c), intrinsic, max_relative = 1e-6);
    }
}
