//! Immutable market/contract inputs.

use ov_core::{ensure, Rate, Real, Result, Time, Volatility, BANK_DAYS_PER_YEAR};

/// The immutable inputs describing one option contract and its market.
///
/// Validated at construction; every pricing call receives these by
/// reference and never mutates them. Derived quantities (tenor in bank
/// days, monthly rate) are accessors rather than stored fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractParams {
    strike: Real,
    spot: Real,
    rate: Rate,
    sigma: Volatility,
    months: u32,
}

impl ContractParams {
    /// Create a validated parameter set.
    ///
    /// Rejects non-positive or non-finite spot, strike, and volatility,
    /// a non-finite rate, and a zero tenor.
    pub fn new(
        strike: Real,
        spot: Real,
        rate: Rate,
        sigma: Volatility,
        months: u32,
    ) -> Result<Self> {
        ensure!(
            strike.is_finite() && strike > 0.0,
            "strike must be positive, got {strike}"
        );
        ensure!(
            spot.is_finite() && spot > 0.0,
            "spot must be positive, got {spot}"
        );
        ensure!(rate.is_finite(), "rate must be finite, got {rate}");
        ensure!(
            sigma.is_finite() && sigma > 0.0,
            "volatility must be positive, got {sigma}"
        );
        ensure!(months > 0, "tenor must be at least one month");
        Ok(Self {
            strike,
            spot,
            rate,
            sigma,
            months,
        })
    }

    /// Derive a new parameter set with a different spot.
    ///
    /// Used by the escrowed-dividend adjustment; the original set is left
    /// untouched so independent pricing calls never observe each other.
    pub fn with_spot(&self, spot: Real) -> Result<Self> {
        Self::new(self.strike, spot, self.rate, self.sigma, self.months)
    }

    /// Strike price K.
    pub fn strike(&self) -> Real {
        self.strike
    }

    /// Spot price S.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Annualized risk-free rate r.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Annualized volatility σ.
    pub fn sigma(&self) -> Volatility {
        self.sigma
    }

    /// Tenor in months.
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Time to maturity in bank-day units: `252/12 · months`.
    pub fn tenor_bank_days(&self) -> Time {
        BANK_DAYS_PER_YEAR / 12.0 * self.months as Real
    }

    /// Monthly rate r/12, used to present-value scheduled dividends.
    pub fn monthly_rate(&self) -> Rate {
        self.rate / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_inputs() {
        assert!(ContractParams::new(190.0, 192.6, 0.0107, 0.12, 3).is_ok());
        assert!(ContractParams::new(-1.0, 192.6, 0.0107, 0.12, 3).is_err());
        assert!(ContractParams::new(190.0, 0.0, 0.0107, 0.12, 3).is_err());
        assert!(ContractParams::new(190.0, 192.6, 0.0107, 0.0, 3).is_err());
        assert!(ContractParams::new(190.0, 192.6, 0.0107, 0.12, 0).is_err());
        assert!(ContractParams::new(190.0, f64::NAN, 0.0107, 0.12, 3).is_err());
    }

    #[test]
    fn derived_quantities() {
        let c = ContractParams::new(190.0, 192.6, 0.0107, 0.12, 3).unwrap();
        assert_eq!(c.tenor_bank_days(), 63.0); // 252/12 * 3
        assert_eq!(c.monthly_rate(), 0.0107 / 12.0);
    }

    #[test]
    fn with_spot_leaves_original_untouched() {
        let c = ContractParams::new(190.0, 192.6, 0.0107, 0.12, 3).unwrap();
        let adjusted = c.with_spot(180.0).unwrap();
        assert_eq!(adjusted.spot(), 180.0);
        assert_eq!(c.spot(), 192.6);
        assert_eq!(adjusted.strike(), c.strike());
        assert!(c.with_spot(-5.0).is_err());
    }
}
