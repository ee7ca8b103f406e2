//! Option type and intrinsic-value helpers.

use ov_core::Real;
use std::fmt;

/// The two sides of a vanilla option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Signed moneyness `±(S − K)`, without the zero floor.
    ///
    /// This is the immediate-exercise value the American rollback compares
    /// against continuation at every node.
    pub fn intrinsic(self, spot: Real, strike: Real) -> Real {
        self.sign() * (spot - strike)
    }

    /// Floored payoff `max(±(S − K), 0)` at expiry.
    pub fn payoff(self, spot: Real, strike: Real) -> Real {
        self.intrinsic(spot, strike).max(0.0)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_payoff_floors_at_zero() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), -10.0);
    }

    #[test]
    fn put_payoff_floors_at_zero() {
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), -10.0);
    }
}
