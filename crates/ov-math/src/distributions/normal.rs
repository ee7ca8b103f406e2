//! Standard normal (Gaussian) distribution.
//!
//! Delegates to `statrs` in the same way the pricing code that preceded
//! this crate leaned on a library normal distribution rather than a
//! hand-rolled approximation.

use ov_core::Real;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
}

/// The standard normal probability density function φ(x).
pub fn normal_pdf(x: Real) -> Real {
    standard_normal().pdf(x)
}

/// The standard normal cumulative distribution function Φ(x).
pub fn normal_cdf(x: Real) -> Real {
    standard_normal().cdf(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cdf_known_values() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, max_relative = 1e-12);
        assert_relative_eq!(normal_cdf(1.0), 0.841344746, max_relative = 1e-8);
        assert_relative_eq!(normal_cdf(-1.0), 1.0 - normal_cdf(1.0), max_relative = 1e-12);
    }

    #[test]
    fn pdf_is_symmetric_and_peaks_at_zero() {
        assert_relative_eq!(normal_pdf(0.0), 0.398942280, max_relative = 1e-8);
        assert_relative_eq!(normal_pdf(1.3), normal_pdf(-1.3), max_relative = 1e-12);
        assert!(normal_pdf(0.0) > normal_pdf(0.5));
    }
}
