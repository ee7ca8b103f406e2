//! # ov-math
//!
//! Mathematical utilities for optval-rs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Probability distributions.
pub mod distributions;

pub use distributions::{normal_cdf, normal_pdf};
