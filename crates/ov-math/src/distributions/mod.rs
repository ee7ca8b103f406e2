//! Probability distributions used by the pricing engines.

mod normal;

pub use normal::{normal_cdf, normal_pdf};
