//! # optval
//!
//! Binomial-lattice option valuation: European and American exercise,
//! cash dividends, and ladder strike schedules, validated against a
//! closed-form Black–Scholes oracle.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ov-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use optval::pricingengines::BinomialVanillaEngine;
//!
//! let mut engine = BinomialVanillaEngine::new(70.0, 62.9, 0.0107, 0.248, 20)?;
//! engine.add_dividend(7, 4.0)?;
//! engine.add_ladder_step(10, 85.0)?;
//!
//! let price = engine.price_american_call(200)?;
//! assert!(price > 0.0);
//! # Ok::<(), optval::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ov_core as core;

/// Mathematical utilities (normal distribution).
pub use ov_math as math;

/// Contract parameters, payoffs, and corporate-action schedules.
pub use ov_instruments as instruments;

/// Lattice construction and backward induction.
pub use ov_methods as methods;

/// Pricing engines (binomial and closed-form).
pub use ov_pricingengines as pricingengines;
