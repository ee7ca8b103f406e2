//! # ov-pricingengines
//!
//! Pricing engines for optval-rs.
//!
//! * [`BinomialVanillaEngine`] — the binomial-lattice engine: European and
//!   American exercise, cash dividends, ladder strike schedules
//! * [`black_scholes`] — the closed-form European oracle the lattice is
//!   validated against

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Closed-form Black–Scholes oracle.
pub mod black_scholes;

/// The binomial-lattice vanilla engine.
pub mod binomial_vanilla_engine;

pub use binomial_vanilla_engine::BinomialVanillaEngine;
pub use black_scholes::{black_scholes_call, black_scholes_put};
