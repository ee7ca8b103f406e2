//! # ov-methods
//!
//! Binomial-lattice construction and backward induction for optval-rs.
//!
//! * [`LatticeParams`] — per-call multiplicative factors (u, d, p, discount)
//! * [`terminal_asset_prices`] / [`terminal_payoffs`] — final-layer vectors
//! * [`roll_back_european`] / [`roll_back_american`] /
//!   [`roll_back_american_adjusted`] — backward-induction pricing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The recombining binomial lattice and its rollback functions.
pub mod lattice;

pub use lattice::{
    roll_back_american, roll_back_american_adjusted, roll_back_european, terminal_asset_prices,
    terminal_payoffs, LatticeParams,
};
