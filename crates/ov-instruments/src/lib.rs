//! # ov-instruments
//!
//! Contract parameters, payoffs, and corporate-action schedules for
//! optval-rs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Immutable market/contract inputs.
pub mod contract;

/// Option type and intrinsic-value helpers.
pub mod payoff;

/// Sparse month-indexed dividend and ladder-strike schedules.
pub mod schedule;

pub use contract::ContractParams;
pub use payoff::OptionType;
pub use schedule::{DividendSchedule, LadderSchedule};
