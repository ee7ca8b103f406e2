//! # ov-core
//!
//! Core types and error definitions for optval-rs.
//!
//! This crate provides the building blocks shared across the workspace –
//! primitive type aliases, day-count conventions, and the error enum with
//! its `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in bank-day units (see [`BANK_DAYS_PER_YEAR`]).
pub type Time = Real;

// ── Day-count conventions ─────────────────────────────────────────────────────

/// Trading days per year; tenors are annualized over this count.
pub const BANK_DAYS_PER_YEAR: Real = 252.0;

/// Money-market convention; rates are annualized over this count.
///
/// Intentionally different from [`BANK_DAYS_PER_YEAR`]: the closed-form
/// oracle rescales the rate over 360 days and the tenor over 252.
pub const RATE_DAYS_PER_YEAR: Real = 360.0;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
