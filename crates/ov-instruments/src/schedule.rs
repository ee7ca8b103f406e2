//! Sparse month-indexed corporate-action schedules.
//!
//! Both schedules map an end-of-month index (1-based) to an amount. A
//! lookup for a month with no entry is ordinary control flow meaning "no
//! adjustment", not an error.

use ov_core::{ensure, Rate, Real, Result};
use std::collections::BTreeMap;

/// Scheduled cash dividends, keyed by end-of-month index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DividendSchedule {
    entries: BTreeMap<u32, Real>,
}

impl DividendSchedule {
    /// An empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cash dividend paid at the end of `month`.
    ///
    /// A second entry for the same month replaces the first.
    pub fn add(&mut self, month: u32, amount: Real) -> Result<()> {
        ensure!(month > 0, "dividend month must be at least 1, got {month}");
        ensure!(
            amount.is_finite() && amount > 0.0,
            "dividend amount must be positive, got {amount}"
        );
        self.entries.insert(month, amount);
        Ok(())
    }

    /// True if no dividends are scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The dividend scheduled at `month`, if any.
    pub fn amount_at(&self, month: u32) -> Option<Real> {
        self.entries.get(&month).copied()
    }

    /// Present value of all scheduled dividends at the given monthly rate:
    /// `Σ amount_m / (1 + monthly_rate)^m`.
    pub fn present_value(&self, monthly_rate: Rate) -> Real {
        self.entries
            .iter()
            .map(|(&month, &amount)| amount / (1.0 + monthly_rate).powi(month as i32))
            .sum()
    }
}

/// Scheduled strike resets, keyed by end-of-month index.
///
/// Models a strike that steps to a new level at fixed calendar
/// checkpoints (e.g. an escalating employee option).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LadderSchedule {
    entries: BTreeMap<u32, Real>,
}

impl LadderSchedule {
    /// An empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strike reset taking effect at the end of `month`.
    pub fn add(&mut self, month: u32, strike: Real) -> Result<()> {
        ensure!(month > 0, "ladder month must be at least 1, got {month}");
        ensure!(
            strike.is_finite() && strike > 0.0,
            "ladder strike must be positive, got {strike}"
        );
        self.entries.insert(month, strike);
        Ok(())
    }

    /// True if no resets are scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The strike in force at `current_month`.
    ///
    /// The latest reset dated strictly before `current_month` wins; with
    /// no qualifying reset the original strike is still in force.
    pub fn active_strike(&self, original: Real, current_month: i64) -> Real {
        self.entries
            .iter()
            .rev()
            .find(|(&month, _)| (month as i64) < current_month)
            .map(|(_, &strike)| strike)
            .unwrap_or(original)
    }
}
