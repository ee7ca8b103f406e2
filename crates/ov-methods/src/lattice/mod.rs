//! The recombining binomial lattice: factor derivation, terminal payoff
//! generation, and backward induction.
//!
//! All functions here are call-scoped: they allocate vectors sized
//! `steps + 1`, consume them during the rollback, and return the scalar
//! root price. Nothing is shared across pricing calls.

use ov_core::{ensure, DiscountFactor, Error, Real, Result, Size, BANK_DAYS_PER_YEAR};
use ov_instruments::{ContractParams, DividendSchedule, LadderSchedule, OptionType};

// ─── LatticeParams ────────────────────────────────────────────────────────────

/// Per-step multiplicative factors of a recombining binomial lattice.
///
/// Derived from a [`ContractParams`] and a step count `n`:
///
/// * `Δt = T / n / 252` (with `T` the tenor in bank days)
/// * `u = exp(σ √Δt)`, `d = 1/u`
/// * `p = (exp(r Δt / n) − d) / (u − d)`, `p₁ = 1 − p`
/// * `discount = exp(−r Δt)` per step
///
/// The growth term in `p` carries an extra `/n`; this is the historical
/// convention the engine's reference values are pinned to.
#[derive(Debug, Clone, Copy)]
pub struct LatticeParams {
    spot: Real,
    steps: Size,
    delta_t: Real,
    up: Real,
    down: Real,
    p_up: Real,
    p_down: Real,
    discount: DiscountFactor,
}

impl LatticeParams {
    /// Derive lattice factors for `steps ≥ 1`.
    ///
    /// Fails with [`Error::NoArbitrage`] when the risk-neutral probability
    /// falls outside [0, 1], so a sweep over step counts can skip the bad
    /// ones instead of silently pricing outside the no-arbitrage bound.
    pub fn new(contract: &ContractParams, steps: Size) -> Result<Self> {
        ensure!(steps >= 1, "step count must be at least 1");
        let n = steps as Real;
        let delta_t = contract.tenor_bank_days() / n / BANK_DAYS_PER_YEAR;
        let up = (contract.sigma() * delta_t.sqrt()).exp();
        let down = 1.0 / up;
        let p_up = ((contract.rate() * delta_t / n).exp() - down) / (up - down);
        if !(0.0..=1.0).contains(&p_up) {
            return Err(Error::NoArbitrage { p: p_up });
        }
        Ok(Self {
            spot: contract.spot(),
            steps,
            delta_t,
            up,
            down,
            p_up,
            p_down: 1.0 - p_up,
            discount: (-delta_t * contract.rate()).exp(),
        })
    }

    /// Spot price at the root node.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Number of time steps n.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Time increment per step, in years.
    pub fn delta_t(&self) -> Real {
        self.delta_t
    }

    /// Up factor u.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down factor d = 1/u.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Risk-neutral up probability p.
    pub fn p_up(&self) -> Real {
        self.p_up
    }

    /// Down probability 1 − p.
    pub fn p_down(&self) -> Real {
        self.p_down
    }

    /// Per-step discount factor exp(−r Δt).
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }
}

// ─── Terminal layer ───────────────────────────────────────────────────────────

/// Underlying prices at the final lattice layer.
///
/// Entry `i` corresponds to `i` down-moves: `S · u^(n−i) · d^i`.
pub fn terminal_asset_prices(lattice: &LatticeParams) -> Vec<Real> {
    let n = lattice.steps;
    (0..=n)
        .map(|i| lattice.spot * lattice.up.powi((n - i) as i32) * lattice.down.powi(i as i32))
        .collect()
}

/// Floored option payoffs at the final lattice layer.
pub fn terminal_payoffs(
    lattice: &LatticeParams,
    strike: Real,
    option_type: OptionType,
) -> Vec<Real> {
    terminal_asset_prices(lattice)
        .into_iter()
        .map(|s| option_type.payoff(s, strike))
        .collect()
}

// ─── Backward induction ───────────────────────────────────────────────────────

/// Collapse a terminal value vector to the root price by risk-neutral
/// discounted expectation, with no exercise comparison.
///
/// Each of the n passes shortens the live prefix by one:
/// `v[j] ← disc · (p · v[j] + p₁ · v[j+1])`.
pub fn roll_back_european(lattice: &LatticeParams, mut values: Vec<Real>) -> Real {
    let n = lattice.steps;
    debug_assert_eq!(values.len(), n + 1);
    for pass in 0..n {
        for j in 0..(n - pass) {
            values[j] =
                lattice.discount * (lattice.p_up * values[j] + lattice.p_down * values[j + 1]);
        }
    }
    values[0]
}

/// Price an American option with no dividend or ladder adjustment.
///
/// Walks the lattice backward keeping two vectors: the underlying prices
/// and the option values. Underlying prices at earlier layers are
/// recovered by deflating along the up-branch (`node[j] /= u`), which is
/// valid because the tree recombines and u, d are constant across layers.
/// At every node the option value is the larger of the discounted
/// continuation and the unfloored immediate-exercise value.
pub fn roll_back_american(
    lattice: &LatticeParams,
    strike: Real,
    option_type: OptionType,
) -> Real {
    let n = lattice.steps;
    let mut node = terminal_asset_prices(lattice);
    let mut option: Vec<Real> = node
        .iter()
        .map(|&s| option_type.payoff(s, strike))
        .collect();

    for pass in 0..n {
        for j in 0..(n - pass) {
            node[j] /= lattice.up;
            let exercise = option_type.intrinsic(node[j], strike);
            let continuation =
                lattice.discount * (lattice.p_up * option[j] + lattice.p_down * option[j + 1]);
            option[j] = continuation.max(exercise);
        }
    }
    option[0]
}

/// Price an American option with dividend and ladder-strike adjustments.
///
/// Extends [`roll_back_american`] per backward pass `i` (each pass spans
/// `months / n` calendar months):
///
/// 1. the running dividend accumulator is discounted by one period rate;
/// 2. every integer month crossed by the pass contributes its scheduled
///    dividend into the accumulator (additive);
/// 3. the active strike is re-resolved from the ladder schedule for the
///    month the pass has reached;
/// 4. immediate exercise is valued against the active strike with the
///    accumulator added back, since early exercise captures dividends the
///    holder of the bare option would otherwise forgo.
///
/// The terminal payoffs are floored against the strike in force at
/// maturity (the latest reset dated before the final month), so the
/// continuation values the first pass discounts were produced by the same
/// strike it resolves.
pub fn roll_back_american_adjusted(
    lattice: &LatticeParams,
    contract: &ContractParams,
    option_type: OptionType,
    dividends: &DividendSchedule,
    ladder: &LadderSchedule,
) -> Real {
    let n = lattice.steps;
    let months = contract.months() as Real;
    let month_per_pass = months / n as Real;
    let period_rate = contract.rate() * month_per_pass / 12.0;
    let original_strike = contract.strike();
    let maturity_strike = ladder.active_strike(original_strike, contract.months() as i64);

    let mut node = terminal_asset_prices(lattice);
    let mut option: Vec<Real> = node
        .iter()
        .map(|&s| option_type.payoff(s, maturity_strike))
        .collect();

    let mut strike = maturity_strike;
    let mut div_accum = 0.0;

    for pass in 0..n {
        div_accum /= 1.0 + period_rate;

        // Months crossed walking back from this layer to the next one.
        let month_hi = (months - month_per_pass * pass as Real).floor() as i64;
        let month_lo = (months - month_per_pass * (pass + 1) as Real).floor() as i64;
        for month in (month_lo + 1)..=month_hi {
            if month >= 1 {
                if let Some(amount) = dividends.amount_at(month as u32) {
                    div_accum += amount;
                }
            }
        }

        if !ladder.is_empty() {
            let current_month = (months - month_per_pass * pass as Real + 0.5).trunc() as i64;
            strike = ladder.active_strike(original_strike, current_month);
        }

        for j in 0..(n - pass) {
            node[j] /= lattice.up;
            let exercise = option_type.intrinsic(node[j], strike) + div_accum;
            let continuation =
                lattice.discount * (lattice.p_up * option[j] + lattice.p_down * option[j + 1]);
            option[j] = continuation.max(exercise);
        }
    }
    option[0]
}

// ─── Tests ────────────────────────────────────────────────────────────────────
