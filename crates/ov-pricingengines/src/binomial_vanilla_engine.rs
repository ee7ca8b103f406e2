//! The binomial-lattice vanilla engine.
//!
//! This is the public API surface a driver layer consumes: construct from
//! the five contract inputs, register dividend and ladder entries, then
//! price European/American calls and puts at any step count. Every
//! `price_*` call is self-contained — parameters are read, never written,
//! so independent calls (e.g. a convergence sweep over step counts) can
//! run concurrently without coordination.

use ov_core::{Price, Rate, Real, Result, Size, Volatility};
use ov_instruments::{ContractParams, DividendSchedule, LadderSchedule, OptionType};
use ov_methods::{
    roll_back_american, roll_back_american_adjusted, roll_back_european, terminal_payoffs,
    LatticeParams,
};

use crate::black_scholes::{black_scholes_call, black_scholes_put};

/// Binomial-lattice pricing engine for a single vanilla option.
#[derive(Debug, Clone)]
pub struct BinomialVanillaEngine {
    contract: ContractParams,
    dividends: DividendSchedule,
    ladder: LadderSchedule,
}

impl BinomialVanillaEngine {
    /// Create an engine from the contract inputs.
    pub fn new(
        strike: Real,
        spot: Real,
        rate: Rate,
        sigma: Volatility,
        months: u32,
    ) -> Result<Self> {
        Ok(Self {
            contract: ContractParams::new(strike, spot, rate, sigma, months)?,
            dividends: DividendSchedule::new(),
            ladder: LadderSchedule::new(),
        })
    }

    /// The contract this engine prices.
    pub fn contract(&self) -> &ContractParams {
        &self.contract
    }

    /// Register a cash dividend paid at the end of `month`.
    pub fn add_dividend(&mut self, month: u32, amount: Real) -> Result<()> {
        self.dividends.add(month, amount)
    }

    /// Register a ladder strike reset at the end of `month`.
    pub fn add_ladder_step(&mut self, month: u32, strike: Real) -> Result<()> {
        self.ladder.add(month, strike)
    }

    /// The contract with the spot reduced by the present value of all
    /// scheduled dividends (escrowed-dividend convention). Identity when
    /// no dividends are registered.
    fn escrowed_contract(&self) -> Result<ContractParams> {
        if self.dividends.is_empty() {
            return Ok(self.contract);
        }
        let pv = self.dividends.present_value(self.contract.monthly_rate());
        self.contract.with_spot(self.contract.spot() - pv)
    }

    fn price_european(&self, steps: Size, option_type: OptionType) -> Result<Price> {
        let contract = self.escrowed_contract()?;
        let lattice = LatticeParams::new(&contract, steps)?;
        let values = terminal_payoffs(&lattice, contract.strike(), option_type);
        Ok(roll_back_european(&lattice, values))
    }

    /// European call price from an n-step lattice.
    pub fn price_european_call(&self, steps: Size) -> Result<Price> {
        self.price_european(steps, OptionType::Call)
    }

    /// European put price from an n-step lattice.
    pub fn price_european_put(&self, steps: Size) -> Result<Price> {
        self.price_european(steps, OptionType::Put)
    }

    /// American call price from an n-step lattice.
    ///
    /// Without dividends or ladder resets, early exercise of a call is
    /// never optimal, so the European price is returned directly. With
    /// schedules, the spot is escrow-adjusted and the rollback applies the
    /// dividend accumulator and active-strike resolution at every layer.
    pub fn price_american_call(&self, steps: Size) -> Result<Price> {
        if self.dividends.is_empty() && self.ladder.is_empty() {
            return self.price_european_call(steps);
        }
        let contract = self.escrowed_contract()?;
        let lattice = LatticeParams::new(&contract, steps)?;
        Ok(roll_back_american_adjusted(
            &lattice,
            &contract,
            OptionType::Call,
            &self.dividends,
            &self.ladder,
        ))
    }

    /// American put price from an n-step lattice.
    ///
    /// The put path carries no dividend or ladder adjustment; early
    /// exercise is compared against the plain intrinsic value.
    pub fn price_american_put(&self, steps: Size) -> Result<Price> {
        let lattice = LatticeParams::new(&self.contract, steps)?;
        Ok(roll_back_american(
            &lattice,
            self.contract.strike(),
            OptionType::Put,
        ))
    }

    /// Closed-form European call price (the convergence oracle).
    pub fn price_black_scholes_call(&self) -> Price {
        black_scholes_call(&self.contract)
    }

    /// Closed-form European put price (the convergence oracle).
    pub fn price_black_scholes_put(&self) -> Price {
        black_scholes_put(&self.contract)
    }
}
