//! Constant-product pricing over virtual + real reserves.
//!
//! For an input `a` against reserves `(x_in, y_out)` the curve pays
//! `y_out * a / (x_in + a)`, rounded down, so `x * y` never decreases.
//! Products are widened to `u128` and narrowed only after division.

use anchor_lang::prelude::*;

use crate::constants::RATE_DENOMINATOR;
use crate::errors::LaunchError;
use crate::state::PoolState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyQuote {
    /// Quote that enters the reserves, fee excluded.
    pub quote_in: u64,
    pub fee: u64,
    pub tokens_out: u64,
    /// The buy lifts real quote reserves to the completion threshold.
    pub completes: bool,
}

impl BuyQuote {
    /// Total the buyer pays.
    pub fn cost(&self) -> Result<u64> {
        Ok(self
            .quote_in
            .checked_add(self.fee)
            .ok_or(LaunchError::ArithmeticOverflow)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellQuote {
    pub tokens_in: u64,
    /// Quote that leaves the reserves.
    pub quote_out: u64,
    pub fee: u64,
    pub tax: u64,
    /// What the seller receives: `quote_out - fee - tax`.
    pub proceeds: u64,
}

/// `amount * rate / RATE_DENOMINATOR`, rounded down.
pub fn apply_rate(rate: u64, amount: u64) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(rate as u128)
        .ok_or(LaunchError::ArithmeticOverflow)?
        / RATE_DENOMINATOR;
    u64::try_from(scaled).map_err(|_| LaunchError::ArithmeticOverflow.into())
}

pub fn trading_fee(rate: u64, amount: u64) -> Result<u64> {
    apply_rate(rate, amount)
}

pub fn output_amount(input_amount: u64, input_reserve: u64, output_reserve: u64) -> Result<u64> {
    let numerator = (output_reserve as u128)
        .checked_mul(input_amount as u128)
        .ok_or(LaunchError::ArithmeticOverflow)?;
    let denominator = (input_reserve as u128)
        .checked_add(input_amount as u128)
        .ok_or(LaunchError::ArithmeticOverflow)?;
    require!(denominator > 0, LaunchError::InsufficientOutput);
    u64::try_from(numerator / denominator).map_err(|_| LaunchError::ArithmeticOverflow.into())
}

/// Prices a buy of `amount` quote. The fee comes off the top; the rest is
/// clipped so real quote reserves stop exactly at `completion_threshold`.
pub fn quote_for_buy(
    pool: &PoolState,
    fee_rate: u64,
    completion_threshold: u64,
    amount: u64,
) -> Result<BuyQuote> {
    require!(amount > 0, LaunchError::InvalidAmount);

    let mut fee = trading_fee(fee_rate, amount)?;
    let mut quote_in = amount
        .checked_sub(fee)
        .ok_or(LaunchError::ArithmeticOverflow)?;

    let room = completion_threshold.saturating_sub(pool.real_quote_reserves);
    if quote_in > room {
        quote_in = room;
        fee = trading_fee(fee_rate, quote_in)?;
    }
    require!(quote_in > 0, LaunchError::InsufficientOutput);

    let tokens_out = output_amount(quote_in, pool.quote_reserves()?, pool.base_reserves()?)?;
    require!(
        tokens_out > 0 && tokens_out <= pool.real_base_reserves,
        LaunchError::InsufficientOutput
    );

    let completes = pool
        .real_quote_reserves
        .checked_add(quote_in)
        .ok_or(LaunchError::ArithmeticOverflow)?
        >= completion_threshold;

    Ok(BuyQuote {
        quote_in,
        fee,
        tokens_out,
        completes,
    })
}

/// Prices a sell of `tokens_in`. Fee and tax are both taken from the curve
/// output.
pub fn quote_for_sell(
    pool: &PoolState,
    fee_rate: u64,
    tax_rate: u64,
    tokens_in: u64,
) -> Result<SellQuote> {
    require!(tokens_in > 0, LaunchError::InvalidAmount);

    let quote_out = output_amount(tokens_in, pool.base_reserves()?, pool.quote_reserves()?)?;
    require!(
        quote_out > 0 && quote_out <= pool.real_quote_reserves,
        LaunchError::InsufficientOutput
    );

    let fee = trading_fee(fee_rate, quote_out)?;
    let tax = apply_rate(tax_rate, quote_out)?;
    let proceeds = quote_out
        .checked_sub(fee)
        .and_then(|rest| rest.checked_sub(tax))
        .ok_or(LaunchError::InsufficientOutput)?;

    Ok(SellQuote {
        tokens_in,
        quote_out,
        fee,
        tax,
        proceeds,
    })
}
