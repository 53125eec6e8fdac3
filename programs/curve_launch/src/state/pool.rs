use anchor_lang::prelude::*;

use crate::constants::RATE_DENOMINATOR;
use crate::curve::{BuyQuote, SellQuote};
use crate::errors::LaunchError;
use crate::tax::TaxType;
use crate::waiting_room::WaitingRoomState;

/// Bonding curve state for a single mint.
///
/// The curve prices against `real + virt` on both sides. Base reserves are
/// escrowed in the pool's token account; quote reserves in the `reserve` PDA.
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct PoolState {
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub reserve: Pubkey,
    pub metadata: Pubkey,
    pub trade_start_time: i64,
    pub tax_start_timestamp: i64,
    pub initial_real_base_reserves: u64,
    pub real_base_reserves: u64,
    pub virt_base_reserves: u64,
    pub virt_quote_reserves: u64,
    pub real_quote_reserves: u64,
    /// Real quote reserves at which this pool completes, fixed at creation.
    pub completion_threshold: u64,
    pub graduate_fee: u64,
    pub trade_count: u64,
    pub complete: bool,
    pub withdrawn: bool,
    pub tax_type: TaxType,
    pub waiting_room: WaitingRoomState,
    pub bump: u8,
    pub reserve_bump: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolPhase {
    Created,
    Trading,
    Completed,
    Withdrawn,
}

impl PoolState {
    pub fn phase(&self, now: i64) -> PoolPhase {
        if self.withdrawn {
            PoolPhase::Withdrawn
        } else if self.complete {
            PoolPhase::Completed
        } else if now < self.trade_start_time {
            PoolPhase::Created
        } else {
            PoolPhase::Trading
        }
    }

    pub fn base_reserves(&self) -> Result<u64> {
        Ok(self
            .real_base_reserves
            .checked_add(self.virt_base_reserves)
            .ok_or(LaunchError::ArithmeticOverflow)?)
    }

    pub fn quote_reserves(&self) -> Result<u64> {
        Ok(self
            .virt_quote_reserves
            .checked_add(self.real_quote_reserves)
            .ok_or(LaunchError::ArithmeticOverflow)?)
    }

    /// Share of the real base reserves sold so far, in `RATE_DENOMINATOR` units.
    pub fn progress(&self) -> Result<u64> {
        if self.initial_real_base_reserves == 0 {
            return Ok(0);
        }
        let sold = self
            .initial_real_base_reserves
            .saturating_sub(self.real_base_reserves);
        let progress = (sold as u128)
            .checked_mul(RATE_DENOMINATOR)
            .ok_or(LaunchError::ArithmeticOverflow)?
            / self.initial_real_base_reserves as u128;
        u64::try_from(progress).map_err(|_| LaunchError::ArithmeticOverflow.into())
    }

    /// The escrow must hold at least the base reserves and the real quote
    /// reserves. Anyone can send tokens to the pool's token account, and the
    /// quote escrow carries its rent floor, so surplus on either side is fine.
    pub fn check_escrow(&self, base_balance: u64, quote_balance: u64) -> Result<()> {
        if self.withdrawn {
            return Ok(());
        }
        require!(
            base_balance >= self.base_reserves()?,
            LaunchError::ReserveMismatch
        );
        require!(
            quote_balance >= self.real_quote_reserves,
            LaunchError::ReserveMismatch
        );
        Ok(())
    }

    pub fn apply_buy(&mut self, quote: &BuyQuote) -> Result<()> {
        self.real_base_reserves = self
            .real_base_reserves
            .checked_sub(quote.tokens_out)
            .ok_or(LaunchError::InsufficientOutput)?;
        self.real_quote_reserves = self
            .real_quote_reserves
            .checked_add(quote.quote_in)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        self.bump_trade_count()
    }

    pub fn apply_sell(&mut self, quote: &SellQuote) -> Result<()> {
        self.real_base_reserves = self
            .real_base_reserves
            .checked_add(quote.tokens_in)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        self.real_quote_reserves = self
            .real_quote_reserves
            .checked_sub(quote.quote_out)
            .ok_or(LaunchError::InsufficientOutput)?;
        self.bump_trade_count()
    }

    fn bump_trade_count(&mut self) -> Result<()> {
        self.trade_count = self
            .trade_count
            .checked_add(1)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        Ok(())
    }
}
