use anchor_lang::prelude::*;

use crate::constants::{RATE_DENOMINATOR, SECONDS_PER_DAY};
use crate::errors::LaunchError;
use crate::state::PoolState;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum TaxDuration {
    /// Active for this many whole days after pool creation.
    FixedDuration { days: u64 },
    Lifetime,
}

impl TaxDuration {
    pub fn is_active(&self, started_at: i64, now: i64) -> bool {
        match self {
            TaxDuration::Lifetime => true,
            TaxDuration::FixedDuration { days } => {
                let elapsed_days = now.saturating_sub(started_at).max(0) / SECONDS_PER_DAY;
                elapsed_days as u64 <= *days
            }
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct ReductionTier {
    pub days_held: u64,
    pub tax_rate: u64,
}

/// Sell tax schedule chosen by the pool creator. Rates use `RATE_DENOMINATOR`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum TaxType {
    Disabled,
    Flat {
        rate: u64,
    },
    HigherSellTax {
        threshold_percentage: u64,
        higher_tax_rate: u64,
        standard_tax_rate: u64,
        duration: TaxDuration,
    },
    DecayTax {
        initial_tax_rate: u64,
        reduction_tiers: [Option<ReductionTier>; 4],
        min_tax_rate: u64,
        duration: TaxDuration,
    },
}

impl TaxType {
    pub fn validate(&self) -> Result<()> {
        let within = |rate: &u64| (*rate as u128) <= RATE_DENOMINATOR;
        let valid = match self {
            TaxType::Disabled => true,
            TaxType::Flat { rate } => within(rate),
            TaxType::HigherSellTax {
                threshold_percentage,
                higher_tax_rate,
                standard_tax_rate,
                ..
            } => {
                within(threshold_percentage)
                    && within(higher_tax_rate)
                    && within(standard_tax_rate)
                    && higher_tax_rate >= standard_tax_rate
            }
            TaxType::DecayTax {
                initial_tax_rate,
                reduction_tiers,
                min_tax_rate,
                ..
            } => {
                within(initial_tax_rate)
                    && min_tax_rate <= initial_tax_rate
                    && reduction_tiers
                        .iter()
                        .flatten()
                        .all(|tier| within(&tier.tax_rate))
            }
        };
        require!(valid, LaunchError::InvalidConfig);
        Ok(())
    }
}

/// Sell tax rate for `pool` at `now`.
///
/// `progress` is the sold share of the pool in `RATE_DENOMINATOR` units and
/// `last_received_time` is when the seller last received tokens.
pub fn tax_rate(pool: &PoolState, now: i64, progress: u64, last_received_time: i64) -> Result<u64> {
    let started_at = pool.tax_start_timestamp;
    let rate = match &pool.tax_type {
        TaxType::Disabled => 0,
        TaxType::Flat { rate } => *rate,
        TaxType::HigherSellTax {
            threshold_percentage,
            higher_tax_rate,
            standard_tax_rate,
            duration,
        } => {
            if duration.is_active(started_at, now) && progress >= *threshold_percentage {
                *higher_tax_rate
            } else {
                *standard_tax_rate
            }
        }
        TaxType::DecayTax {
            initial_tax_rate,
            reduction_tiers,
            min_tax_rate,
            duration,
        } => {
            if !duration.is_active(started_at, now) {
                *min_tax_rate
            } else {
                let held = now
                    .checked_sub(last_received_time)
                    .filter(|held| *held >= 0)
                    .ok_or(LaunchError::StaleAttestation)?;
                let days_held = (held / SECONDS_PER_DAY) as u64;

                // the most advanced tier reached wins
                reduction_tiers
                    .iter()
                    .flatten()
                    .filter(|tier| tier.days_held <= days_held)
                    .max_by_key(|tier| tier.days_held)
                    .map(|tier| tier.tax_rate)
                    .unwrap_or(*initial_tax_rate)
                    .min(*initial_tax_rate)
                    .max(*min_tax_rate)
            }
        }
    };
    Ok(rate)
}
