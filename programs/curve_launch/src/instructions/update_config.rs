use anchor_lang::prelude::*;

use crate::constants::GLOBAL_CONFIG_SEED;
use crate::events::{ConfigUpdated, SolPriceUpdated};
use crate::lifecycle;
use crate::state::GlobalConfig;

pub use crate::state::UpdateConfigInput;

/// Owner-only changes to the protocol config. Live pools keep the completion
/// threshold and graduation fee they were created with.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Must match the stored config owner
    pub owner: Signer<'info>,

    /// Config being changed
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(&mut self, input: UpdateConfigInput) -> Result<()> {
        lifecycle::update_config(&mut self.global_config, &self.owner.key(), &input)?;

        let config = &self.global_config;
        emit!(ConfigUpdated {
            owner: config.owner,
            fee_recipient: config.fee_recipient,
            verify_signer: config.verify_signer,
            trading_fee: config.trading_fee,
            referral_reward_fee: config.referral_reward_fee,
            referral_trade_limit: config.referral_trade_limit,
        });
        msg!("Global config updated");
        Ok(())
    }

    /// Sets the SOL price used for USD trading volume.
    pub fn update_sol_price(&mut self, sol_price: u64) -> Result<()> {
        lifecycle::update_sol_price(&mut self.global_config, &self.owner.key(), sol_price)?;

        emit!(SolPriceUpdated {
            sol_price,
            timestamp: Clock::get()?.unix_timestamp,
        });
        msg!("SOL price set to {}", sol_price);
        Ok(())
    }
}
