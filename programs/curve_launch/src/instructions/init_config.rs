use anchor_lang::prelude::*;

use crate::constants::GLOBAL_CONFIG_SEED;
use crate::events::ConfigUpdated;
use crate::lifecycle;
use crate::state::GlobalConfig;

/// Creates the protocol config with default curve and fee parameters.
/// The caller becomes the owner.
#[derive(Accounts)]
pub struct InitConfig<'info> {
    /// Future config owner, pays for the account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Singleton config PDA
    // init_if_needed so a repeated call reaches the AlreadyInitialized check
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [GLOBAL_CONFIG_SEED],
        bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Needed to create the config account
    pub system_program: Program<'info, System>,
}

impl<'info> InitConfig<'info> {
    pub fn init_config(&mut self, verify_signer: Pubkey, bumps: InitConfigBumps) -> Result<()> {
        lifecycle::init_config(
            &mut self.global_config,
            self.owner.key(),
            verify_signer,
            bumps.global_config,
        )?;

        let config = &self.global_config;
        emit!(ConfigUpdated {
            owner: config.owner,
            fee_recipient: config.fee_recipient,
            verify_signer: config.verify_signer,
            trading_fee: config.trading_fee,
            referral_reward_fee: config.referral_reward_fee,
            referral_trade_limit: config.referral_trade_limit,
        });
        msg!("Global config initialized, owner {}", config.owner);
        Ok(())
    }
}
