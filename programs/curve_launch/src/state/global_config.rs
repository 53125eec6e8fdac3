use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchError;

/// Protocol-wide settings. One instance per program, owned by `owner`.
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct GlobalConfig {
    pub initialized: bool,
    pub owner: Pubkey,
    pub fee_recipient: Pubkey,
    /// Identity of the anti-bot authority that co-signs every trade.
    pub verify_signer: Pubkey,
    pub total_token_supply: u64,
    pub init_real_base_reserves: u64,
    pub init_virt_base_reserves: u64,
    pub init_virt_quote_reserves: u64,
    /// Real quote reserves at which a pool completes.
    pub completion_threshold: u64,
    pub graduate_fee: u64,
    pub trading_fee: u64,
    pub referral_reward_fee: u64,
    pub referral_trade_limit: u64,
    pub sol_price: u64,
    pub bump: u8,
}

impl GlobalConfig {
    pub fn with_defaults(owner: Pubkey, verify_signer: Pubkey, bump: u8) -> Self {
        Self {
            initialized: true,
            owner,
            fee_recipient: owner,
            verify_signer,
            total_token_supply: DEFAULT_TOTAL_SUPPLY,
            init_real_base_reserves: DEFAULT_REAL_BASE_RESERVES,
            init_virt_base_reserves: DEFAULT_VIRT_BASE_RESERVES,
            init_virt_quote_reserves: DEFAULT_VIRT_QUOTE_RESERVES,
            completion_threshold: DEFAULT_COMPLETION_THRESHOLD,
            graduate_fee: DEFAULT_GRADUATE_FEE,
            trading_fee: DEFAULT_TRADING_FEE,
            referral_reward_fee: DEFAULT_REFERRAL_REWARD_FEE,
            referral_trade_limit: DEFAULT_REFERRAL_TRADE_LIMIT,
            sol_price: DEFAULT_SOL_PRICE,
            bump,
        }
    }

    pub fn require_initialized(&self) -> Result<()> {
        require!(self.initialized, LaunchError::ConfigNotInitialized);
        Ok(())
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, LaunchError::Unauthorized);
        Ok(())
    }

    /// Rejects configurations the curve cannot honour.
    pub fn validate(&self) -> Result<()> {
        require!(
            self.total_token_supply > 0
                && self.init_real_base_reserves > 0
                && self.init_virt_base_reserves > 0
                && self.init_virt_quote_reserves > 0
                && self.completion_threshold > 0
                && self.sol_price > 0,
            LaunchError::InvalidConfig
        );

        let seeded_supply = self
            .init_real_base_reserves
            .checked_add(self.init_virt_base_reserves)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        require!(
            seeded_supply == self.total_token_supply,
            LaunchError::InvalidConfig
        );
        require!(
            self.graduate_fee <= self.completion_threshold,
            LaunchError::InvalidConfig
        );
        require!(
            (self.trading_fee as u128) <= RATE_DENOMINATOR
                && (self.referral_reward_fee as u128) <= RATE_DENOMINATOR,
            LaunchError::InvalidConfig
        );

        // At the completion threshold the curve must still hold at least the
        // virtual base reserves, otherwise real base reserves would run dry
        // before the pool can complete.
        let quote_at_completion = (self.init_virt_quote_reserves as u128)
            .checked_add(self.completion_threshold as u128)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        let base_at_completion = (self.total_token_supply as u128)
            .checked_mul(self.init_virt_quote_reserves as u128)
            .ok_or(LaunchError::ArithmeticOverflow)?
            / quote_at_completion;
        require!(
            base_at_completion >= self.init_virt_base_reserves as u128,
            LaunchError::InvalidConfig
        );

        Ok(())
    }
}

/// Full replacement of the owner-editable fields. Curve seeding values are
/// optional and keep their current value when `None`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct UpdateConfigInput {
    pub owner: Pubkey,
    pub fee_recipient: Pubkey,
    pub verify_signer: Pubkey,
    pub trading_fee: u64,
    pub referral_reward_fee: u64,
    pub referral_trade_limit: u64,
    pub sol_price: u64,
    pub total_token_supply: Option<u64>,
    pub init_real_base_reserves: Option<u64>,
    pub init_virt_base_reserves: Option<u64>,
    pub init_virt_quote_reserves: Option<u64>,
    pub completion_threshold: Option<u64>,
    pub graduate_fee: Option<u64>,
}

impl UpdateConfigInput {
    /// Input that leaves `config` as it is.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            owner: config.owner,
            fee_recipient: config.fee_recipient,
            verify_signer: config.verify_signer,
            trading_fee: config.trading_fee,
            referral_reward_fee: config.referral_reward_fee,
            referral_trade_limit: config.referral_trade_limit,
            sol_price: config.sol_price,
            total_token_supply: None,
            init_real_base_reserves: None,
            init_virt_base_reserves: None,
            init_virt_quote_reserves: None,
            completion_threshold: None,
            graduate_fee: None,
        }
    }
}
