use anchor_lang::prelude::*;

use crate::curve::apply_rate;
use crate::errors::LaunchError;
use crate::state::{GlobalConfig, UserState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferralCredit {
    pub referrer: Pubkey,
    pub reward: u64,
}

impl ReferralCredit {
    pub fn none() -> Self {
        Self {
            referrer: Pubkey::default(),
            reward: 0,
        }
    }
}

/// Links `trader` to `referrer`. A link can only be created before the
/// wallet's first trade and never changes afterwards.
pub fn attach_referrer(trader: &Pubkey, user: &mut UserState, referrer: Pubkey) -> Result<()> {
    if referrer == Pubkey::default() {
        return Ok(());
    }
    require_keys_neq!(referrer, *trader, LaunchError::InvalidReferrer);

    if user.referrer == Pubkey::default() {
        require!(user.trade_count == 0, LaunchError::ReferrerImmutable);
        user.referrer = referrer;
    }
    require_keys_eq!(user.referrer, referrer, LaunchError::ReferrerImmutable);
    Ok(())
}

/// Computes the referral share of `fee` for one trade and books it.
///
/// The default key means "no referrer" and earns nothing. A trader pays its
/// referrer on at most `referral_trade_limit` trades: the n-th rewarded trade
/// pays while `n <= referral_trade_limit`, so a limit of 2 rewards two trades
/// and a limit of 0 rewards none. Trading itself is never blocked by the limit.
pub fn apply_referral(
    config: &GlobalConfig,
    trader: &Pubkey,
    user: &mut UserState,
    supplied: Pubkey,
    referrer_state: Option<&mut UserState>,
    fee: u64,
    may_attach: bool,
) -> Result<ReferralCredit> {
    if supplied == Pubkey::default() {
        return Ok(ReferralCredit::none());
    }
    require_keys_neq!(supplied, *trader, LaunchError::InvalidReferrer);

    if may_attach {
        attach_referrer(trader, user, supplied)?;
    } else {
        require_keys_eq!(user.referrer, supplied, LaunchError::ReferrerImmutable);
    }

    if let Some(state) = referrer_state.as_deref() {
        require_keys_eq!(state.user, supplied, LaunchError::InvalidReferrer);
    }

    let trade_number = user
        .referred_trades
        .checked_add(1)
        .ok_or(LaunchError::ArithmeticOverflow)?;
    if trade_number > config.referral_trade_limit {
        return Ok(ReferralCredit {
            referrer: supplied,
            reward: 0,
        });
    }

    let reward = apply_rate(config.referral_reward_fee, fee)?;
    user.referred_trades = trade_number;
    if let Some(state) = referrer_state {
        state.referral_earned = state
            .referral_earned
            .checked_add(reward)
            .ok_or(LaunchError::ArithmeticOverflow)?;
    }

    Ok(ReferralCredit {
        referrer: supplied,
        reward,
    })
}
