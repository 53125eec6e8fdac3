use anchor_lang::prelude::*;

use crate::constants::SOL_PRICE_DECIMALS;
use crate::errors::LaunchError;

/// Per-wallet trading and referral record, shared by every pool.
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct UserState {
    pub user: Pubkey,
    pub trade_count: u64,
    pub trading_volume_quote: u64,
    pub trading_volume_usd: u64,
    /// Identity only. `Pubkey::default()` means no referrer.
    pub referrer: Pubkey,
    /// Trades of this wallet that paid its referrer.
    pub referred_trades: u64,
    /// Rewards earned by referring other wallets.
    pub referral_earned: u64,
    pub bump: u8,
}

impl UserState {
    pub fn new(user: Pubkey, bump: u8) -> Self {
        Self {
            user,
            trade_count: 0,
            trading_volume_quote: 0,
            trading_volume_usd: 0,
            referrer: Pubkey::default(),
            referred_trades: 0,
            referral_earned: 0,
            bump,
        }
    }

    /// Lazily binds a freshly created account to its wallet.
    pub fn bind(&mut self, user: Pubkey, bump: u8) -> Result<()> {
        if self.user == Pubkey::default() {
            self.user = user;
            self.bump = bump;
        }
        require_keys_eq!(self.user, user, LaunchError::Unauthorized);
        Ok(())
    }

    pub fn record_trade(&mut self, quote_amount: u64, sol_price: u64) -> Result<u64> {
        let volume_usd = (quote_amount as u128)
            .checked_mul(sol_price as u128)
            .ok_or(LaunchError::ArithmeticOverflow)?
            / SOL_PRICE_DECIMALS;
        let volume_usd = u64::try_from(volume_usd).map_err(|_| LaunchError::ArithmeticOverflow)?;

        self.trade_count = self
            .trade_count
            .checked_add(1)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        self.trading_volume_quote = self
            .trading_volume_quote
            .checked_add(quote_amount)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        self.trading_volume_usd = self
            .trading_volume_usd
            .checked_add(volume_usd)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        Ok(volume_usd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_trade_converts_volume_to_usd() {
        let mut user = UserState::new(Pubkey::new_unique(), 254);
        // 2 SOL at $150
        let usd = user.record_trade(2_000_000_000, 150_000_000_000).unwrap();
        assert_eq!(usd, 300_000_000_000);
        assert_eq!(user.trade_count, 1);
        assert_eq!(user.trading_volume_quote, 2_000_000_000);
        assert_eq!(user.trading_volume_usd, 300_000_000_000);
    }

    #[test]
    fn bind_sets_owner_once() {
        let wallet = Pubkey::new_unique();
        let mut user = UserState::new(Pubkey::default(), 0);
        user.bind(wallet, 7).unwrap();
        assert_eq!(user.user, wallet);
        assert_eq!(user.bump, 7);

        assert!(user.bind(Pubkey::new_unique(), 7).is_err());
    }
}
