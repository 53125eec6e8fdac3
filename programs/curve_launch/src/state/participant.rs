use anchor_lang::prelude::*;

use crate::errors::LaunchError;

/// Waiting room membership of one wallet in one pool.
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Participant {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub joined: bool,
    pub tokens_bought: u64,
    pub bump: u8,
}

impl Participant {
    pub fn new(pool: Pubkey, user: Pubkey, bump: u8) -> Self {
        Self {
            pool,
            user,
            joined: false,
            tokens_bought: 0,
            bump,
        }
    }

    pub fn bind(&mut self, pool: Pubkey, user: Pubkey, bump: u8) -> Result<()> {
        if self.pool == Pubkey::default() {
            *self = Self::new(pool, user, bump);
        }
        require_keys_eq!(self.pool, pool, LaunchError::Unauthorized);
        require_keys_eq!(self.user, user, LaunchError::Unauthorized);
        Ok(())
    }
}
