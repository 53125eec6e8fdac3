use anchor_lang::prelude::*;

use crate::constants::{GLOBAL_CONFIG_SEED, PARTICIPANT_SEED, POOL_SEED, RESERVE_SEED, USER_SEED};

/// Maps a seed tag and an owner key to an account address.
pub type Derive = fn(&[u8], &Pubkey) -> Pubkey;

pub fn derive_with_bump(tag: &[u8], key: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[tag, key.as_ref()], &crate::ID)
}

/// Program derived address for `(tag, key)`.
pub fn derive(tag: &[u8], key: &Pubkey) -> Pubkey {
    derive_with_bump(tag, key).0
}

pub fn global_config_address() -> Pubkey {
    Pubkey::find_program_address(&[GLOBAL_CONFIG_SEED], &crate::ID).0
}

pub fn pool_address(mint: &Pubkey) -> Pubkey {
    derive(POOL_SEED, mint)
}

pub fn reserve_address(mint: &Pubkey) -> Pubkey {
    derive(RESERVE_SEED, mint)
}

pub fn user_address(user: &Pubkey) -> Pubkey {
    derive(USER_SEED, user)
}

pub fn participant_address(pool: &Pubkey, user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[PARTICIPANT_SEED, pool.as_ref(), user.as_ref()], &crate::ID).0
}
