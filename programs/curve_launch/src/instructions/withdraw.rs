use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::constants::*;
use crate::events::WithdrawEvent;
use crate::instructions::transfers::{transfer_lamports, transfer_tokens, TokenMove};
use crate::lifecycle;
use crate::state::{GlobalConfig, PoolState};

/// # Withdraw Instruction
///
/// Releases the reserves of a completed pool to its creator or the protocol
/// owner so they can seed liquidity elsewhere. The remaining base tokens and
/// every lamport held by the quote escrow move to the caller, and the pool is
/// marked withdrawn. A pool can be withdrawn once.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, PoolState>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pool,
    )]
    pub pool_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [RESERVE_SEED, mint.key().as_ref()],
        bump = pool.reserve_bump,
    )]
    pub reserve: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub authority_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let authority = self.authority.key();
        let mint_key = self.mint.key();

        self.pool
            .check_escrow(self.pool_token_account.amount, self.reserve.lamports())?;
        let outcome = lifecycle::execute_withdraw(&self.global_config, &mut self.pool, &authority)?;
        // tokens sent to the escrow from outside leave with the reserves
        let base_amount = self.pool_token_account.amount;

        let pool_seeds: &[&[u8]] = &[POOL_SEED, mint_key.as_ref(), &[self.pool.bump]];
        transfer_tokens(
            TokenMove {
                from: self.pool_token_account.to_account_info(),
                to: self.authority_token_account.to_account_info(),
                mint: self.mint.to_account_info(),
                authority: self.pool.to_account_info(),
                token_program: self.token_program.to_account_info(),
                decimals: self.mint.decimals,
            },
            base_amount,
            &[pool_seeds],
        )?;

        // the rent floor goes too; the escrow is not used again
        let reserve_seeds: &[&[u8]] =
            &[RESERVE_SEED, mint_key.as_ref(), &[self.pool.reserve_bump]];
        transfer_lamports(
            self.reserve.to_account_info(),
            self.authority.to_account_info(),
            self.system_program.to_account_info(),
            self.reserve.lamports(),
            &[reserve_seeds],
        )?;

        emit!(WithdrawEvent {
            authority,
            mint: mint_key,
            base_amount,
            quote_amount: outcome.quote_amount,
            timestamp: now,
        });
        msg!(
            "Withdrawn {} tokens and {} quote from mint {}",
            base_amount,
            outcome.quote_amount,
            mint_key
        );
        Ok(())
    }
}
