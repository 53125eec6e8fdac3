use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::events::TradeEvent;
use crate::instructions::transfers::{transfer_lamports, transfer_tokens, TokenMove};
use crate::lifecycle::{self, SellRequest};
use crate::signature::Attestation;
use crate::state::{GlobalConfig, PoolState, UserState};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct SellInput {
    /// Tokens to sell.
    pub amount: u64,
    /// Signature from the verify signer over `sell_message(last_received_time)`.
    pub attestation: Attestation,
    /// When the seller last received tokens of this mint.
    pub last_received_time: i64,
}

/// Sells tokens back to the curve for SOL.
///
/// Trading fee and sell tax come out of the proceeds. The tax stays in the
/// reserve.
#[derive(Accounts)]
pub struct Sell<'info> {
    /// Trader returning tokens
    #[account(mut)]
    pub seller: Signer<'info>,

    /// Protocol config with the fee rates and attestation signer
    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Receives the protocol share of the trading fee
    #[account(mut, address = global_config.fee_recipient)]
    pub fee_recipient: SystemAccount<'info>,

    /// Mint of the launched token
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Curve state for this mint
    /// Also the authority of the token escrow
    #[account(
        mut,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, PoolState>>,

    /// Token escrow holding the unsold supply
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pool,
    )]
    pub pool_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// SOL reserve backing the curve's real quote reserves
    #[account(
        mut,
        seeds = [RESERVE_SEED, mint.key().as_ref()],
        bump = pool.reserve_bump,
    )]
    pub reserve: SystemAccount<'info>,

    /// Seller's token account the tokens leave from
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = seller,
    )]
    pub seller_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Seller's trading record across all pools
    #[account(
        init_if_needed,
        payer = seller,
        space = 8 + UserState::INIT_SPACE,
        seeds = [USER_SEED, seller.key().as_ref()],
        bump,
    )]
    pub user_state: Box<Account<'info, UserState>>,

    /// CHECK: receives the referral reward; must be the seller's stored referrer
    #[account(mut)]
    pub referrer: Option<UncheckedAccount<'info>>,

    /// Referrer's trading record, credited with the reward when supplied
    #[account(mut)]
    pub referrer_state: Option<Box<Account<'info, UserState>>>,

    /// Token program owning the mint
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Sell<'info> {
    pub fn sell(&mut self, input: SellInput, bumps: SellBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let seller = self.seller.key();
        let mint_key = self.mint.key();

        self.pool
            .check_escrow(self.pool_token_account.amount, self.reserve.lamports())?;
        self.user_state.bind(seller, bumps.user_state)?;

        let request = SellRequest {
            trader: seller,
            amount: input.amount,
            attestation: input.attestation,
            referrer: self
                .referrer
                .as_ref()
                .map(|referrer| referrer.key())
                .unwrap_or_default(),
            last_received_time: input.last_received_time,
        };
        let outcome = lifecycle::execute_sell(
            &self.global_config,
            &mut self.pool,
            &mut self.user_state,
            self.referrer_state
                .as_deref_mut()
                .map(|state| &mut **state),
            &request,
            now,
        )?;

        transfer_tokens(
            TokenMove {
                from: self.seller_token_account.to_account_info(),
                to: self.pool_token_account.to_account_info(),
                mint: self.mint.to_account_info(),
                authority: self.seller.to_account_info(),
                token_program: self.token_program.to_account_info(),
                decimals: self.mint.decimals,
            },
            outcome.tokens_in,
            &[],
        )?;

        let reserve_seeds: &[&[u8]] =
            &[RESERVE_SEED, mint_key.as_ref(), &[self.pool.reserve_bump]];
        let system_program = self.system_program.to_account_info();
        transfer_lamports(
            self.reserve.to_account_info(),
            self.seller.to_account_info(),
            system_program.clone(),
            outcome.proceeds,
            &[reserve_seeds],
        )?;
        transfer_lamports(
            self.reserve.to_account_info(),
            self.fee_recipient.to_account_info(),
            system_program.clone(),
            outcome.protocol_fee(),
            &[reserve_seeds],
        )?;
        if let Some(referrer) = &self.referrer {
            transfer_lamports(
                self.reserve.to_account_info(),
                referrer.to_account_info(),
                system_program,
                outcome.referral.reward,
                &[reserve_seeds],
            )?;
        }

        self.pool_token_account.reload()?;
        self.pool
            .check_escrow(self.pool_token_account.amount, self.reserve.lamports())?;

        emit!(TradeEvent {
            user: seller,
            mint: mint_key,
            is_buy: false,
            quote_amount: outcome.quote_out,
            token_amount: outcome.tokens_in,
            fee: outcome.fee,
            tax: outcome.tax,
            referrer: outcome.referral.referrer,
            referral_reward: outcome.referral.reward,
            base_reserves: self.pool.base_reserves()?,
            quote_reserves: self.pool.quote_reserves()?,
            timestamp: now,
        });
        msg!(
            "Sell: {} tokens for {} quote, fee {}, tax {}",
            outcome.tokens_in,
            outcome.quote_out,
            outcome.fee,
            outcome.tax
        );
        Ok(())
    }
}
