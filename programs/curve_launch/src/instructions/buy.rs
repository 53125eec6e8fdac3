use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::constants::*;
use crate::events::{CompleteEvent, TradeEvent};
use crate::instructions::transfers::{transfer_lamports, transfer_tokens, TokenMove};
use crate::lifecycle::{self, BuyRequest};
use crate::signature::Attestation;
use crate::state::{GlobalConfig, Participant, PoolState, UserState};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct BuyInput {
    /// Quote the buyer is willing to spend, trading fee included.
    pub amount: u64,
    /// Signature from the verify signer over the buy message.
    pub attestation: Attestation,
}

/// Buys tokens from the curve for SOL.
///
/// The buyer pays the quote into the reserve and the fee to the fee recipient
/// and referrer. The buy that reaches the pool's completion threshold also
/// moves the graduation fee out of the reserve.
#[derive(Accounts)]
pub struct Buy<'info> {
    /// Trader paying SOL and any account creation
    #[account(mut)]
    pub buyer: Signer<'info>,

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

    /// Buyer's token account, created on the first buy
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Buyer's trading record across all pools
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + UserState::INIT_SPACE,
        seeds = [USER_SEED, buyer.key().as_ref()],
        bump,
    )]
    pub user_state: Box<Account<'info, UserState>>,

    /// Buyer's waiting room admission for this pool
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Participant::INIT_SPACE,
        seeds = [PARTICIPANT_SEED, pool.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub participant: Box<Account<'info, Participant>>,

    /// CHECK: receives the referral reward; checked against the buyer's stored referrer
    #[account(mut)]
    pub referrer: Option<UncheckedAccount<'info>>,

    /// Referrer's trading record, credited with the reward when supplied
    #[account(mut)]
    pub referrer_state: Option<Box<Account<'info, UserState>>>,

    /// Token program owning the mint
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Buy<'info> {
    pub fn buy(&mut self, input: BuyInput, bumps: BuyBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let buyer = self.buyer.key();
        let mint_key = self.mint.key();

        self.pool
            .check_escrow(self.pool_token_account.amount, self.reserve.lamports())?;
        self.user_state.bind(buyer, bumps.user_state)?;
        self.participant
            .bind(self.pool.key(), buyer, bumps.participant)?;

        let request = BuyRequest {
            trader: buyer,
            amount: input.amount,
            attestation: input.attestation,
            referrer: self
                .referrer
                .as_ref()
                .map(|referrer| referrer.key())
                .unwrap_or_default(),
            holder_balance: self.buyer_token_account.amount,
        };
        let outcome = lifecycle::execute_buy(
            &self.global_config,
            &mut self.pool,
            &mut self.user_state,
            &mut self.participant,
            self.referrer_state
                .as_deref_mut()
                .map(|state| &mut **state),
            &request,
            now,
        )?;

        let system_program = self.system_program.to_account_info();
        transfer_lamports(
            self.buyer.to_account_info(),
            self.reserve.to_account_info(),
            system_program.clone(),
            outcome.quote_in,
            &[],
        )?;
        transfer_lamports(
            self.buyer.to_account_info(),
            self.fee_recipient.to_account_info(),
            system_program.clone(),
            outcome.protocol_fee(),
            &[],
        )?;
        if let Some(referrer) = &self.referrer {
            transfer_lamports(
                self.buyer.to_account_info(),
                referrer.to_account_info(),
                system_program.clone(),
                outcome.referral.reward,
                &[],
            )?;
        }

        let pool_seeds: &[&[u8]] = &[POOL_SEED, mint_key.as_ref(), &[self.pool.bump]];
        transfer_tokens(
            TokenMove {
                from: self.pool_token_account.to_account_info(),
                to: self.buyer_token_account.to_account_info(),
                mint: self.mint.to_account_info(),
                authority: self.pool.to_account_info(),
                token_program: self.token_program.to_account_info(),
                decimals: self.mint.decimals,
            },
            outcome.tokens_out,
            &[pool_seeds],
        )?;

        if outcome.completed {
            let reserve_seeds: &[&[u8]] =
                &[RESERVE_SEED, mint_key.as_ref(), &[self.pool.reserve_bump]];
            transfer_lamports(
                self.reserve.to_account_info(),
                self.fee_recipient.to_account_info(),
                system_program,
                outcome.graduate_fee,
                &[reserve_seeds],
            )?;
        }

        self.pool_token_account.reload()?;
        self.pool
            .check_escrow(self.pool_token_account.amount, self.reserve.lamports())?;

        emit!(TradeEvent {
            user: buyer,
            mint: mint_key,
            is_buy: true,
            quote_amount: outcome.quote_in,
            token_amount: outcome.tokens_out,
            fee: outcome.fee,
            tax: 0,
            referrer: outcome.referral.referrer,
            referral_reward: outcome.referral.reward,
            base_reserves: self.pool.base_reserves()?,
            quote_reserves: self.pool.quote_reserves()?,
            timestamp: now,
        });
        msg!(
            "Buy: {} quote for {} tokens, fee {}",
            outcome.quote_in,
            outcome.tokens_out,
            outcome.fee
        );

        if outcome.completed {
            emit!(CompleteEvent {
                user: buyer,
                mint: mint_key,
                graduate_fee: outcome.graduate_fee,
                timestamp: now,
            });
            msg!("Bonding curve complete for mint {}", mint_key);
        }
        Ok(())
    }
}
