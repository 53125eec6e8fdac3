use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata as Metaplex,
    },
    token_interface::{
        mint_to, set_authority, spl_token_2022::instruction::AuthorityType, Mint, MintTo,
        SetAuthority, TokenAccount, TokenInterface,
    },
};

use crate::address::derive;
use crate::constants::*;
use crate::events::CreateEvent;
use crate::instructions::transfers::transfer_lamports;
use crate::lifecycle::{self, PoolParams};
use crate::state::{GlobalConfig, PoolState, UserState};
use crate::tax::TaxType;
use crate::waiting_room::WaitingRoomConfig;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreatePoolInput {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub trade_start_time: i64,
    pub tax_type: TaxType,
    pub waiting_room_config: Option<WaitingRoomConfig>,
}

/// # CreatePool Instruction
///
/// Creates a mint, escrows its whole supply in the pool's token account and
/// seeds the bonding curve from the global config. The pool PDA is the mint
/// authority only for the duration of this instruction; the authority is
/// revoked once the supply is minted, and the mint has no freeze authority.
#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        init,
        payer = creator,
        space = 8 + PoolState::INIT_SPACE,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump,
    )]
    pub pool: Box<Account<'info, PoolState>>,

    #[account(
        init,
        payer = creator,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = pool,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Base token escrow, owned by the pool PDA.
    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = pool,
    )]
    pub pool_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Quote escrow. Holds the real quote reserves on top of its rent floor.
    #[account(
        mut,
        seeds = [RESERVE_SEED, mint.key().as_ref()],
        bump,
    )]
    pub reserve: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + UserState::INIT_SPACE,
        seeds = [USER_SEED, creator.key().as_ref()],
        bump,
    )]
    pub creator_state: Box<Account<'info, UserState>>,

    /// CHECK: created by the token metadata program
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: identity only, stored as the creator's referrer
    pub referrer: Option<UncheckedAccount<'info>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub token_metadata_program: Program<'info, Metaplex>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreatePool<'info> {
    pub fn create_pool(&mut self, input: CreatePoolInput, bumps: CreatePoolBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let creator = self.creator.key();
        let mint_key = self.mint.key();

        self.creator_state.bind(creator, bumps.creator_state)?;
        let params = PoolParams {
            creator,
            mint: mint_key,
            metadata: self.metadata.key(),
            referrer: self
                .referrer
                .as_ref()
                .map(|referrer| referrer.key())
                .unwrap_or_default(),
            trade_start_time: input.trade_start_time,
            tax_type: input.tax_type,
            waiting_room_config: input.waiting_room_config,
            bump: bumps.pool,
            reserve_bump: bumps.reserve,
        };
        lifecycle::open_pool(
            &self.global_config,
            &mut self.pool,
            &mut self.creator_state,
            &params,
            now,
            derive,
        )?;

        let seeds: &[&[u8]] = &[POOL_SEED, mint_key.as_ref(), &[bumps.pool]];
        let signer = &[seeds];

        create_metadata_accounts_v3(
            CpiContext::new_with_signer(
                self.token_metadata_program.to_account_info(),
                CreateMetadataAccountsV3 {
                    metadata: self.metadata.to_account_info(),
                    mint: self.mint.to_account_info(),
                    mint_authority: self.pool.to_account_info(),
                    update_authority: self.pool.to_account_info(),
                    payer: self.creator.to_account_info(),
                    system_program: self.system_program.to_account_info(),
                    rent: self.rent.to_account_info(),
                },
                signer,
            ),
            DataV2 {
                name: input.name,
                symbol: input.symbol,
                uri: input.uri,
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            false,
            true,
            None,
        )?;

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.pool_token_account.to_account_info(),
                    authority: self.pool.to_account_info(),
                },
                signer,
            ),
            self.global_config.total_token_supply,
        )?;

        set_authority(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                SetAuthority {
                    current_authority: self.pool.to_account_info(),
                    account_or_mint: self.mint.to_account_info(),
                },
                signer,
            ),
            AuthorityType::MintTokens,
            None,
        )?;

        // the quote escrow must stay rent exempt while it holds reserves
        let rent_floor = self.rent.minimum_balance(0);
        transfer_lamports(
            self.creator.to_account_info(),
            self.reserve.to_account_info(),
            self.system_program.to_account_info(),
            rent_floor.saturating_sub(self.reserve.lamports()),
            &[],
        )?;

        self.pool_token_account.reload()?;
        self.pool
            .check_escrow(self.pool_token_account.amount, self.reserve.lamports())?;

        emit!(CreateEvent {
            creator,
            mint: mint_key,
            base_reserves: self.pool.base_reserves()?,
            quote_reserves: self.pool.quote_reserves()?,
            trade_start_time: self.pool.trade_start_time,
            timestamp: now,
        });
        msg!("Pool created for mint {}", mint_key);
        Ok(())
    }
}
