//! Pool lifecycle: creation, trading, completion and withdrawal.
//!
//! Operations validate and mutate copies of the accounts they touch and only
//! write back once every check has passed, so a failed call leaves state
//! untouched. `now` is the single clock snapshot of the calling instruction.

use anchor_lang::prelude::*;

use crate::address::Derive;
use crate::constants::{ATTESTATION_MESSAGE, RESERVE_SEED};
use crate::curve::{quote_for_buy, quote_for_sell};
use crate::errors::LaunchError;
use crate::referral::{apply_referral, attach_referrer, ReferralCredit};
use crate::signature::{sell_message, verify_attestation, Attestation};
use crate::state::{GlobalConfig, Participant, PoolPhase, PoolState, UpdateConfigInput, UserState};
use crate::tax::{tax_rate, TaxType};
use crate::waiting_room::{Admission, BuyIntent, WaitingRoomConfig, WaitingRoomState};

pub fn init_config(
    config: &mut GlobalConfig,
    owner: Pubkey,
    verify_signer: Pubkey,
    bump: u8,
) -> Result<()> {
    require!(!config.initialized, LaunchError::AlreadyInitialized);
    let next = GlobalConfig::with_defaults(owner, verify_signer, bump);
    next.validate()?;
    *config = next;
    Ok(())
}

pub fn update_config(
    config: &mut GlobalConfig,
    caller: &Pubkey,
    input: &UpdateConfigInput,
) -> Result<()> {
    config.require_initialized()?;
    config.require_owner(caller)?;

    let mut next = config.clone();
    next.owner = input.owner;
    next.fee_recipient = input.fee_recipient;
    next.verify_signer = input.verify_signer;
    next.trading_fee = input.trading_fee;
    next.referral_reward_fee = input.referral_reward_fee;
    next.referral_trade_limit = input.referral_trade_limit;
    next.sol_price = input.sol_price;
    next.total_token_supply = input.total_token_supply.unwrap_or(next.total_token_supply);
    next.init_real_base_reserves = input
        .init_real_base_reserves
        .unwrap_or(next.init_real_base_reserves);
    next.init_virt_base_reserves = input
        .init_virt_base_reserves
        .unwrap_or(next.init_virt_base_reserves);
    next.init_virt_quote_reserves = input
        .init_virt_quote_reserves
        .unwrap_or(next.init_virt_quote_reserves);
    next.completion_threshold = input
        .completion_threshold
        .unwrap_or(next.completion_threshold);
    next.graduate_fee = input.graduate_fee.unwrap_or(next.graduate_fee);
    next.validate()?;

    *config = next;
    Ok(())
}

pub fn update_sol_price(config: &mut GlobalConfig, caller: &Pubkey, price: u64) -> Result<()> {
    config.require_initialized()?;
    config.require_owner(caller)?;
    require!(price > 0, LaunchError::InvalidConfig);
    config.sol_price = price;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PoolParams {
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub referrer: Pubkey,
    pub trade_start_time: i64,
    pub tax_type: TaxType,
    pub waiting_room_config: Option<WaitingRoomConfig>,
    pub bump: u8,
    pub reserve_bump: u8,
}

/// Seeds a fresh pool from the global config.
pub fn open_pool(
    config: &GlobalConfig,
    pool: &mut PoolState,
    creator_state: &mut UserState,
    params: &PoolParams,
    now: i64,
    derive: Derive,
) -> Result<()> {
    config.require_initialized()?;
    require_keys_eq!(pool.mint, Pubkey::default(), LaunchError::AlreadyInitialized);
    params.tax_type.validate()?;
    if let Some(room) = &params.waiting_room_config {
        room.validate()?;
    }

    let mut next_creator = creator_state.clone();
    attach_referrer(&params.creator, &mut next_creator, params.referrer)?;

    let next = PoolState {
        creator: params.creator,
        mint: params.mint,
        reserve: derive(RESERVE_SEED, &params.mint),
        metadata: params.metadata,
        trade_start_time: params.trade_start_time,
        tax_start_timestamp: now,
        initial_real_base_reserves: config.init_real_base_reserves,
        real_base_reserves: config.init_real_base_reserves,
        virt_base_reserves: config.init_virt_base_reserves,
        virt_quote_reserves: config.init_virt_quote_reserves,
        real_quote_reserves: 0,
        completion_threshold: config.completion_threshold,
        graduate_fee: config.graduate_fee,
        trade_count: 0,
        complete: false,
        withdrawn: false,
        tax_type: params.tax_type,
        waiting_room: WaitingRoomState::from_config(params.waiting_room_config),
        bump: params.bump,
        reserve_bump: params.reserve_bump,
    };

    *pool = next;
    *creator_state = next_creator;
    Ok(())
}

fn require_tradable(pool: &PoolState, now: i64) -> Result<()> {
    match pool.phase(now) {
        PoolPhase::Trading => Ok(()),
        PoolPhase::Created => err!(LaunchError::TradingNotStarted),
        PoolPhase::Completed | PoolPhase::Withdrawn => err!(LaunchError::BondingCurveComplete),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BuyRequest {
    pub trader: Pubkey,
    pub amount: u64,
    pub attestation: Attestation,
    pub referrer: Pubkey,
    /// Trader's token balance before the trade.
    pub holder_balance: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyOutcome {
    pub quote_in: u64,
    pub fee: u64,
    pub tokens_out: u64,
    pub referral: ReferralCredit,
    pub admission: Admission,
    pub completed: bool,
    /// Quote moved from the reserve to the fee recipient on completion.
    pub graduate_fee: u64,
}

impl BuyOutcome {
    /// Fee left for the fee recipient after the referral share.
    pub fn protocol_fee(&self) -> u64 {
        self.fee.saturating_sub(self.referral.reward)
    }
}

pub fn execute_buy(
    config: &GlobalConfig,
    pool: &mut PoolState,
    user: &mut UserState,
    participant: &mut Participant,
    referrer_state: Option<&mut UserState>,
    request: &BuyRequest,
    now: i64,
) -> Result<BuyOutcome> {
    config.require_initialized()?;
    require_tradable(pool, now)?;
    verify_attestation(&request.attestation, &config.verify_signer, ATTESTATION_MESSAGE)?;

    let quote = quote_for_buy(pool, config.trading_fee, pool.completion_threshold, request.amount)?;

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    let mut next_participant = participant.clone();
    let mut next_referrer = referrer_state.as_deref().cloned();

    let admission = next_pool.waiting_room.admit(
        &next_user,
        &mut next_participant,
        &BuyIntent {
            holder_balance: request.holder_balance,
            tokens_out: quote.tokens_out,
            quote_in: quote.quote_in,
            total_supply: config.total_token_supply,
            now,
        },
    )?;

    let referral = apply_referral(
        config,
        &request.trader,
        &mut next_user,
        request.referrer,
        next_referrer.as_mut(),
        quote.fee,
        true,
    )?;

    next_pool.apply_buy(&quote)?;
    next_user.record_trade(quote.quote_in, config.sol_price)?;

    let mut graduate_fee = 0;
    if quote.completes {
        next_pool.complete = true;
        graduate_fee = next_pool.graduate_fee.min(next_pool.real_quote_reserves);
        next_pool.real_quote_reserves -= graduate_fee;
    }

    *pool = next_pool;
    *user = next_user;
    *participant = next_participant;
    if let (Some(slot), Some(next)) = (referrer_state, next_referrer) {
        *slot = next;
    }

    Ok(BuyOutcome {
        quote_in: quote.quote_in,
        fee: quote.fee,
        tokens_out: quote.tokens_out,
        referral,
        admission,
        completed: quote.completes,
        graduate_fee,
    })
}

#[derive(Debug, Clone, Copy)]
pub struct SellRequest {
    pub trader: Pubkey,
    pub amount: u64,
    pub attestation: Attestation,
    pub referrer: Pubkey,
    /// When the trader last received tokens of this mint. Covered by the
    /// attestation, which signs `sell_message(last_received_time)`.
    pub last_received_time: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellOutcome {
    pub tokens_in: u64,
    pub quote_out: u64,
    pub fee: u64,
    pub tax_rate: u64,
    pub tax: u64,
    pub proceeds: u64,
    pub referral: ReferralCredit,
}

impl SellOutcome {
    /// Fee and tax left for the fee recipient after the referral share.
    pub fn protocol_fee(&self) -> u64 {
        self.fee
            .saturating_sub(self.referral.reward)
            .saturating_add(self.tax)
    }
}

pub fn execute_sell(
    config: &GlobalConfig,
    pool: &mut PoolState,
    user: &mut UserState,
    referrer_state: Option<&mut UserState>,
    request: &SellRequest,
    now: i64,
) -> Result<SellOutcome> {
    config.require_initialized()?;
    require_tradable(pool, now)?;
    verify_attestation(
        &request.attestation,
        &config.verify_signer,
        &sell_message(request.last_received_time),
    )?;
    require!(
        request.last_received_time <= now,
        LaunchError::StaleAttestation
    );

    let rate = tax_rate(pool, now, pool.progress()?, request.last_received_time)?;
    let quote = quote_for_sell(pool, config.trading_fee, rate, request.amount)?;

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    let mut next_referrer = referrer_state.as_deref().cloned();

    let referral = apply_referral(
        config,
        &request.trader,
        &mut next_user,
        request.referrer,
        next_referrer.as_mut(),
        quote.fee,
        false,
    )?;

    next_pool.apply_sell(&quote)?;
    next_user.record_trade(quote.quote_out, config.sol_price)?;

    *pool = next_pool;
    *user = next_user;
    if let (Some(slot), Some(next)) = (referrer_state, next_referrer) {
        *slot = next;
    }

    Ok(SellOutcome {
        tokens_in: quote.tokens_in,
        quote_out: quote.quote_out,
        fee: quote.fee,
        tax_rate: rate,
        tax: quote.tax,
        proceeds: quote.proceeds,
        referral,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawOutcome {
    pub base_amount: u64,
    pub quote_amount: u64,
}

/// Releases a completed pool's reserves to its creator or the protocol owner.
pub fn execute_withdraw(
    config: &GlobalConfig,
    pool: &mut PoolState,
    caller: &Pubkey,
) -> Result<WithdrawOutcome> {
    config.require_initialized()?;
    require!(
        *caller == pool.creator || *caller == config.owner,
        LaunchError::Unauthorized
    );
    require!(!pool.withdrawn, LaunchError::AlreadyWithdrawn);
    require!(pool.complete, LaunchError::BondingCurveNotComplete);

    let outcome = WithdrawOutcome {
        base_amount: pool.base_reserves()?,
        quote_amount: pool.real_quote_reserves,
    };

    pool.withdrawn = true;
    pool.real_base_reserves = 0;
    pool.virt_base_reserves = 0;
    pool.real_quote_reserves = 0;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::derive;
    use crate::constants::*;
    use crate::signature::tests::Authority;
    use crate::tax::TaxDuration;
    use crate::waiting_room::ClosureCondition;

    struct Fixture {
        authority: Authority,
        config: GlobalConfig,
        pool: PoolState,
    }

    fn empty_pool() -> PoolState {
        PoolState {
            creator: Pubkey::default(),
            mint: Pubkey::default(),
            reserve: Pubkey::default(),
            metadata: Pubkey::default(),
            trade_start_time: 0,
            tax_start_timestamp: 0,
            initial_real_base_reserves: 0,
            real_base_reserves: 0,
            virt_base_reserves: 0,
            virt_quote_reserves: 0,
            real_quote_reserves: 0,
            completion_threshold: 0,
            graduate_fee: 0,
            trade_count: 0,
            complete: false,
            withdrawn: false,
            tax_type: TaxType::Disabled,
            waiting_room: WaitingRoomState::Disabled,
            bump: 0,
            reserve_bump: 0,
        }
    }

    fn params(creator: Pubkey, waiting_room_config: Option<WaitingRoomConfig>) -> PoolParams {
        PoolParams {
            creator,
            mint: Pubkey::new_unique(),
            metadata: Pubkey::new_unique(),
            referrer: Pubkey::default(),
            trade_start_time: 0,
            tax_type: TaxType::HigherSellTax {
                threshold_percentage: 3_000,
                higher_tax_rate: 20_000,
                standard_tax_rate: 5_000,
                duration: TaxDuration::Lifetime,
            },
            waiting_room_config,
            bump: 255,
            reserve_bump: 254,
        }
    }

    fn fixture(waiting_room_config: Option<WaitingRoomConfig>) -> Fixture {
        let authority = Authority::new(3);
        let owner = Pubkey::new_unique();
        let mut config = GlobalConfig::with_defaults(owner, authority.identity(), 255);
        config.completion_threshold = 2_000_000_000;
        config.graduate_fee = 100_000_000;

        let creator = Pubkey::new_unique();
        let mut pool = empty_pool();
        let mut creator_state = UserState::new(creator, 255);
        open_pool(
            &config,
            &mut pool,
            &mut creator_state,
            &params(creator, waiting_room_config),
            1_000,
            derive,
        )
        .unwrap();
        Fixture { authority, config, pool }
    }

    fn buy_request(fixture: &Fixture, trader: Pubkey, amount: u64) -> BuyRequest {
        BuyRequest {
            trader,
            amount,
            attestation: fixture.authority.attest(ATTESTATION_MESSAGE),
            referrer: Pubkey::default(),
            holder_balance: 0,
        }
    }

    fn trader(pool: &PoolState) -> (Pubkey, UserState, Participant) {
        let trader = Pubkey::new_unique();
        (
            trader,
            UserState::new(trader, 255),
            Participant::new(pool.mint, trader, 255),
        )
    }

    #[test]
    fn init_config_runs_once() {
        let mut config = GlobalConfig::with_defaults(Pubkey::default(), Pubkey::default(), 0);
        config.initialized = false;
        let owner = Pubkey::new_unique();
        init_config(&mut config, owner, Pubkey::new_unique(), 250).unwrap();
        let snapshot = config.clone();

        assert!(init_config(&mut config, Pubkey::new_unique(), Pubkey::new_unique(), 1).is_err());
        assert_eq!(config, snapshot);
        assert_eq!(config.owner, owner);
    }

    #[test]
    fn only_owner_updates_sol_price() {
        let Fixture { mut config, .. } = fixture(None);
        let owner = config.owner;
        assert!(update_sol_price(&mut config, &Pubkey::new_unique(), 1).is_err());
        assert!(update_sol_price(&mut config, &owner, 0).is_err());
        update_sol_price(&mut config, &owner, 99).unwrap();
        assert_eq!(config.sol_price, 99);
    }

    #[test]
    fn open_pool_seeds_reserves() {
        let fixture = fixture(None);
        let pool = &fixture.pool;
        assert_eq!(pool.real_base_reserves, DEFAULT_REAL_BASE_RESERVES);
        assert_eq!(pool.virt_base_reserves, DEFAULT_VIRT_BASE_RESERVES);
        assert_eq!(pool.virt_quote_reserves, DEFAULT_VIRT_QUOTE_RESERVES);
        assert_eq!(pool.reserve, derive(RESERVE_SEED, &pool.mint));
        assert_eq!(pool.tax_start_timestamp, 1_000);
        assert_eq!(pool.phase(1_000), PoolPhase::Trading);
    }

    #[test]
    fn open_pool_uses_injected_derive() {
        fn fake(_: &[u8], key: &Pubkey) -> Pubkey {
            *key
        }
        let config = GlobalConfig::with_defaults(Pubkey::new_unique(), Pubkey::new_unique(), 255);
        let creator = Pubkey::new_unique();
        let params = params(creator, None);
        let mut pool = empty_pool();
        open_pool(&config, &mut pool, &mut UserState::new(creator, 1), &params, 0, fake).unwrap();
        assert_eq!(pool.reserve, params.mint);
    }

    #[test]
    fn open_pool_rejects_reused_pool_and_uninitialized_config() {
        let mut fixture = fixture(None);
        let creator = Pubkey::new_unique();
        let mut state = UserState::new(creator, 1);
        assert!(open_pool(&fixture.config, &mut fixture.pool, &mut state, &params(creator, None), 0, derive).is_err());

        let mut config = fixture.config.clone();
        config.initialized = false;
        let mut pool = empty_pool();
        assert!(open_pool(&config, &mut pool, &mut state, &params(creator, None), 0, derive).is_err());
        assert_eq!(pool, empty_pool());
    }

    #[test]
    fn open_pool_stores_creator_referrer() {
        let config = GlobalConfig::with_defaults(Pubkey::new_unique(), Pubkey::new_unique(), 255);
        let creator = Pubkey::new_unique();
        let referrer = Pubkey::new_unique();
        let mut params = params(creator, None);
        params.referrer = referrer;
        let mut state = UserState::new(creator, 1);
        open_pool(&config, &mut empty_pool(), &mut state, &params, 0, derive).unwrap();
        assert_eq!(state.referrer, referrer);
    }

    #[test]
    fn buy_before_start_is_rejected() {
        let mut fixture = fixture(None);
        fixture.pool.trade_start_time = 5_000;
        let (key, mut user, mut participant) = trader(&fixture.pool);
        let request = buy_request(&fixture, key, 100_000_000);
        let before = fixture.pool.clone();
        assert!(execute_buy(&fixture.config, &mut fixture.pool, &mut user, &mut participant, None, &request, 4_999).is_err());
        assert_eq!(fixture.pool, before);
        assert!(execute_buy(&fixture.config, &mut fixture.pool, &mut user, &mut participant, None, &request, 5_000).is_ok());
    }

    #[test]
    fn buy_updates_pool_and_user() {
        let mut fixture = fixture(None);
        let (key, mut user, mut participant) = trader(&fixture.pool);
        let request = buy_request(&fixture, key, 100_000_000);
        let outcome = execute_buy(&fixture.config, &mut fixture.pool, &mut user, &mut participant, None, &request, 1_000).unwrap();

        assert_eq!(outcome.fee, 1_000_000);
        assert_eq!(outcome.quote_in, 99_000_000);
        assert_eq!(outcome.admission, Admission::Bypassed);
        assert_eq!(fixture.pool.real_quote_reserves, 99_000_000);
        assert_eq!(
            fixture.pool.real_base_reserves,
            DEFAULT_REAL_BASE_RESERVES - outcome.tokens_out
        );
        assert_eq!(fixture.pool.trade_count, 1);
        assert_eq!(user.trade_count, 1);
        assert_eq!(user.trading_volume_quote, 99_000_000);
    }

    #[test]
    fn failed_admission_leaves_state_untouched() {
        let room = WaitingRoomConfig {
            min_trades: 0,
            max_participants: 10,
            wallet_limit_percent: 1,
            closure_condition: ClosureCondition::ParticipantCount { max_participants: 10 },
        };
        let mut fixture = fixture(Some(room));
        let (key, mut user, mut participant) = trader(&fixture.pool);
        let referrer = Pubkey::new_unique();
        let mut referrer_state = UserState::new(referrer, 1);

        let mut request = buy_request(&fixture, key, 1_000_000_000);
        request.referrer = referrer;
        let pool_before = fixture.pool.clone();
        let user_before = user.clone();
        let referrer_before = referrer_state.clone();

        // 1 SOL buys far more than 1% of supply
        let result = execute_buy(
            &fixture.config,
            &mut fixture.pool,
            &mut user,
            &mut participant,
            Some(&mut referrer_state),
            &request,
            1_000,
        );
        assert!(result.is_err());
        assert_eq!(fixture.pool, pool_before);
        assert_eq!(user, user_before);
        assert_eq!(referrer_state, referrer_before);
        assert!(!participant.joined);
    }

    #[test]
    fn buy_credits_referrer() {
        let mut fixture = fixture(None);
        let (key, mut user, mut participant) = trader(&fixture.pool);
        let referrer = Pubkey::new_unique();
        let mut referrer_state = UserState::new(referrer, 1);
        let mut request = buy_request(&fixture, key, 100_000_000);
        request.referrer = referrer;

        let outcome = execute_buy(
            &fixture.config,
            &mut fixture.pool,
            &mut user,
            &mut participant,
            Some(&mut referrer_state),
            &request,
            1_000,
        )
        .unwrap();
        assert_eq!(outcome.referral.reward, 100_000);
        assert_eq!(outcome.protocol_fee(), 900_000);
        assert_eq!(referrer_state.referral_earned, 100_000);
        assert_eq!(user.referrer, referrer);
    }

    #[test]
    fn completing_buy_charges_graduation_fee() {
        let mut fixture = fixture(None);
        let (key, mut user, mut participant) = trader(&fixture.pool);
        let request = buy_request(&fixture, key, 5_000_000_000);
        let outcome = execute_buy(&fixture.config, &mut fixture.pool, &mut user, &mut participant, None, &request, 1_000).unwrap();

        assert!(outcome.completed);
        assert_eq!(outcome.quote_in, 2_000_000_000);
        assert_eq!(outcome.fee, 20_000_000);
        assert_eq!(outcome.graduate_fee, 100_000_000);
        assert!(fixture.pool.complete);
        assert_eq!(fixture.pool.real_quote_reserves, 1_900_000_000);

        let again = buy_request(&fixture, key, 100_000_000);
        assert!(execute_buy(&fixture.config, &mut fixture.pool, &mut user, &mut participant, None, &again, 1_001).is_err());
    }

    #[test]
    fn pool_keeps_threshold_and_fee_from_creation() {
        let mut fixture = fixture(None);
        assert_eq!(fixture.pool.completion_threshold, 2_000_000_000);
        assert_eq!(fixture.pool.graduate_fee, 100_000_000);

        fixture.config.completion_threshold = 500_000_000;
        fixture.config.graduate_fee = 1;
        let (key, mut user, mut participant) = trader(&fixture.pool);
        let request = buy_request(&fixture, key, 1_000_000_000);
        let outcome = execute_buy(&fixture.config, &mut fixture.pool, &mut user, &mut participant, None, &request, 1_000).unwrap();

        assert_eq!(outcome.quote_in, 990_000_000);
        assert!(!outcome.completed);
        assert!(!fixture.pool.complete);
    }

    #[test]
    fn sell_applies_tax_schedule() {
        let mut fixture = fixture(None);
        let (key, mut user, mut participant) = trader(&fixture.pool);
        let request = buy_request(&fixture, key, 1_000_000_000);
        let bought = execute_buy(&fixture.config, &mut fixture.pool, &mut user, &mut participant, None, &request, 1_000).unwrap();
        // over 3% of the curve is sold, so the higher rate applies
        assert!(fixture.pool.progress().unwrap() >= 3_000);

        let sell = SellRequest {
            trader: key,
            amount: bought.tokens_out / 2,
            attestation: fixture.authority.attest(&sell_message(1_000)),
            referrer: Pubkey::default(),
            last_received_time: 1_000,
        };
        let outcome = execute_sell(&fixture.config, &mut fixture.pool, &mut user, None, &sell, 1_010).unwrap();
        assert_eq!(outcome.tax_rate, 20_000);
        assert_eq!(outcome.proceeds, outcome.quote_out - outcome.fee - outcome.tax);
        assert_eq!(outcome.protocol_fee(), outcome.fee + outcome.tax);
        assert_eq!(
            fixture.pool.real_quote_reserves,
            bought.quote_in - outcome.quote_out
        );
        assert_eq!(user.trade_count, 2);
    }

    #[test]
    fn sell_rejects_future_receive_time() {
        let mut fixture = fixture(None);
        let (key, mut user, mut participant) = trader(&fixture.pool);
        let request = buy_request(&fixture, key, 100_000_000);
        let bought = execute_buy(&fixture.config, &mut fixture.pool, &mut user, &mut participant, None, &request, 1_000).unwrap();

        let sell = SellRequest {
            trader: key,
            amount: bought.tokens_out,
            attestation: fixture.authority.attest(&sell_message(2_000)),
            referrer: Pubkey::default(),
            last_received_time: 2_000,
        };
        assert!(execute_sell(&fixture.config, &mut fixture.pool, &mut user, None, &sell, 1_500).is_err());
    }

    #[test]
    fn withdraw_requires_creator_or_owner() {
        let mut fixture = fixture(None);
        fixture.pool.complete = true;
        assert!(execute_withdraw(&fixture.config, &mut fixture.pool, &Pubkey::new_unique()).is_err());

        let creator = fixture.pool.creator;
        let outcome = execute_withdraw(&fixture.config, &mut fixture.pool, &creator).unwrap();
        assert_eq!(outcome.base_amount, DEFAULT_TOTAL_SUPPLY);
        assert!(fixture.pool.withdrawn);
        assert_eq!(fixture.pool.base_reserves().unwrap(), 0);
    }
}
