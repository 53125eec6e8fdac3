use anchor_lang::prelude::*;

#[event]
pub struct ConfigUpdated {
    pub owner: Pubkey,
    pub fee_recipient: Pubkey,
    pub verify_signer: Pubkey,
    pub trading_fee: u64,
    pub referral_reward_fee: u64,
    pub referral_trade_limit: u64,
}

#[event]
pub struct SolPriceUpdated {
    pub sol_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct CreateEvent {
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub base_reserves: u64,
    pub quote_reserves: u64,
    pub trade_start_time: i64,
    pub timestamp: i64,
}

#[event]
pub struct TradeEvent {
    pub user: Pubkey,
    pub mint: Pubkey,
    pub is_buy: bool,
    pub quote_amount: u64,
    pub token_amount: u64,
    pub fee: u64,
    pub tax: u64,
    pub referrer: Pubkey,
    pub referral_reward: u64,
    pub base_reserves: u64,
    pub quote_reserves: u64,
    pub timestamp: i64,
}

#[event]
pub struct CompleteEvent {
    pub user: Pubkey,
    pub mint: Pubkey,
    pub graduate_fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawEvent {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub base_amount: u64,
    pub quote_amount: u64,
    pub timestamp: i64,
}
