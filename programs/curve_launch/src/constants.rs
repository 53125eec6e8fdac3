// PDA seeds
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
pub const POOL_SEED: &[u8] = b"pool";
pub const USER_SEED: &[u8] = b"user";
pub const PARTICIPANT_SEED: &[u8] = b"participant";
pub const RESERVE_SEED: &[u8] = b"reserve";

/// Denominator shared by every rate in the program: 1_000 = 1%.
pub const RATE_DENOMINATOR: u128 = 100_000;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// `sol_price` is quoted with 9 decimals, same as lamports.
pub const SOL_PRICE_DECIMALS: u128 = 1_000_000_000;

pub const TOKEN_DECIMALS: u8 = 6;

pub const DEFAULT_TOTAL_SUPPLY: u64 = 1_000_000_000_000_000; // 1 billion * 6 decimals
pub const DEFAULT_REAL_BASE_RESERVES: u64 = DEFAULT_TOTAL_SUPPLY / 10 * 8; // 80% sold through the curve
pub const DEFAULT_VIRT_BASE_RESERVES: u64 = DEFAULT_TOTAL_SUPPLY - DEFAULT_REAL_BASE_RESERVES;
pub const DEFAULT_VIRT_QUOTE_RESERVES: u64 = 24_000_000_000; // 24 SOL
pub const DEFAULT_COMPLETION_THRESHOLD: u64 = 85_000_000_000; // 80 SOL + graduation fee
pub const DEFAULT_GRADUATE_FEE: u64 = 5_000_000_000; // 5 SOL
pub const DEFAULT_TRADING_FEE: u64 = 1_000; // 1%
pub const DEFAULT_REFERRAL_REWARD_FEE: u64 = 10_000; // 10% of the trading fee
pub const DEFAULT_REFERRAL_TRADE_LIMIT: u64 = 100;
pub const DEFAULT_SOL_PRICE: u64 = 150_000_000_000; // $150

/// Message a buy attestation signs. Sell attestations sign the seller's
/// last receive time instead, see `signature::sell_message`.
pub const ATTESTATION_MESSAGE: &[u8] = &[];
