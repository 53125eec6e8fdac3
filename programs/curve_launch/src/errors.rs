use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchError {
    #[msg("Global config is not initialized")]
    ConfigNotInitialized,
    #[msg("Global config is already initialized")]
    AlreadyInitialized,
    #[msg("Signer is not allowed to perform this operation")]
    Unauthorized,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Trade produces no output or drains the reserves")]
    InsufficientOutput,
    #[msg("Trading has not started yet")]
    TradingNotStarted,
    #[msg("Wallet would exceed the waiting room holding limit")]
    WalletLimitExceeded,
    #[msg("Waiting room is full")]
    ParticipantCapReached,
    #[msg("Wallet has not completed enough trades")]
    MinTradesNotMet,
    #[msg("Invalid signature")]
    InvalidSignature,
    #[msg("Referrer is already set to a different wallet")]
    ReferrerImmutable,
    #[msg("Invalid referrer")]
    InvalidReferrer,
    #[msg("Bonding curve is not complete")]
    BondingCurveNotComplete,
    #[msg("Bonding curve is complete")]
    BondingCurveComplete,
    #[msg("Pool reserves are already withdrawn")]
    AlreadyWithdrawn,
    #[msg("Invalid config")]
    InvalidConfig,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Received time is in the future")]
    StaleAttestation,
    #[msg("Escrow balance does not match pool reserves")]
    ReserveMismatch,
}
