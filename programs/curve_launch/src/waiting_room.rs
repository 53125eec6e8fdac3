//! Admission control for the early phase of a pool.
//!
//! An enabled room starts open and closes once its closure condition fires.
//! Closing is permanent. While open every buy is checked against the wallet
//! holding limit, the participant cap and the buyer's own trade history.

use anchor_lang::prelude::*;

use crate::errors::LaunchError;
use crate::state::{Participant, UserState};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ClosureCondition {
    TimeBased { timestamp: i64 },
    ParticipantCount { max_participants: u32 },
    BuyVolume { volume: u64 },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct WaitingRoomConfig {
    /// Trades the buyer must have completed, across all pools, before buying
    /// while the room is open.
    pub min_trades: u32,
    pub max_participants: u32,
    /// Whole percent of the total supply a single wallet may hold.
    pub wallet_limit_percent: u8,
    pub closure_condition: ClosureCondition,
}

impl WaitingRoomConfig {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.max_participants > 0
                && self.wallet_limit_percent > 0
                && self.wallet_limit_percent <= 100,
            LaunchError::InvalidConfig
        );
        if let ClosureCondition::ParticipantCount { max_participants } = self.closure_condition {
            require!(max_participants > 0, LaunchError::InvalidConfig);
        }
        Ok(())
    }

    pub fn wallet_limit(&self, total_supply: u64) -> Result<u64> {
        let limit = (total_supply as u128)
            .checked_mul(self.wallet_limit_percent as u128)
            .ok_or(LaunchError::ArithmeticOverflow)?
            / 100;
        u64::try_from(limit).map_err(|_| LaunchError::ArithmeticOverflow.into())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum WaitingRoomState {
    Disabled,
    Enabled {
        config: WaitingRoomConfig,
        participants: u32,
        total_buy_volume: u64,
        closed: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Room disabled or closed; only curve limits apply.
    Bypassed,
    Admitted { new_participant: bool },
}

/// A single buy as seen by the waiting room.
#[derive(Debug, Clone, Copy)]
pub struct BuyIntent {
    /// Buyer's token balance before the trade.
    pub holder_balance: u64,
    pub tokens_out: u64,
    pub quote_in: u64,
    pub total_supply: u64,
    pub now: i64,
}

impl WaitingRoomState {
    pub fn from_config(config: Option<WaitingRoomConfig>) -> Self {
        match config {
            Some(config) => WaitingRoomState::Enabled {
                config,
                participants: 0,
                total_buy_volume: 0,
                closed: false,
            },
            None => WaitingRoomState::Disabled,
        }
    }

    pub fn is_open(&self, now: i64) -> bool {
        match self {
            WaitingRoomState::Disabled => false,
            WaitingRoomState::Enabled { config, closed, .. } => {
                !*closed && !time_elapsed(&config.closure_condition, now)
            }
        }
    }

    pub fn admit(
        &mut self,
        user: &UserState,
        participant: &mut Participant,
        intent: &BuyIntent,
    ) -> Result<Admission> {
        let WaitingRoomState::Enabled {
            config,
            participants,
            total_buy_volume,
            closed,
        } = self
        else {
            return Ok(Admission::Bypassed);
        };

        if *closed {
            return Ok(Admission::Bypassed);
        }
        if time_elapsed(&config.closure_condition, intent.now) {
            *closed = true;
            return Ok(Admission::Bypassed);
        }

        let new_participant = !participant.joined;
        if new_participant {
            require!(
                *participants < config.max_participants,
                LaunchError::ParticipantCapReached
            );
        }
        require!(
            user.trade_count >= config.min_trades as u64,
            LaunchError::MinTradesNotMet
        );

        let holding = intent
            .holder_balance
            .checked_add(intent.tokens_out)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        require!(
            holding <= config.wallet_limit(intent.total_supply)?,
            LaunchError::WalletLimitExceeded
        );

        if new_participant {
            *participants += 1;
            participant.joined = true;
        }
        participant.tokens_bought = participant
            .tokens_bought
            .checked_add(intent.tokens_out)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        *total_buy_volume = total_buy_volume
            .checked_add(intent.quote_in)
            .ok_or(LaunchError::ArithmeticOverflow)?;

        *closed = match config.closure_condition {
            ClosureCondition::ParticipantCount { max_participants } => {
                *participants >= max_participants
            }
            ClosureCondition::BuyVolume { volume } => *total_buy_volume >= volume,
            ClosureCondition::TimeBased { .. } => false,
        };

        Ok(Admission::Admitted { new_participant })
    }
}

fn time_elapsed(condition: &ClosureCondition, now: i64) -> bool {
    matches!(condition, ClosureCondition::TimeBased { timestamp } if now >= *timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TOTAL_SUPPLY;

    fn room(closure_condition: ClosureCondition) -> WaitingRoomState {
        WaitingRoomState::from_config(Some(WaitingRoomConfig {
            min_trades: 0,
            max_participants: 3,
            wallet_limit_percent: 2,
            closure_condition,
        }))
    }

    fn intent(holder_balance: u64, tokens_out: u64) -> BuyIntent {
        BuyIntent {
            holder_balance,
            tokens_out,
            quote_in: 1_000_000_000,
            total_supply: DEFAULT_TOTAL_SUPPLY,
            now: 0,
        }
    }

    fn wallet() -> (UserState, Participant) {
        let user = Pubkey::new_unique();
        (
            UserState::new(user, 255),
            Participant::new(Pubkey::new_unique(), user, 255),
        )
    }

    const LIMIT: u64 = DEFAULT_TOTAL_SUPPLY / 50;

    #[test]
    fn disabled_room_bypasses_every_check() {
        let mut room = WaitingRoomState::Disabled;
        let (user, mut participant) = wallet();
        let admission = room.admit(&user, &mut participant, &intent(u64::MAX / 2, 1)).unwrap();
        assert_eq!(admission, Admission::Bypassed);
        assert!(!participant.joined);
    }

    #[test]
    fn wallet_limit_caps_post_trade_holding() {
        let mut room = room(ClosureCondition::ParticipantCount { max_participants: 10 });
        let (user, mut participant) = wallet();

        room.admit(&user, &mut participant, &intent(0, LIMIT)).unwrap();
        let err = room.admit(&user, &mut participant, &intent(LIMIT, 1));
        assert!(err.is_err());
        assert_eq!(participant.tokens_bought, LIMIT);
    }

    #[test]
    fn participant_cap_rejects_new_wallets_only() {
        let mut room = room(ClosureCondition::TimeBased { timestamp: 1_000 });
        let (user, mut first) = wallet();
        for _ in 0..2 {
            let (other, mut participant) = wallet();
            room.admit(&other, &mut participant, &intent(0, 1)).unwrap();
        }
        assert_eq!(
            room.admit(&user, &mut first, &intent(0, 1)).unwrap(),
            Admission::Admitted { new_participant: true }
        );

        let (late, mut late_participant) = wallet();
        assert!(room.admit(&late, &mut late_participant, &intent(0, 1)).is_err());
        // existing participants keep buying
        assert_eq!(
            room.admit(&user, &mut first, &intent(1, 1)).unwrap(),
            Admission::Admitted { new_participant: false }
        );
    }

    #[test]
    fn time_based_room_closes_at_timestamp() {
        let mut room = room(ClosureCondition::TimeBased { timestamp: 1_000 });
        assert!(room.is_open(999));
        assert!(!room.is_open(1_000));

        let (user, mut participant) = wallet();
        let mut late = intent(0, DEFAULT_TOTAL_SUPPLY);
        late.now = 1_000;
        assert_eq!(room.admit(&user, &mut participant, &late).unwrap(), Admission::Bypassed);
        assert!(!room.is_open(0));
    }

    #[test]
    fn participant_count_closure_is_irreversible() {
        let mut room = room(ClosureCondition::ParticipantCount { max_participants: 2 });
        for _ in 0..2 {
            let (user, mut participant) = wallet();
            room.admit(&user, &mut participant, &intent(0, 1)).unwrap();
        }
        assert!(!room.is_open(0));

        let (whale, mut participant) = wallet();
        assert_eq!(
            room.admit(&whale, &mut participant, &intent(0, DEFAULT_TOTAL_SUPPLY)).unwrap(),
            Admission::Bypassed
        );
    }

    #[test]
    fn buy_volume_closure() {
        let mut room = room(ClosureCondition::BuyVolume { volume: 2_000_000_000 });
        let (user, mut participant) = wallet();
        room.admit(&user, &mut participant, &intent(0, 1)).unwrap();
        assert!(room.is_open(0));
        room.admit(&user, &mut participant, &intent(1, 1)).unwrap();
        assert!(!room.is_open(0));
    }

    #[test]
    fn min_trades_gate_uses_buyer_history() {
        let mut room = WaitingRoomState::from_config(Some(WaitingRoomConfig {
            min_trades: 2,
            max_participants: 10,
            wallet_limit_percent: 2,
            closure_condition: ClosureCondition::ParticipantCount { max_participants: 10 },
        }));
        let (mut user, mut participant) = wallet();
        assert!(room.admit(&user, &mut participant, &intent(0, 1)).is_err());
        assert!(!participant.joined);

        user.trade_count = 2;
        assert!(room.admit(&user, &mut participant, &intent(0, 1)).is_ok());
    }

    #[test]
    fn config_validation() {
        let mut config = WaitingRoomConfig {
            min_trades: 0,
            max_participants: 500,
            wallet_limit_percent: 2,
            closure_condition: ClosureCondition::ParticipantCount { max_participants: 500 },
        };
        assert!(config.validate().is_ok());
        config.wallet_limit_percent = 101;
        assert!(config.validate().is_err());
        config.wallet_limit_percent = 0;
        assert!(config.validate().is_err());
    }
}
