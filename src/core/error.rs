//! Engine error type.
//!
//! Lookups that simply find nothing return `Option`; this enum covers caller
//! contract violations and rejected user actions the host must surface.

use thiserror::Error;

use super::ids::{AthleteId, LeagueId, RoundId, SlotId, UserId};
use super::money::Price;
use crate::catalog::Position;
use crate::squad::Chip;

/// Errors produced by engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("cannot pair {count} clubs into fixtures: club count must be even")]
    OddClubCount { count: usize },

    #[error("{0} is not in the athlete pool")]
    UnknownAthlete(AthleteId),

    #[error("{0} does not exist in this squad")]
    UnknownSlot(SlotId),

    #[error("{0} is already in the squad")]
    DuplicateAthlete(AthleteId),

    #[error("{slot} takes a {expected}, not a {found}")]
    PositionMismatch {
        slot: SlotId,
        expected: Position,
        found: Position,
    },

    #[error("{0} has no athlete bound")]
    SlotEmpty(SlotId),

    #[error("squad value {value} exceeds budget {budget}")]
    OverBudget { value: Price, budget: Price },

    #[error("squad incomplete: {filled} of 15 slots filled")]
    SquadIncomplete { filled: usize },

    #[error("chip {0} has already been used")]
    ChipAlreadyUsed(Chip),

    #[error("league {0} does not exist")]
    UnknownLeague(LeagueId),

    #[error("{0} still has unplayed matches")]
    RoundInProgress(RoundId),

    #[error("{round} is already recorded for {user}")]
    RoundAlreadyRecorded { user: UserId, round: RoundId },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::RoundAlreadyRecorded {
                user: UserId::new("u1"),
                round: RoundId(3),
            }
            .to_string(),
            "GW 3 is already recorded for u1"
        );
        assert_eq!(
            EngineError::OddClubCount { count: 15 }.to_string(),
            "cannot pair 15 clubs into fixtures: club count must be even"
        );
        assert_eq!(
            EngineError::OverBudget {
                value: Price(1015),
                budget: Price(1000)
            }
            .to_string(),
            "squad value £101.5m exceeds budget £100.0m"
        );
        assert_eq!(
            EngineError::PositionMismatch {
                slot: SlotId(0),
                expected: Position::Goalkeeper,
                found: Position::Forward,
            }
            .to_string(),
            "slot-0 takes a GK, not a FWD"
        );
    }
}
