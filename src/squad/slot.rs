//! Squad slots.

use serde::{Deserialize, Serialize};

use crate::catalog::Position;
use crate::core::{AthleteId, SlotId};

/// One of the 15 roster positions in a squad.
///
/// A slot is created empty for a fixed position and flagged starter or bench
/// by the formation. It is bound to an athlete by explicit user action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadSlot {
    pub id: SlotId,
    /// Bound athlete, `None` while the slot is empty.
    pub athlete: Option<AthleteId>,
    pub position: Position,
    pub starter: bool,
    pub captain: bool,
    pub vice_captain: bool,
}

impl SquadSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn empty(id: SlotId, position: Position, starter: bool) -> Self {
        Self {
            id,
            athlete: None,
            position,
            starter,
            captain: false,
            vice_captain: false,
        }
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.athlete.is_some()
    }

    #[must_use]
    pub fn is_bench(&self) -> bool {
        !self.starter
    }

    /// Sort key: starters first, then goalkeeper, defender, midfielder, forward.
    #[must_use]
    pub fn sort_key(&self) -> (bool, u8) {
        (!self.starter, self.position.order())
    }
}
