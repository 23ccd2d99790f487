//! A manager's team: budget, squad, formation, transfers, chips.
//!
//! Binding rules are enforced here rather than in the host: an athlete may
//! appear in at most one slot, only in a slot of their position, and the
//! captain and vice-captain must sit on bound, different slots.

use serde::{Deserialize, Serialize};

use super::builder::{build_squad, contains_athlete, filled_slots, is_squad_complete, team_value};
use super::formation::Formation;
use super::slot::SquadSlot;
use crate::catalog::AthletePool;
use crate::core::{AthleteId, EngineError, LeagueId, Price, Result, SlotId, UserId};

/// One-time special modifiers. Only usage is tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chip {
    BenchBoost,
    TripleCaptain,
    FreeHit,
    Wildcard,
}

impl std::fmt::Display for Chip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Chip::BenchBoost => "Bench Boost",
            Chip::TripleCaptain => "Triple Captain",
            Chip::FreeHit => "Free Hit",
            Chip::Wildcard => "Wildcard",
        };
        f.write_str(name)
    }
}

/// A user's fantasy team. Owns its squad exclusively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserTeam {
    pub id: UserId,
    pub name: String,
    pub budget: Price,
    pub transfers_made: u32,
    pub chips_used: Vec<Chip>,
    pub formation: Formation,
    pub leagues: Vec<LeagueId>,
    squad: Vec<SquadSlot>,
}

impl UserTeam {
    /// Create a team with an empty 4-4-2 squad.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, budget: Price) -> Self {
        let formation = Formation::default();
        Self {
            id,
            name: name.into(),
            budget,
            transfers_made: 0,
            chips_used: Vec::new(),
            formation,
            leagues: Vec::new(),
            squad: build_squad(formation),
        }
    }

    /// The 15 slots, starters first.
    #[must_use]
    pub fn squad(&self) -> &[SquadSlot] {
        &self.squad
    }

    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&SquadSlot> {
        self.squad.iter().find(|s| s.id == id)
    }

    fn slot_mut(&mut self, id: SlotId) -> Result<&mut SquadSlot> {
        self.squad
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(EngineError::UnknownSlot(id))
    }

    /// Choose a formation. Discards every slot and regenerates an empty squad.
    ///
    /// Returns the formation actually applied (unknown labels become 4-4-2).
    pub fn choose_formation(&mut self, label: &str) -> Formation {
        self.formation = Formation::from_label(label);
        self.squad = build_squad(self.formation);
        self.formation
    }

    /// Bind an athlete to an empty or occupied slot.
    ///
    /// Rejects athletes missing from the pool, athletes already elsewhere in
    /// the squad, and position mismatches. When no captain exists yet, the
    /// first bound slot becomes captain.
    pub fn assign(&mut self, slot: SlotId, athlete: AthleteId, pool: &AthletePool) -> Result<()> {
        let found = pool.get(athlete).ok_or(EngineError::UnknownAthlete(athlete))?;
        let position = found.position;

        if contains_athlete(&self.squad, athlete) {
            tracing::warn!(%slot, %athlete, team = %self.id, "athlete already in squad");
            return Err(EngineError::DuplicateAthlete(athlete));
        }

        let target = self.slot_mut(slot)?;
        if target.position != position {
            return Err(EngineError::PositionMismatch {
                slot,
                expected: target.position,
                found: position,
            });
        }
        target.athlete = Some(athlete);

        if !self.squad.iter().any(|s| s.captain) {
            if let Some(first) = self.squad.iter_mut().find(|s| s.is_bound()) {
                first.captain = true;
                first.vice_captain = false;
            }
        }
        Ok(())
    }

    /// Empty a slot. Captaincy flags on it are dropped.
    pub fn clear(&mut self, slot: SlotId) -> Result<Option<AthleteId>> {
        let target = self.slot_mut(slot)?;
        target.captain = false;
        target.vice_captain = false;
        Ok(target.athlete.take())
    }

    /// Replace the athlete in a filled slot and count the transfer.
    pub fn transfer(&mut self, slot: SlotId, incoming: AthleteId, pool: &AthletePool) -> Result<AthleteId> {
        let outgoing = self
            .slot(slot)
            .ok_or(EngineError::UnknownSlot(slot))?
            .athlete
            .ok_or(EngineError::SlotEmpty(slot))?;

        let (captain, vice) = {
            let s = self.slot_mut(slot)?;
            let flags = (s.captain, s.vice_captain);
            s.athlete = None;
            flags
        };

        if let Err(err) = self.assign(slot, incoming, pool) {
            let s = self.slot_mut(slot)?;
            s.athlete = Some(outgoing);
            s.captain = captain;
            s.vice_captain = vice;
            return Err(err);
        }

        // `assign` may have auto-captained another slot while this one was empty.
        if captain {
            self.set_captain(slot)?;
        } else if vice {
            self.set_vice_captain(slot)?;
        }

        self.transfers_made += 1;
        tracing::info!(team = %self.id, %slot, %outgoing, %incoming, "transfer");
        Ok(outgoing)
    }

    /// Move the captain's armband to a bound slot.
    pub fn set_captain(&mut self, slot: SlotId) -> Result<()> {
        if !self.slot_mut(slot)?.is_bound() {
            return Err(EngineError::SlotEmpty(slot));
        }
        for s in &mut self.squad {
            s.captain = s.id == slot;
            if s.captain {
                s.vice_captain = false;
            }
        }
        Ok(())
    }

    /// Move the vice-captaincy to a bound slot.
    pub fn set_vice_captain(&mut self, slot: SlotId) -> Result<()> {
        if !self.slot_mut(slot)?.is_bound() {
            return Err(EngineError::SlotEmpty(slot));
        }
        for s in &mut self.squad {
            s.vice_captain = s.id == slot;
            if s.vice_captain {
                s.captain = false;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn captain(&self) -> Option<&SquadSlot> {
        self.squad.iter().find(|s| s.captain)
    }

    #[must_use]
    pub fn vice_captain(&self) -> Option<&SquadSlot> {
        self.squad.iter().find(|s| s.vice_captain)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_squad_complete(&self.squad)
    }

    #[must_use]
    pub fn value(&self, pool: &AthletePool) -> Price {
        team_value(&self.squad, pool)
    }

    /// Budget left after paying for every bound athlete. May be negative.
    #[must_use]
    pub fn remaining_budget(&self, pool: &AthletePool) -> Price {
        self.budget - self.value(pool)
    }

    /// Whether the squad may be confirmed: complete and within budget.
    #[must_use]
    pub fn can_confirm(&self, pool: &AthletePool) -> bool {
        self.is_complete() && !self.remaining_budget(pool).is_negative()
    }

    /// Check the squad is ready to enter the season.
    pub fn confirm(&self, pool: &AthletePool) -> Result<()> {
        if !self.is_complete() {
            return Err(EngineError::SquadIncomplete {
                filled: filled_slots(&self.squad),
            });
        }
        let value = self.value(pool);
        if value > self.budget {
            return Err(EngineError::OverBudget {
                value,
                budget: self.budget,
            });
        }
        tracing::info!(team = %self.id, %value, formation = %self.formation, "squad confirmed");
        Ok(())
    }

    /// Round points: starters' totals with the captain's doubled.
    #[must_use]
    pub fn round_points(&self, pool: &AthletePool) -> i32 {
        self.squad
            .iter()
            .filter(|s| s.starter)
            .filter_map(|s| {
                let athlete = pool.get(s.athlete?)?;
                let multiplier = if s.captain { 2 } else { 1 };
                Some(athlete.stats.total_points * multiplier)
            })
            .sum()
    }

    #[must_use]
    pub fn has_used_chip(&self, chip: Chip) -> bool {
        self.chips_used.contains(&chip)
    }

    /// Record a chip as played.
    pub fn use_chip(&mut self, chip: Chip) -> Result<()> {
        if self.has_used_chip(chip) {
            return Err(EngineError::ChipAlreadyUsed(chip));
        }
        self.chips_used.push(chip);
        Ok(())
    }

    /// Remember a league membership.
    pub fn join(&mut self, league: LeagueId) {
        if !self.leagues.contains(&league) {
            self.leagues.push(league);
        }
    }
}
