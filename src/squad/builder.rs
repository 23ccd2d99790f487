//! Squad construction and validation.
//!
//! A squad always holds 15 slots: 2 goalkeepers, 5 defenders, 5 midfielders
//! and 3 forwards. The formation decides which of them start.

use rustc_hash::FxHashMap;

use super::formation::Formation;
use super::slot::SquadSlot;
use crate::catalog::{Athlete, Position};
use crate::core::{AthleteId, Price, SlotId};

/// Number of slots in every squad.
pub const SQUAD_SIZE: usize = 15;

/// Total slots per position, regardless of formation.
pub const SQUAD_QUOTA: [(Position, usize); 4] = [
    (Position::Goalkeeper, 2),
    (Position::Defender, 5),
    (Position::Midfielder, 5),
    (Position::Forward, 3),
];

/// Total slots for a position.
#[must_use]
pub fn quota(position: Position) -> usize {
    SQUAD_QUOTA
        .iter()
        .find(|(p, _)| *p == position)
        .map_or(0, |&(_, n)| n)
}

/// Build an empty squad for a formation label.
///
/// Unknown labels fall back to 4-4-2.
///
/// ```
/// use fantasy_engine::squad::build_empty_squad;
///
/// let squad = build_empty_squad("4-3-3");
/// assert_eq!(squad.len(), 15);
/// assert_eq!(squad.iter().filter(|s| s.starter).count(), 11);
/// ```
#[must_use]
pub fn build_empty_squad(formation_label: &str) -> Vec<SquadSlot> {
    build_squad(Formation::from_label(formation_label))
}

/// Build an empty squad for a formation.
///
/// Slots are numbered in creation order (goalkeepers first) and then emitted
/// starters first, each group in position order.
#[must_use]
pub fn build_squad(formation: Formation) -> Vec<SquadSlot> {
    let mut squad = Vec::with_capacity(SQUAD_SIZE);
    let mut next_id = 0u8;

    for (position, total) in SQUAD_QUOTA {
        let starters = formation.starters(position).min(total);
        for i in 0..total {
            squad.push(SquadSlot::empty(SlotId::new(next_id), position, i < starters));
            next_id += 1;
        }
    }

    // Stable: slots of one position keep creation order.
    squad.sort_by_key(SquadSlot::sort_key);
    squad
}

/// True iff every slot, bench included, is bound.
#[must_use]
pub fn is_squad_complete(squad: &[SquadSlot]) -> bool {
    squad.iter().all(SquadSlot::is_bound)
}

/// Number of bound slots.
#[must_use]
pub fn filled_slots(squad: &[SquadSlot]) -> usize {
    squad.iter().filter(|s| s.is_bound()).count()
}

/// Sum of bound athletes' prices. Unbound slots and athletes missing from the
/// pool contribute nothing.
#[must_use]
pub fn team_value<'a>(
    squad: &[SquadSlot],
    athletes: impl IntoIterator<Item = &'a Athlete>,
) -> Price {
    let prices: FxHashMap<AthleteId, Price> =
        athletes.into_iter().map(|a| (a.id, a.price)).collect();

    squad
        .iter()
        .filter_map(|slot| slot.athlete)
        .filter_map(|id| prices.get(&id))
        .sum()
}

/// Whether an athlete is already bound somewhere in the squad.
#[must_use]
pub fn contains_athlete(squad: &[SquadSlot], athlete: AthleteId) -> bool {
    squad.iter().any(|s| s.athlete == Some(athlete))
}
