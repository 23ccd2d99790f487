//! Catalog of clubs and the baseline athlete roster.
//!
//! The `Catalog` is built once when a season starts and read-only thereafter.
//! Round-by-round athlete state lives in the season's `AthletePool`, which
//! starts as a cheap clone of `Catalog::athletes`.

use serde::{Deserialize, Serialize};

use super::athlete::Athlete;
use super::club::Club;
use super::pool::AthletePool;
use crate::core::{AthleteId, ClubId};

/// Static reference data: clubs plus the baseline athlete roster.
///
/// ## Example
///
/// ```
/// use fantasy_engine::catalog::{Catalog, Club};
/// use fantasy_engine::core::ClubId;
///
/// let mut catalog = Catalog::new();
/// catalog.register_club(Club::new(ClubId(1), "Shanghai Port", "SHP", "#D32F2F", "#B71C1C"));
///
/// assert_eq!(catalog.club(ClubId(1)).map(|c| c.short_name.as_str()), Some("SHP"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    clubs: Vec<Club>,
    athletes: AthletePool,
    next_athlete_id: u32,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_athlete_id: 1,
            ..Self::default()
        }
    }

    /// Register a club. A club with the same id is replaced.
    pub fn register_club(&mut self, club: Club) {
        match self.clubs.iter_mut().find(|c| c.id == club.id) {
            Some(existing) => *existing = club,
            None => self.clubs.push(club),
        }
    }

    /// Register an athlete under its own id.
    pub fn register_athlete(&mut self, athlete: Athlete) {
        self.next_athlete_id = self.next_athlete_id.max(athlete.id.raw() + 1);
        self.athletes.insert(athlete);
    }

    /// Allocate the next unused athlete id.
    pub fn alloc_athlete_id(&mut self) -> AthleteId {
        let id = AthleteId::new(self.next_athlete_id.max(1));
        self.next_athlete_id = id.raw() + 1;
        id
    }

    /// Get a club by id.
    #[must_use]
    pub fn club(&self, id: ClubId) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    /// All clubs in registration order.
    #[must_use]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    /// Ids of all clubs in registration order.
    #[must_use]
    pub fn club_ids(&self) -> Vec<ClubId> {
        self.clubs.iter().map(|c| c.id).collect()
    }

    /// Baseline athlete by id.
    #[must_use]
    pub fn athlete(&self, id: AthleteId) -> Option<&Athlete> {
        self.athletes.get(id)
    }

    /// The baseline athlete roster.
    #[must_use]
    pub fn athletes(&self) -> &AthletePool {
        &self.athletes
    }

    #[must_use]
    pub fn club_count(&self) -> usize {
        self.clubs.len()
    }
}
