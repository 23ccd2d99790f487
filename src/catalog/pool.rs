//! The athlete pool: every eligible athlete with current-round state.
//!
//! Backed by `im::OrdMap` so a round's simulation can return a whole new pool
//! that shares structure with the previous one. Cloning is O(1); updating one
//! athlete copies only the path to it. Iteration is in id order.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::athlete::{Athlete, Position};
use crate::core::{AthleteId, ClubId};

/// Persistent collection of athletes keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AthletePool {
    athletes: OrdMap<AthleteId, Athlete>,
}

impl AthletePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an athlete.
    pub fn insert(&mut self, athlete: Athlete) {
        self.athletes.insert(athlete.id, athlete);
    }

    /// Get an athlete by id.
    #[must_use]
    pub fn get(&self, id: AthleteId) -> Option<&Athlete> {
        self.athletes.get(&id)
    }

    /// Check if an athlete is in the pool.
    #[must_use]
    pub fn contains(&self, id: AthleteId) -> bool {
        self.athletes.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.athletes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty()
    }

    /// Iterate over athletes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Athlete> {
        self.athletes.values()
    }

    /// Athletes registered to a club, in id order.
    #[must_use]
    pub fn club_athletes(&self, club: ClubId) -> Vec<&Athlete> {
        self.iter().filter(|a| a.club == club).collect()
    }

    /// Find athletes matching a filter, most expensive first.
    #[must_use]
    pub fn search(&self, filter: &AthleteFilter) -> Vec<&Athlete> {
        let mut found: Vec<&Athlete> = self.iter().filter(|a| filter.matches(a)).collect();
        found.sort_by(|a, b| b.price.cmp(&a.price));
        found
    }
}

impl FromIterator<Athlete> for AthletePool {
    fn from_iter<I: IntoIterator<Item = Athlete>>(iter: I) -> Self {
        Self {
            athletes: iter.into_iter().map(|a| (a.id, a)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AthletePool {
    type Item = &'a Athlete;
    type IntoIter = im::ordmap::Values<'a, AthleteId, Athlete>;

    fn into_iter(self) -> Self::IntoIter {
        self.athletes.values()
    }
}

/// Filter used when picking an athlete for a slot.
///
/// Empty filters match everything. Name matching is case-insensitive and
/// looks for a substring of `web_name`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AthleteFilter {
    pub position: Option<Position>,
    pub club: Option<ClubId>,
    pub name: Option<String>,
}

impl AthleteFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn club(mut self, club: ClubId) -> Self {
        self.club = Some(club);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into().to_lowercase());
        self
    }

    /// Check whether an athlete passes the filter.
    #[must_use]
    pub fn matches(&self, athlete: &Athlete) -> bool {
        self.position.map_or(true, |p| athlete.position == p)
            && self.club.map_or(true, |c| athlete.club == c)
            && self
                .name
                .as_deref()
                .map_or(true, |n| athlete.web_name.to_lowercase().contains(n))
    }
}
