//! Scoring engine: per-round statistics to an integer point total.
//!
//! `ScoringRules` is the table; `points` and `points_for` apply the default
//! table, which is what the match simulator uses unless configured otherwise.

pub mod rules;

pub use rules::ScoringRules;

use crate::catalog::{Athlete, Position, RoundStats};

/// Score a round with the default table.
///
/// ```
/// use fantasy_engine::catalog::{Position, RoundStats};
/// use fantasy_engine::scoring::points;
///
/// let stats = RoundStats { minutes: 90, goals: 1, ..RoundStats::default() };
/// assert_eq!(points(Position::Forward, &stats), 6);
/// ```
#[must_use]
pub fn points(position: Position, stats: &RoundStats) -> i32 {
    ScoringRules::default().points(position, stats)
}

/// Score an athlete's current round with the default table.
#[must_use]
pub fn points_for(athlete: &Athlete) -> i32 {
    points(athlete.position, &athlete.stats)
}
