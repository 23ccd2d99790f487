//! Match simulator.
//!
//! Plays out a round of fixtures against the athlete pool and returns the
//! finished fixtures together with an updated pool. See `simulator` for the
//! per-match procedure.

pub mod simulator;

pub use simulator::{MatchSimulator, RoundOutcome};

use crate::catalog::AthletePool;
use crate::core::SimRng;
use crate::fixtures::Match;

/// Simulate a round with the default configuration and points table.
#[must_use]
pub fn simulate_round(athletes: &AthletePool, fixtures: &[Match], rng: &mut SimRng) -> RoundOutcome {
    MatchSimulator::default().simulate_round(athletes, fixtures, rng)
}
