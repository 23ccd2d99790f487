//! Fixture generation: pair every club once per round.
//!
//! The club list is shuffled and consecutive entries are paired (2k, 2k+1),
//! the first of each pair at home. Every call is an independent draw: nothing
//! prevents a rematch of last round or balances home and away over a season.

use super::fixture::Match;
use crate::core::{ClubId, EngineError, MatchId, Result, RoundId, SimRng};

/// Generate one round of fixtures covering every club exactly once.
///
/// Fails with `OddClubCount` when the clubs cannot be paired.
///
/// ```
/// use fantasy_engine::core::{ClubId, RoundId, SimRng};
/// use fantasy_engine::fixtures::generate_fixtures;
///
/// let clubs: Vec<ClubId> = (1..=4).map(ClubId).collect();
/// let fixtures = generate_fixtures(RoundId::FIRST, &clubs, &mut SimRng::new(1)).unwrap();
/// assert_eq!(fixtures.len(), 2);
/// ```
pub fn generate_fixtures(round: RoundId, clubs: &[ClubId], rng: &mut SimRng) -> Result<Vec<Match>> {
    if clubs.len() % 2 != 0 {
        return Err(EngineError::OddClubCount { count: clubs.len() });
    }

    let mut order = clubs.to_vec();
    rng.shuffle(&mut order);

    let fixtures: Vec<Match> = order
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| Match::scheduled(MatchId::new(round, i as u16), pair[0], pair[1]))
        .collect();

    tracing::debug!(round = round.raw(), matches = fixtures.len(), "generated fixtures");
    Ok(fixtures)
}
