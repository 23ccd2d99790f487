//! Season service: one owned handle over catalog, pool, fixtures and leagues.
//!
//! ## Round lifecycle
//!
//! 1. `generate_fixtures` pairs every club for the current round
//! 2. `simulate_round` plays the fixtures and replaces the athlete pool
//! 3. `record_team_round` posts a team's points to its leagues
//! 4. `advance_round` moves on and draws the next round's fixtures
//!
//! Fixture pairing, match simulation and league codes each draw from their own
//! stream forked off the season seed, so extra league creation never changes
//! match results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{Athlete, AthletePool, Catalog};
use crate::core::{
    AthleteId, ClubId, EngineConfig, EngineError, Result, RoundId, SimRng, SimRngState, UserId,
};
use crate::fixtures::{generate_fixtures, Match};
use crate::league::{League, LeagueRegistry};
use crate::simulation::MatchSimulator;
use crate::squad::UserTeam;

/// A running season.
///
/// ## Example
///
/// ```
/// use fantasy_engine::core::EngineConfig;
/// use fantasy_engine::season::Season;
///
/// let mut season = Season::new(EngineConfig::default().with_seed(7)).unwrap();
/// season.generate_fixtures().unwrap();
/// season.simulate_round();
/// assert!(season.is_round_finished());
/// ```
#[derive(Clone, Debug)]
pub struct Season {
    config: EngineConfig,
    catalog: Catalog,
    athletes: AthletePool,
    fixtures: Vec<Match>,
    round: RoundId,
    leagues: LeagueRegistry,
    /// Last round whose points each user has posted.
    recorded: FxHashMap<UserId, RoundId>,
    simulator: MatchSimulator,
    fixture_rng: SimRng,
    match_rng: SimRng,
    league_rng: SimRng,
}

/// Serialized form of a season.
#[derive(Serialize, Deserialize)]
struct SeasonSnapshot {
    config: EngineConfig,
    catalog: Catalog,
    athletes: AthletePool,
    fixtures: Vec<Match>,
    round: RoundId,
    leagues: LeagueRegistry,
    recorded: FxHashMap<UserId, RoundId>,
    fixture_rng: SimRngState,
    match_rng: SimRngState,
    league_rng: SimRngState,
}

impl Season {
    /// Start a season at round 1 with a freshly seeded catalog and the global league.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let mut root = SimRng::from_seed_or_entropy(config.seed);
        let catalog = Catalog::seeded(&mut root.fork());
        let fixture_rng = root.fork();
        let match_rng = root.fork();
        let league_rng = root.fork();

        tracing::info!(
            seed = root.seed(),
            clubs = catalog.club_count(),
            athletes = catalog.athletes().len(),
            "season started"
        );

        Ok(Self {
            simulator: MatchSimulator::new(config.simulation.clone(), config.scoring.clone())?,
            athletes: catalog.athletes().clone(),
            catalog,
            fixtures: Vec::new(),
            round: RoundId::FIRST,
            leagues: LeagueRegistry::seeded(),
            recorded: FxHashMap::default(),
            fixture_rng,
            match_rng,
            league_rng,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The athlete pool as of the last simulated round.
    #[must_use]
    pub fn athletes(&self) -> &AthletePool {
        &self.athletes
    }

    #[must_use]
    pub fn athlete(&self, id: AthleteId) -> Option<&Athlete> {
        self.athletes.get(id)
    }

    #[must_use]
    pub fn fixtures(&self) -> &[Match] {
        &self.fixtures
    }

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn leagues(&self) -> &LeagueRegistry {
        &self.leagues
    }

    /// Draw fixtures for the current round, replacing unplayed ones.
    ///
    /// Fails once any match of the round has been played.
    pub fn generate_fixtures(&mut self) -> Result<&[Match]> {
        if self.fixtures.iter().any(|m| m.finished) {
            return Err(EngineError::RoundInProgress(self.round));
        }
        self.fixtures = generate_fixtures(self.round, &self.catalog.club_ids(), &mut self.fixture_rng)?;
        Ok(&self.fixtures)
    }

    /// Play the current fixtures and replace the pool with the result.
    pub fn simulate_round(&mut self) -> &[Match] {
        let outcome = self
            .simulator
            .simulate_round(&self.athletes, &self.fixtures, &mut self.match_rng);
        self.athletes = outcome.athletes;
        self.fixtures = outcome.fixtures;
        &self.fixtures
    }

    /// Whether the current round has fixtures and all of them are played.
    #[must_use]
    pub fn is_round_finished(&self) -> bool {
        !self.fixtures.is_empty() && self.fixtures.iter().all(|m| m.finished)
    }

    /// Move to the next round and draw its fixtures.
    pub fn advance_round(&mut self) -> Result<RoundId> {
        if !self.is_round_finished() {
            return Err(EngineError::RoundInProgress(self.round));
        }
        self.round = self.round.next();
        self.fixtures.clear();
        self.generate_fixtures()?;
        tracing::info!(round = self.round.raw(), "advanced round");
        Ok(self.round)
    }

    /// An athlete's points for the latest round.
    #[must_use]
    pub fn points_for(&self, id: AthleteId) -> Option<i32> {
        self.athletes.get(id).map(|a| a.stats.total_points)
    }

    /// The club's match in the current round.
    #[must_use]
    pub fn fixture_for(&self, club: ClubId) -> Option<&Match> {
        self.fixtures.iter().find(|m| m.involves(club))
    }

    /// Who the club faces in the current round.
    #[must_use]
    pub fn opponent_of(&self, club: ClubId) -> Option<ClubId> {
        self.fixtures.iter().find_map(|m| m.opponent(club))
    }

    /// A new team with the configured budget.
    #[must_use]
    pub fn new_team(&self, user: UserId, name: impl Into<String>) -> UserTeam {
        UserTeam::new(user, name, self.config.budget)
    }

    /// Create a league owned by the team's manager.
    pub fn create_league(
        &mut self,
        team: &mut UserTeam,
        name: impl Into<String>,
        manager_name: impl Into<String>,
    ) -> &League {
        let league = self.leagues.create_league(
            &team.id,
            name,
            manager_name,
            team.name.clone(),
            &mut self.league_rng,
        );
        team.join(league.id.clone());
        league
    }

    /// Join a league by code. `None` if no league has this code.
    pub fn join_league(
        &mut self,
        team: &mut UserTeam,
        code: &str,
        manager_name: impl Into<String>,
    ) -> Option<&League> {
        let league = self
            .leagues
            .join_league(code, &team.id, manager_name, team.name.clone())?;
        team.join(league.id.clone());
        Some(league)
    }

    /// Post the team's points for the finished round to each of its leagues.
    ///
    /// A round is posted at most once per user. Every league id is checked
    /// before any standings change.
    pub fn record_team_round(&mut self, team: &UserTeam) -> Result<i32> {
        if !self.is_round_finished() {
            return Err(EngineError::RoundInProgress(self.round));
        }
        if self.recorded.get(&team.id) == Some(&self.round) {
            return Err(EngineError::RoundAlreadyRecorded {
                user: team.id.clone(),
                round: self.round,
            });
        }
        if let Some(missing) = team
            .leagues
            .iter()
            .find(|id| self.leagues.league_details(id).is_none())
        {
            return Err(EngineError::UnknownLeague(missing.clone()));
        }

        let points = team.round_points(&self.athletes);
        for league in &team.leagues {
            self.leagues.record_points_in(league, &team.id, points)?;
        }
        self.recorded.insert(team.id.clone(), self.round);
        tracing::debug!(team = %team.id, round = self.round.raw(), points, "recorded team round");
        Ok(points)
    }

    /// Encode the whole season.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        let snapshot = SeasonSnapshot {
            config: self.config.clone(),
            catalog: self.catalog.clone(),
            athletes: self.athletes.clone(),
            fixtures: self.fixtures.clone(),
            round: self.round,
            leagues: self.leagues.clone(),
            recorded: self.recorded.clone(),
            fixture_rng: self.fixture_rng.state(),
            match_rng: self.match_rng.state(),
            league_rng: self.league_rng.state(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Rebuild a season from `snapshot` bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let snapshot: SeasonSnapshot = bincode::deserialize(bytes)?;
        snapshot.config.validate()?;

        Ok(Self {
            simulator: MatchSimulator::new(
                snapshot.config.simulation.clone(),
                snapshot.config.scoring.clone(),
            )?,
            config: snapshot.config,
            catalog: snapshot.catalog,
            athletes: snapshot.athletes,
            fixtures: snapshot.fixtures,
            round: snapshot.round,
            leagues: snapshot.leagues,
            recorded: snapshot.recorded,
            fixture_rng: SimRng::from_state(&snapshot.fixture_rng),
            match_rng: SimRng::from_state(&snapshot.match_rng),
            league_rng: SimRng::from_state(&snapshot.league_rng),
        })
    }
}
