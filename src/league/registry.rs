//! League registry: create, join and look up leagues.
//!
//! The registry owns every league of a season. It starts with the global
//! league, which carries three sample competitors so a new manager never sees
//! an empty table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::member::{League, LeagueMember};
use crate::core::{EngineError, LeagueId, Result, SimRng, UserId};

/// Id of the league every season starts with.
pub const GLOBAL_LEAGUE_ID: &str = "league-global";

/// Join code of the global league.
pub const GLOBAL_LEAGUE_CODE: &str = "GLOBAL";

/// Length of generated join codes.
pub const CODE_LEN: usize = 6;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Registry of leagues.
///
/// ## Example
///
/// ```
/// use fantasy_engine::core::{SimRng, UserId};
/// use fantasy_engine::league::LeagueRegistry;
///
/// let mut registry = LeagueRegistry::seeded();
/// let mut rng = SimRng::new(1);
/// let me = UserId::new("user-1");
///
/// let code = registry.create_league(&me, "Office", "Sam", "Sam's XI", &mut rng).code.clone();
/// assert_eq!(code.len(), 6);
/// assert!(registry.join_league("NOPE00", &UserId::new("user-2"), "Kim", "Kim FC").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueRegistry {
    leagues: Vec<League>,
    by_code: FxHashMap<String, usize>,
    next_id: u32,
}

impl LeagueRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Create a registry holding the global league.
    #[must_use]
    pub fn seeded() -> Self {
        let mut global = League::new(
            LeagueId::new(GLOBAL_LEAGUE_ID),
            "Super League Global",
            GLOBAL_LEAGUE_CODE,
        );
        for (n, team, round, total) in [
            (1, "Beijing Galaxy", 45, 120),
            (2, "Shanghai Stars", 32, 105),
            (3, "Sichuan Fire", 58, 98),
        ] {
            global.add_member(
                LeagueMember::new(UserId::new(format!("bot-{n}")), team, format!("Bot {n}"))
                    .with_points(round, total),
            );
        }

        let mut registry = Self::new();
        registry.insert(global);
        registry
    }

    fn insert(&mut self, league: League) -> usize {
        let idx = self.leagues.len();
        self.by_code.insert(league.code.clone(), idx);
        self.leagues.push(league);
        idx
    }

    fn generate_code(&self, rng: &mut SimRng) -> String {
        loop {
            let code: String = (0..CODE_LEN)
                .filter_map(|_| rng.choose(CODE_ALPHABET).map(|&b| char::from(b)))
                .collect();
            if !self.by_code.contains_key(&code) {
                return code;
            }
        }
    }

    /// Create a league with the caller as its only member.
    ///
    /// The join code is six characters from `A-Z0-9`, unique within the registry.
    pub fn create_league(
        &mut self,
        user: &UserId,
        name: impl Into<String>,
        manager_name: impl Into<String>,
        team_name: impl Into<String>,
        rng: &mut SimRng,
    ) -> &League {
        let code = self.generate_code(rng);
        let id = LeagueId::new(format!("league-{}", self.next_id));
        self.next_id += 1;

        let mut league = League::new(id, name, code);
        league.add_member(LeagueMember::new(user.clone(), team_name, manager_name));
        tracing::info!(id = %league.id, code = %league.code, user = %user, "created league");

        let idx = self.insert(league);
        &self.leagues[idx]
    }

    /// Join the league with this code.
    ///
    /// Returns `None` for an unknown code, leaving the registry untouched.
    /// Joining a league twice is a no-op that still returns the league.
    pub fn join_league(
        &mut self,
        code: &str,
        user: &UserId,
        manager_name: impl Into<String>,
        team_name: impl Into<String>,
    ) -> Option<&League> {
        let Some(&idx) = self.by_code.get(code) else {
            tracing::debug!(code, "no league with this code");
            return None;
        };

        let league = &mut self.leagues[idx];
        if league.add_member(LeagueMember::new(user.clone(), team_name, manager_name)) {
            tracing::info!(id = %league.id, user = %user, "joined league");
        }
        Some(&self.leagues[idx])
    }

    /// Look up a league by id.
    #[must_use]
    pub fn league_details(&self, id: &LeagueId) -> Option<&League> {
        self.leagues.iter().find(|l| &l.id == id)
    }

    /// Look up a league by join code.
    #[must_use]
    pub fn by_code(&self, code: &str) -> Option<&League> {
        self.by_code.get(code).map(|&idx| &self.leagues[idx])
    }

    /// Leagues the user belongs to, in creation order.
    #[must_use]
    pub fn leagues_for(&self, user: &UserId) -> Vec<&League> {
        self.leagues.iter().filter(|l| l.has_member(user)).collect()
    }

    /// Current table of a league.
    #[must_use]
    pub fn standings(&self, id: &LeagueId) -> Option<Vec<LeagueMember>> {
        self.league_details(id).map(League::standings)
    }

    /// Record a user's round in every league they belong to.
    ///
    /// Returns the number of leagues updated.
    pub fn record_points(&mut self, user: &UserId, round_points: i32) -> usize {
        let updated = self
            .leagues
            .iter_mut()
            .map(|l| l.record_points(user, round_points))
            .filter(|&recorded| recorded)
            .count();
        tracing::debug!(user = %user, round_points, leagues = updated, "recorded points");
        updated
    }

    /// Record a user's round in one league.
    pub fn record_points_in(&mut self, id: &LeagueId, user: &UserId, round_points: i32) -> Result<bool> {
        let league = self
            .leagues
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| EngineError::UnknownLeague(id.clone()))?;
        Ok(league.record_points(user, round_points))
    }

    /// All leagues in creation order.
    #[must_use]
    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }
}
