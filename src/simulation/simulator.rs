//! Round simulation: fixtures plus athlete pool in, finished fixtures plus a
//! refreshed pool out.
//!
//! ## Per match
//!
//! 1. Finished matches pass through unchanged.
//! 2. Home goals are drawn from `0..=max_home_goals`, away goals from
//!    `0..=max_away_goals`.
//! 3. Each goal gets a uniformly chosen scorer from the club's athletes and,
//!    with `assist_probability`, an assist from another uniform pick. Picking
//!    the scorer again means no assist.
//! 4. Every athlete of both clubs has their round statistics reset, then
//!    plays with `play_probability`. Players get 90 minutes (or a uniform
//!    `0..90`), their tallied goals and assists, goals conceded, a clean
//!    sheet if eligible and the opponent scored nothing, and maybe a booking.
//! 5. Players are scored and the total is added to their season points.
//!
//! Goal events are drawn before appearances, so an athlete can be credited
//! with an event in a round they are recorded as not having played.
//!
//! Inputs are never mutated. The caller replaces its pool and fixtures with
//! the returned ones.

use rustc_hash::FxHashMap;

use crate::catalog::{Athlete, AthletePool, RoundStats};
use crate::core::{AthleteId, Result, SimRng, SimulationConfig};
use crate::fixtures::{Match, MatchEvent, MatchEventKind, MatchEvents, Scoreline};
use crate::scoring::ScoringRules;

/// Result of simulating a round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    pub athletes: AthletePool,
    pub fixtures: Vec<Match>,
}

/// Goals and assists per athlete in one match.
type EventTally = FxHashMap<AthleteId, (u32, u32)>;

fn tally(events: &[MatchEvent]) -> EventTally {
    let mut tally = EventTally::default();
    for event in events {
        let entry = tally.entry(event.athlete).or_default();
        match event.kind {
            MatchEventKind::Goal => entry.0 += 1,
            MatchEventKind::Assist => entry.1 += 1,
            MatchEventKind::RedCard | MatchEventKind::OwnGoal => {}
        }
    }
    tally
}

/// Match simulator.
#[derive(Clone, Debug, Default)]
pub struct MatchSimulator {
    config: SimulationConfig,
    rules: ScoringRules,
}

impl MatchSimulator {
    /// Create a simulator, rejecting probabilities outside `[0, 1]`.
    pub fn new(config: SimulationConfig, rules: ScoringRules) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rules })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Simulate every unfinished match of a round.
    #[must_use]
    pub fn simulate_round(
        &self,
        athletes: &AthletePool,
        fixtures: &[Match],
        rng: &mut SimRng,
    ) -> RoundOutcome {
        let mut next = athletes.clone();
        let mut played = 0usize;

        let fixtures = fixtures
            .iter()
            .map(|fixture| {
                if fixture.finished {
                    return fixture.clone();
                }
                played += 1;
                self.simulate_match(fixture, athletes, &mut next, rng)
            })
            .collect::<Vec<_>>();

        tracing::info!(
            matches = played,
            skipped = fixtures.len() - played,
            "simulated round"
        );

        RoundOutcome {
            athletes: next,
            fixtures,
        }
    }

    /// Draw a scoreline and play one match.
    ///
    /// Reads club rosters from `before` and writes updated athletes into `next`.
    pub fn simulate_match(
        &self,
        fixture: &Match,
        before: &AthletePool,
        next: &mut AthletePool,
        rng: &mut SimRng,
    ) -> Match {
        let score = Scoreline {
            home: rng.gen_range(0..=self.config.max_home_goals),
            away: rng.gen_range(0..=self.config.max_away_goals),
        };
        self.simulate_match_with_score(fixture, score, before, next, rng)
    }

    /// Play one match to a known scoreline.
    pub fn simulate_match_with_score(
        &self,
        fixture: &Match,
        score: Scoreline,
        before: &AthletePool,
        next: &mut AthletePool,
        rng: &mut SimRng,
    ) -> Match {
        let home = before.club_athletes(fixture.home);
        let away = before.club_athletes(fixture.away);

        let mut events = MatchEvents::new();
        self.attribute_goals(score.home, &home, &mut events, rng);
        self.attribute_goals(score.away, &away, &mut events, rng);
        let finished = fixture.clone().finish(score, events);
        let tally = tally(&finished.events);

        for (club, squad) in [(finished.home, &home), (finished.away, &away)] {
            let conceded = finished.conceded_by(club).unwrap_or_default();
            for athlete in squad {
                next.insert(self.play_round(athlete, conceded, &tally, rng));
            }
        }

        tracing::debug!(
            id = %finished.id,
            home = %finished.home,
            away = %finished.away,
            score = %score,
            events = finished.events.len(),
            "match finished"
        );
        finished
    }

    fn attribute_goals(&self, goals: u8, squad: &[&Athlete], events: &mut MatchEvents, rng: &mut SimRng) {
        if goals > 0 && squad.is_empty() {
            tracing::warn!(goals, "club has no athletes, goals left unattributed");
            return;
        }

        for _ in 0..goals {
            let Some(scorer) = rng.choose(squad).map(|a| a.id) else {
                return;
            };
            events.push(MatchEvent::new(scorer, MatchEventKind::Goal, rng.gen_range(1..=90)));

            if rng.gen_bool(self.config.assist_probability) {
                if let Some(assister) = rng.choose(squad).map(|a| a.id) {
                    if assister != scorer {
                        events.push(MatchEvent::new(
                            assister,
                            MatchEventKind::Assist,
                            rng.gen_range(1..=90),
                        ));
                    }
                }
            }
        }
    }

    /// Reset an athlete's round and, if they played, fill and score it.
    fn play_round(&self, athlete: &Athlete, conceded: u8, tally: &EventTally, rng: &mut SimRng) -> Athlete {
        let mut updated = athlete.clone();
        updated.stats = RoundStats::default();

        if !rng.gen_bool(self.config.play_probability) {
            return updated;
        }

        let (goals, assists) = tally.get(&athlete.id).copied().unwrap_or_default();
        let mut stats = RoundStats {
            minutes: if rng.gen_bool(self.config.full_match_probability) {
                90
            } else {
                rng.gen_range(0..90)
            },
            goals,
            assists,
            goals_conceded: u32::from(conceded),
            ..RoundStats::default()
        };
        if conceded == 0 && athlete.position.earns_clean_sheet() {
            stats.clean_sheets = 1;
        }
        if rng.gen_bool(self.config.yellow_card_probability) {
            stats.yellow_cards = 1;
        }

        stats.total_points = self.rules.points(athlete.position, &stats);
        updated.season_points += stats.total_points;
        updated.stats = stats;
        updated
    }
}
