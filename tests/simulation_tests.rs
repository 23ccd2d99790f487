//! Round simulation over the full seeded catalog.

use fantasy_engine::catalog::{AthletePool, Catalog, RoundStats};
use fantasy_engine::core::{AthleteId, RoundId, SimRng, SimulationConfig};
use fantasy_engine::fixtures::{generate_fixtures, Match, MatchEventKind};
use fantasy_engine::scoring::{points_for, ScoringRules};
use fantasy_engine::simulation::{simulate_round, MatchSimulator};
use rustc_hash::FxHashMap;

fn setup(seed: u64) -> (Catalog, Vec<Match>) {
    let mut rng = SimRng::new(seed);
    let catalog = Catalog::seeded(&mut rng);
    let fixtures = generate_fixtures(RoundId::FIRST, &catalog.club_ids(), &mut rng).unwrap();
    (catalog, fixtures)
}

#[test]
fn test_round_finishes_every_match() {
    let (catalog, fixtures) = setup(1);
    let outcome = simulate_round(catalog.athletes(), &fixtures, &mut SimRng::new(2));

    assert_eq!(outcome.fixtures.len(), 8);
    for m in &outcome.fixtures {
        assert!(m.finished);
        let score = m.score.unwrap();
        assert!(score.home <= 3 && score.away <= 2);

        // Every goal is credited to an athlete of the side that scored it.
        let mut home_goals = 0;
        let mut away_goals = 0;
        for event in m.events_of(MatchEventKind::Goal) {
            let scorer = catalog.athlete(event.athlete).unwrap();
            if scorer.club == m.home {
                home_goals += 1;
            } else {
                assert_eq!(scorer.club, m.away);
                away_goals += 1;
            }
        }
        assert_eq!((home_goals, away_goals), (score.home, score.away));
    }
}

#[test]
fn test_pool_totals_consistent() {
    let (catalog, fixtures) = setup(3);
    let outcome = simulate_round(catalog.athletes(), &fixtures, &mut SimRng::new(4));

    assert_eq!(outcome.athletes.len(), catalog.athletes().len());
    for athlete in outcome.athletes.iter() {
        let before = catalog.athlete(athlete.id).unwrap();
        assert_eq!(athlete.stats.total_points, points_for(athlete));
        assert_eq!(athlete.season_points, before.season_points + athlete.stats.total_points);

        if athlete.stats.minutes == 0 && athlete.stats == RoundStats::default() {
            assert_eq!(athlete.season_points, before.season_points);
        }
        assert!(athlete.stats.clean_sheets <= 1);
        if athlete.stats.clean_sheets == 1 {
            assert_eq!(athlete.stats.goals_conceded, 0);
        }
    }
}

#[test]
fn test_catalog_untouched_by_simulation() {
    let (catalog, fixtures) = setup(5);
    let snapshot = catalog.clone();
    let _ = simulate_round(catalog.athletes(), &fixtures, &mut SimRng::new(6));
    assert_eq!(catalog, snapshot);
}

#[test]
fn test_goalless_round_with_full_attendance() {
    let (catalog, fixtures) = setup(7);
    let config = SimulationConfig::default()
        .with_goal_ranges(0, 0)
        .with_play_probability(1.0)
        .with_full_match_probability(1.0)
        .with_yellow_card_probability(0.0);
    let sim = MatchSimulator::new(config, ScoringRules::default()).unwrap();
    let outcome = sim.simulate_round(catalog.athletes(), &fixtures, &mut SimRng::new(8));

    for m in &outcome.fixtures {
        assert_eq!(m.score.unwrap().to_string(), "0-0");
        assert!(m.events.is_empty());
    }
    for athlete in outcome.athletes.iter() {
        let expected = 2 + ScoringRules::default().clean_sheet_value(athlete.position);
        assert_eq!(athlete.stats.total_points, expected, "{}", athlete.web_name);
    }
}

#[test]
fn test_seeded_rounds_replay() {
    let (catalog, fixtures) = setup(9);
    let a = simulate_round(catalog.athletes(), &fixtures, &mut SimRng::new(10));
    let b = simulate_round(catalog.athletes(), &fixtures, &mut SimRng::new(10));
    assert_eq!(a, b);

    let c = simulate_round(catalog.athletes(), &fixtures, &mut SimRng::new(11));
    assert_ne!(a.fixtures, c.fixtures);
}

#[test]
fn test_resimulating_finished_round_is_noop() {
    let (catalog, fixtures) = setup(12);
    let first = simulate_round(catalog.athletes(), &fixtures, &mut SimRng::new(13));
    let again = simulate_round(&first.athletes, &first.fixtures, &mut SimRng::new(14));
    assert_eq!(again, first);
}

/// Run `rounds` rounds of fresh fixtures, returning the final pool and each
/// athlete's summed round totals.
fn run_rounds(
    catalog: &Catalog,
    simulator: &MatchSimulator,
    rounds: u32,
    seed: u64,
) -> (AthletePool, FxHashMap<AthleteId, i32>) {
    let mut rng = SimRng::new(seed);
    let mut pool = catalog.athletes().clone();
    let mut round_sums: FxHashMap<AthleteId, i32> = FxHashMap::default();

    for round in 1..=rounds {
        let fixtures = generate_fixtures(RoundId::new(round), &catalog.club_ids(), &mut rng).unwrap();
        let outcome = simulator.simulate_round(&pool, &fixtures, &mut rng);
        for athlete in outcome.athletes.iter() {
            *round_sums.entry(athlete.id).or_default() += athlete.stats.total_points;
        }
        pool = outcome.athletes;
    }
    (pool, round_sums)
}

#[test]
fn test_season_points_accumulate_over_rounds() {
    let catalog = Catalog::seeded(&mut SimRng::new(20));
    let simulator = MatchSimulator::new(
        SimulationConfig::default().with_play_probability(1.0),
        ScoringRules::default(),
    )
    .unwrap();
    let (pool, round_sums) = run_rounds(&catalog, &simulator, 6, 21);

    for athlete in pool.iter() {
        let start = catalog.athlete(athlete.id).unwrap().season_points;
        assert_eq!(athlete.season_points, start + round_sums[&athlete.id], "{}", athlete.web_name);
    }
}

#[test]
fn test_season_points_frozen_when_never_playing() {
    let catalog = Catalog::seeded(&mut SimRng::new(30));
    let simulator = MatchSimulator::new(
        SimulationConfig::default().with_play_probability(0.0),
        ScoringRules::default(),
    )
    .unwrap();
    let (pool, round_sums) = run_rounds(&catalog, &simulator, 6, 31);

    for athlete in pool.iter() {
        let start = catalog.athlete(athlete.id).unwrap().season_points;
        assert_eq!(athlete.season_points, start);
        assert_eq!(round_sums[&athlete.id], 0);
        assert_eq!(athlete.stats, RoundStats::default());
    }
}
