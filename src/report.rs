//! Text output for the host: squad summaries, scout prompts, goal timelines.
//!
//! The scout report itself comes from an external text generator reached
//! through `ScoutWriter`. This module only builds the prompt and maps the
//! outcome to something the host can show.

use crate::catalog::Catalog;
use crate::fixtures::{Match, MatchEventKind};
use crate::squad::UserTeam;

/// One line per bound slot:
/// ` - <name> (<POS>, <club>, £<price>m) [CAPTAIN] [BENCH]`.
///
/// Slots whose athlete is missing from the catalog are skipped.
#[must_use]
pub fn squad_summary(team: &UserTeam, catalog: &Catalog) -> String {
    team.squad()
        .iter()
        .filter_map(|slot| {
            let athlete = catalog.athlete(slot.athlete?)?;
            let club = catalog.club(athlete.club).map_or("Unknown", |c| c.name.as_str());

            let mut line = format!(
                " - {} ({}, {}, {})",
                athlete.web_name, athlete.position, club, athlete.price
            );
            if slot.captain {
                line.push_str(" [CAPTAIN]");
            }
            if slot.is_bench() {
                line.push_str(" [BENCH]");
            }
            Some(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking a scout to review the squad. `None` for an empty squad.
#[must_use]
pub fn scout_prompt(team: &UserTeam, catalog: &Catalog) -> Option<String> {
    let summary = squad_summary(team, catalog);
    if summary.is_empty() {
        return None;
    }

    Some(format!(
        "You are an expert fantasy football manager for the Chinese Super League.\n\
         Analyze the following fantasy squad for the upcoming gameweek.\n\
         \n\
         Squad:\n\
         {summary}\n\
         \n\
         Rules:\n\
         - Budget is tight.\n\
         - Max 3 players from the same club.\n\
         - Captain gets double points.\n\
         \n\
         Please provide:\n\
         1. A brief rating of the squad strength (1-10).\n\
         2. The key weakness.\n\
         3. One suggested transfer target to improve the team.\n\
         4. Advice on captain choice.\n\
         \n\
         Keep it concise and formatted in Markdown.\n"
    ))
}

/// External text generator.
pub trait ScoutWriter {
    /// Produce a report for the prompt, or a description of why it failed.
    fn write(&self, prompt: &str) -> Result<String, String>;
}

/// What the host shows in the scout panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoutReport {
    /// Nothing to analyse yet.
    EmptySquad,
    Written(String),
    /// The writer failed or returned nothing.
    Unavailable,
}

impl std::fmt::Display for ScoutReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoutReport::EmptySquad => f.write_str("Your squad is empty. Please add players first."),
            ScoutReport::Written(text) => f.write_str(text),
            ScoutReport::Unavailable => f.write_str("Scout report unavailable. Please try again later."),
        }
    }
}

/// Build the prompt and ask the writer for a report.
pub fn request_scout_report(team: &UserTeam, catalog: &Catalog, writer: &dyn ScoutWriter) -> ScoutReport {
    let Some(prompt) = scout_prompt(team, catalog) else {
        return ScoutReport::EmptySquad;
    };

    match writer.write(&prompt) {
        Ok(text) if !text.trim().is_empty() => ScoutReport::Written(text),
        Ok(_) => ScoutReport::Unavailable,
        Err(err) => {
            tracing::warn!(team = %team.id, error = %err, "scout writer failed");
            ScoutReport::Unavailable
        }
    }
}

/// A goal as shown on a match card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalLine {
    pub minute: u8,
    pub scorer: String,
    pub assist: Option<String>,
}

/// Goals of a finished match, split by side, in minute order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchGoals {
    pub home: Vec<GoalLine>,
    pub away: Vec<GoalLine>,
}

/// Build the goal timeline of a match.
///
/// An assist is the event directly following its goal. Goals by athletes
/// unknown to the catalog or not playing for either club are dropped.
#[must_use]
pub fn match_goals(fixture: &Match, catalog: &Catalog) -> MatchGoals {
    let name = |id| catalog.athlete(id).map(|a| a.web_name.clone());
    let mut goals = MatchGoals::default();

    let events = &fixture.events;
    for (i, event) in events.iter().enumerate() {
        if event.kind != MatchEventKind::Goal {
            continue;
        }
        let Some(scorer) = catalog.athlete(event.athlete).filter(|a| fixture.involves(a.club)) else {
            continue;
        };
        let assist = events
            .get(i + 1)
            .filter(|next| next.kind == MatchEventKind::Assist)
            .and_then(|next| name(next.athlete));

        let line = GoalLine {
            minute: event.minute,
            scorer: scorer.web_name.clone(),
            assist,
        };
        if scorer.club == fixture.home {
            goals.home.push(line);
        } else {
            goals.away.push(line);
        }
    }

    goals.home.sort_by_key(|g| g.minute);
    goals.away.sort_by_key(|g| g.minute);
    goals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Athlete, Club, Position};
    use crate::core::{AthleteId, ClubId, MatchId, Price, RoundId, UserId};
    use crate::fixtures::{MatchEvent, MatchEvents, Scoreline};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register_club(Club::new(ClubId(1), "Shanghai Port", "SHP", "#D32F2F", "#B71C1C"));
        catalog.register_club(Club::new(ClubId(2), "Beijing Guoan", "BJG", "#2E7D32", "#1B5E20"));
        catalog.register_athlete(Athlete::new(AthleteId(1), "Wu Lei", Position::Forward, ClubId(1), Price(120)));
        catalog.register_athlete(Athlete::new(AthleteId(2), "Yan Junling", Position::Goalkeeper, ClubId(1), Price(55)));
        catalog.register_athlete(Athlete::new(AthleteId(3), "Zhang Yuning", Position::Forward, ClubId(2), Price(95)));
        catalog
    }

    struct Echo;

    impl ScoutWriter for Echo {
        fn write(&self, prompt: &str) -> Result<String, String> {
            Ok(format!("{} chars", prompt.len()))
        }
    }

    struct Down;

    impl ScoutWriter for Down {
        fn write(&self, _prompt: &str) -> Result<String, String> {
            Err("timeout".into())
        }
    }

    fn team(catalog: &Catalog) -> UserTeam {
        let mut team = UserTeam::new(UserId::new("u1"), "Sam FC", Price(1000));
        let gk_bench = team
            .squad()
            .iter()
            .find(|s| s.position == Position::Goalkeeper && s.is_bench())
            .map(|s| s.id)
            .unwrap();
        let fwd = team
            .squad()
            .iter()
            .find(|s| s.position == Position::Forward && s.starter)
            .map(|s| s.id)
            .unwrap();
        team.assign(fwd, AthleteId(1), catalog.athletes()).unwrap();
        team.assign(gk_bench, AthleteId(2), catalog.athletes()).unwrap();
        team
    }

    #[test]
    fn test_squad_summary_lines() {
        let catalog = catalog();
        let summary = squad_summary(&team(&catalog), &catalog);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            [
                " - Wu Lei (FWD, Shanghai Port, £12.0m) [CAPTAIN]",
                " - Yan Junling (GK, Shanghai Port, £5.5m) [BENCH]",
            ]
        );
    }

    #[test]
    fn test_empty_squad_has_no_prompt() {
        let catalog = catalog();
        let team = UserTeam::new(UserId::new("u1"), "Sam FC", Price(1000));
        assert_eq!(scout_prompt(&team, &catalog), None);
        assert_eq!(request_scout_report(&team, &catalog, &Echo), ScoutReport::EmptySquad);
        assert!(ScoutReport::EmptySquad.to_string().contains("empty"));
    }

    #[test]
    fn test_prompt_contains_squad() {
        let catalog = catalog();
        let prompt = scout_prompt(&team(&catalog), &catalog).unwrap();
        assert!(prompt.contains("Squad:\n - Wu Lei"));
        assert!(prompt.contains("Captain gets double points."));
    }

    #[test]
    fn test_writer_outcomes() {
        let catalog = catalog();
        let team = team(&catalog);
        assert!(matches!(request_scout_report(&team, &catalog, &Echo), ScoutReport::Written(_)));
        assert_eq!(request_scout_report(&team, &catalog, &Down), ScoutReport::Unavailable);
    }

    #[test]
    fn test_match_goals_split_and_ordered() {
        let catalog = catalog();
        let mut events = MatchEvents::new();
        events.push(MatchEvent::new(AthleteId(1), MatchEventKind::Goal, 70));
        events.push(MatchEvent::new(AthleteId(2), MatchEventKind::Assist, 12));
        events.push(MatchEvent::new(AthleteId(1), MatchEventKind::Goal, 5));
        events.push(MatchEvent::new(AthleteId(3), MatchEventKind::Goal, 33));

        let fixture = Match::scheduled(MatchId::new(RoundId::FIRST, 0), ClubId(1), ClubId(2))
            .finish(Scoreline { home: 2, away: 1 }, events);
        let goals = match_goals(&fixture, &catalog);

        assert_eq!(
            goals.home,
            [
                GoalLine { minute: 5, scorer: "Wu Lei".into(), assist: None },
                GoalLine { minute: 70, scorer: "Wu Lei".into(), assist: Some("Yan Junling".into()) },
            ]
        );
        assert_eq!(goals.away.len(), 1);
        assert_eq!(goals.away[0].scorer, "Zhang Yuning");
    }

    #[test]
    fn test_match_goals_ignore_other_clubs() {
        let mut catalog = catalog();
        catalog.register_club(Club::new(ClubId(3), "Shandong Taishan", "SDT", "#F57C00", "#E65100"));
        catalog.register_athlete(Athlete::new(AthleteId(4), "Cryzan", Position::Forward, ClubId(3), Price(90)));

        let mut events = MatchEvents::new();
        events.push(MatchEvent::new(AthleteId(4), MatchEventKind::Goal, 20));
        events.push(MatchEvent::new(AthleteId(99), MatchEventKind::Goal, 40));
        events.push(MatchEvent::new(AthleteId(3), MatchEventKind::Goal, 60));

        let fixture = Match::scheduled(MatchId::new(RoundId::FIRST, 0), ClubId(1), ClubId(2))
            .finish(Scoreline { home: 0, away: 1 }, events);
        let goals = match_goals(&fixture, &catalog);

        assert!(goals.home.is_empty());
        assert_eq!(goals.away, [GoalLine { minute: 60, scorer: "Zhang Yuning".into(), assist: None }]);
    }
}
