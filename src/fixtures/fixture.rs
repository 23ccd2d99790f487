//! Matches and match events.
//!
//! A `Match` is created unplayed by the fixture generator and finished exactly
//! once by the simulator. Events are append-only within a match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AthleteId, ClubId, MatchId};

/// What happened in a match event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchEventKind {
    Goal,
    Assist,
    RedCard,
    OwnGoal,
}

/// A discrete event attributed to an athlete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub athlete: AthleteId,
    pub kind: MatchEventKind,
    /// Match minute, 1-90.
    pub minute: u8,
}

impl MatchEvent {
    #[must_use]
    pub fn new(athlete: AthleteId, kind: MatchEventKind, minute: u8) -> Self {
        Self {
            athlete,
            kind,
            minute,
        }
    }
}

/// Final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreline {
    pub home: u8,
    pub away: u8,
}

impl std::fmt::Display for Scoreline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Events of one match. Most matches carry only a handful.
pub type MatchEvents = SmallVec<[MatchEvent; 8]>;

/// One pairing of clubs within a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home: ClubId,
    pub away: ClubId,
    /// `None` until simulated.
    pub score: Option<Scoreline>,
    pub events: MatchEvents,
    pub finished: bool,
}

impl Match {
    /// Create an unplayed match.
    #[must_use]
    pub fn scheduled(id: MatchId, home: ClubId, away: ClubId) -> Self {
        Self {
            id,
            home,
            away,
            score: None,
            events: SmallVec::new(),
            finished: false,
        }
    }

    /// Return the finished version of this match.
    #[must_use]
    pub fn finish(self, score: Scoreline, events: MatchEvents) -> Self {
        Self {
            score: Some(score),
            events,
            finished: true,
            ..self
        }
    }

    /// Whether the club plays in this match.
    #[must_use]
    pub fn involves(&self, club: ClubId) -> bool {
        self.home == club || self.away == club
    }

    /// The other club in this match, if `club` plays in it.
    #[must_use]
    pub fn opponent(&self, club: ClubId) -> Option<ClubId> {
        if club == self.home {
            Some(self.away)
        } else if club == self.away {
            Some(self.home)
        } else {
            None
        }
    }

    /// Goals conceded by `club`, once the match is finished.
    #[must_use]
    pub fn conceded_by(&self, club: ClubId) -> Option<u8> {
        let score = self.score?;
        if club == self.home {
            Some(score.away)
        } else if club == self.away {
            Some(score.home)
        } else {
            None
        }
    }

    /// Events of one kind, in recorded order.
    pub fn events_of(&self, kind: MatchEventKind) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundId;

    fn fixture() -> Match {
        Match::scheduled(MatchId::new(RoundId::FIRST, 0), ClubId(1), ClubId(2))
    }

    #[test]
    fn test_scheduled_is_unplayed() {
        let m = fixture();
        assert!(!m.finished);
        assert!(m.score.is_none());
        assert!(m.events.is_empty());
        assert_eq!(m.conceded_by(ClubId(1)), None);
    }

    #[test]
    fn test_finish() {
        let mut events = MatchEvents::new();
        events.push(MatchEvent::new(AthleteId(3), MatchEventKind::Goal, 12));
        events.push(MatchEvent::new(AthleteId(4), MatchEventKind::Assist, 40));

        let m = fixture().finish(Scoreline { home: 1, away: 0 }, events);
        assert!(m.finished);
        assert_eq!(m.conceded_by(ClubId(1)), Some(0));
        assert_eq!(m.conceded_by(ClubId(2)), Some(1));
        assert_eq!(m.conceded_by(ClubId(9)), None);
        assert_eq!(m.events_of(MatchEventKind::Goal).count(), 1);
        assert_eq!(m.score.unwrap().to_string(), "1-0");
    }

    #[test]
    fn test_opponent() {
        let m = fixture();
        assert_eq!(m.opponent(ClubId(1)), Some(ClubId(2)));
        assert_eq!(m.opponent(ClubId(2)), Some(ClubId(1)));
        assert_eq!(m.opponent(ClubId(3)), None);
        assert!(m.involves(ClubId(2)));
    }

    #[test]
    fn test_serialization() {
        let m = fixture();
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
