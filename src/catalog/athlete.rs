//! Athletes, their positions, and per-round statistics.
//!
//! An `Athlete` carries baseline attributes fixed at seeding (name, position,
//! club, price) plus two pieces of mutable state:
//! - `stats`: the current round's statistics, reset and recomputed each round
//! - `season_points`: cumulative points, incremented by each round's total

use serde::{Deserialize, Serialize};

use crate::core::{AthleteId, ClubId, Price};

/// Playing position. An athlete keeps one position for life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions in display order (goalkeeper first).
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Sort key: goalkeeper, defender, midfielder, forward.
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }

    /// Short display code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }

    /// Whether a clean sheet is credited to this position.
    #[must_use]
    pub const fn earns_clean_sheet(self) -> bool {
        !matches!(self, Position::Forward)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Statistics for one athlete in one round.
///
/// The simulator fills minutes, goals, assists, goals conceded, clean sheets
/// and yellow cards. The remaining counters are scored but never generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub goals_conceded: u32,
    pub own_goals: u32,
    pub penalties_saved: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub saves: u32,
    pub bonus: i32,
    /// Points computed for this round. Zero until the round is scored.
    pub total_points: i32,
}

/// An eligible athlete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: AthleteId,
    pub first_name: String,
    pub last_name: String,
    /// Name shown on shirts and in listings.
    pub web_name: String,
    pub position: Position,
    pub club: ClubId,
    pub price: Price,
    /// Share of managers who picked this athlete, 0-100.
    pub selected_by_percent: u8,
    pub form: f64,
    pub injured: bool,
    /// Current round statistics.
    pub stats: RoundStats,
    /// Cumulative season points.
    pub season_points: i32,
}

impl Athlete {
    /// Create an athlete with zeroed statistics and neutral metrics.
    #[must_use]
    pub fn new(
        id: AthleteId,
        web_name: impl Into<String>,
        position: Position,
        club: ClubId,
        price: Price,
    ) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            web_name: web_name.into(),
            position,
            club,
            price,
            selected_by_percent: 0,
            form: 1.0,
            injured: false,
            stats: RoundStats::default(),
            season_points: 0,
        }
    }

    /// Set the starting season points (builder pattern).
    #[must_use]
    pub fn with_season_points(mut self, points: i32) -> Self {
        self.season_points = points;
        self
    }

    /// Set the round statistics (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, stats: RoundStats) -> Self {
        self.stats = stats;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_order_and_codes() {
        let codes: Vec<_> = Position::ALL.iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec!["GK", "DEF", "MID", "FWD"]);

        let orders: Vec<_> = Position::ALL.iter().map(|p| p.order()).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_clean_sheet_eligibility() {
        assert!(Position::Goalkeeper.earns_clean_sheet());
        assert!(Position::Defender.earns_clean_sheet());
        assert!(Position::Midfielder.earns_clean_sheet());
        assert!(!Position::Forward.earns_clean_sheet());
    }

    #[test]
    fn test_new_athlete_is_zeroed() {
        let a = Athlete::new(AthleteId(1), "Wu Lei", Position::Forward, ClubId(1), Price(120));
        assert_eq!(a.stats, RoundStats::default());
        assert_eq!(a.season_points, 0);
    }

    #[test]
    fn test_serialization() {
        let a = Athlete::new(AthleteId(7), "Oscar", Position::Midfielder, ClubId(1), Price(105))
            .with_season_points(12);
        let json = serde_json::to_string(&a).unwrap();
        let deserialized: Athlete = serde_json::from_str(&json).unwrap();
        assert_eq!(a, deserialized);
    }
}
