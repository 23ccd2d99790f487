//! The points table.
//!
//! Every contribution is a fixed per-unit weight applied additively. The total
//! is never clamped: negative rounds are valid and flow into season points.

use serde::{Deserialize, Serialize};

use crate::catalog::{Position, RoundStats};

/// Per-unit weights for every scoring contribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// 60 minutes or more.
    pub full_appearance: i32,
    /// Between 1 and 59 minutes.
    pub short_appearance: i32,
    pub goal_goalkeeper: i32,
    pub goal_defender: i32,
    pub goal_midfielder: i32,
    pub goal_forward: i32,
    pub assist: i32,
    pub clean_sheet_goalkeeper: i32,
    pub clean_sheet_defender: i32,
    pub clean_sheet_midfielder: i32,
    /// Awarded once per `saves_per_point` saves.
    pub saves_bonus: i32,
    pub saves_per_point: u32,
    pub penalty_save: i32,
    /// Not tracked by `RoundStats`; kept for a richer simulator.
    pub penalty_miss: i32,
    /// Applied once per `conceded_per_penalty` goals conceded.
    pub goals_conceded: i32,
    pub conceded_per_penalty: u32,
    pub yellow_card: i32,
    pub red_card: i32,
    pub own_goal: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            full_appearance: 2,
            short_appearance: 1,
            goal_goalkeeper: 6,
            goal_defender: 6,
            goal_midfielder: 5,
            goal_forward: 4,
            assist: 3,
            clean_sheet_goalkeeper: 4,
            clean_sheet_defender: 4,
            clean_sheet_midfielder: 1,
            saves_bonus: 1,
            saves_per_point: 3,
            penalty_save: 5,
            penalty_miss: -2,
            goals_conceded: -1,
            conceded_per_penalty: 2,
            yellow_card: -1,
            red_card: -3,
            own_goal: -2,
        }
    }
}

fn count(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl ScoringRules {
    /// Points for a goal scored from this position.
    #[must_use]
    pub fn goal_value(&self, position: Position) -> i32 {
        match position {
            Position::Goalkeeper => self.goal_goalkeeper,
            Position::Defender => self.goal_defender,
            Position::Midfielder => self.goal_midfielder,
            Position::Forward => self.goal_forward,
        }
    }

    /// Points for a clean sheet kept from this position.
    #[must_use]
    pub fn clean_sheet_value(&self, position: Position) -> i32 {
        match position {
            Position::Goalkeeper => self.clean_sheet_goalkeeper,
            Position::Defender => self.clean_sheet_defender,
            Position::Midfielder => self.clean_sheet_midfielder,
            Position::Forward => 0,
        }
    }

    /// Appearance points for the minutes played.
    #[must_use]
    pub fn appearance_value(&self, minutes: u32) -> i32 {
        match minutes {
            0 => 0,
            1..=59 => self.short_appearance,
            _ => self.full_appearance,
        }
    }

    /// Score one athlete's round.
    #[must_use]
    pub fn points(&self, position: Position, stats: &RoundStats) -> i32 {
        let mut points = self.appearance_value(stats.minutes);

        points += count(stats.goals) * self.goal_value(position);
        points += count(stats.assists) * self.assist;

        if stats.clean_sheets > 0 {
            points += self.clean_sheet_value(position);
        }

        if self.saves_per_point > 0 {
            points += count(stats.saves / self.saves_per_point) * self.saves_bonus;
        }
        points += count(stats.penalties_saved) * self.penalty_save;

        if self.conceded_per_penalty > 0 {
            points += count(stats.goals_conceded / self.conceded_per_penalty) * self.goals_conceded;
        }
        points += count(stats.yellow_cards) * self.yellow_card;
        points += count(stats.red_cards) * self.red_card;
        points += count(stats.own_goals) * self.own_goal;

        points + stats.bonus
    }
}
