//! Engine configuration.
//!
//! A season is built from one `EngineConfig`:
//! - `seed`: `Some` pins every random draw, `None` draws fresh entropy
//! - `budget`: squad budget ceiling for new user teams
//! - `simulation`: match-simulator probabilities and goal ranges
//! - `scoring`: the points table
//!
//! ```
//! use fantasy_engine::core::EngineConfig;
//!
//! let config = EngineConfig::default().with_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::money::Price;
use crate::scoring::ScoringRules;

/// Match simulator parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Home goals are drawn uniformly from `0..=max_home_goals` (default: 3).
    pub max_home_goals: u8,

    /// Away goals are drawn uniformly from `0..=max_away_goals` (default: 2).
    /// The smaller range is the home-advantage bias.
    pub max_away_goals: u8,

    /// Chance that a goal also produces an assist (default: 0.6).
    pub assist_probability: f64,

    /// Chance that an athlete plays in a round (default: 0.7).
    pub play_probability: f64,

    /// Chance that a playing athlete completes 90 minutes (default: 0.9).
    pub full_match_probability: f64,

    /// Chance that a playing athlete is booked (default: 0.1).
    pub yellow_card_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_home_goals: 3,
            max_away_goals: 2,
            assist_probability: 0.6,
            play_probability: 0.7,
            full_match_probability: 0.9,
            yellow_card_probability: 0.1,
        }
    }
}

impl SimulationConfig {
    /// Set the chance that an athlete plays.
    pub fn with_play_probability(mut self, p: f64) -> Self {
        self.play_probability = p;
        self
    }

    /// Set the assist chance per goal.
    pub fn with_assist_probability(mut self, p: f64) -> Self {
        self.assist_probability = p;
        self
    }

    /// Set the chance of a full 90 minutes.
    pub fn with_full_match_probability(mut self, p: f64) -> Self {
        self.full_match_probability = p;
        self
    }

    /// Set the booking chance.
    pub fn with_yellow_card_probability(mut self, p: f64) -> Self {
        self.yellow_card_probability = p;
        self
    }

    /// Set the upper goal bounds for home and away sides.
    pub fn with_goal_ranges(mut self, max_home: u8, max_away: u8) -> Self {
        self.max_home_goals = max_home;
        self.max_away_goals = max_away;
        self
    }

    /// Check every probability is within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("assist_probability", self.assist_probability),
            ("play_probability", self.play_probability),
            ("full_match_probability", self.full_match_probability),
            ("yellow_card_probability", self.yellow_card_probability),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RNG seed. `None` uses fresh entropy (non-reproducible seasons).
    pub seed: Option<u64>,

    /// Budget ceiling for new user teams (default: £100.0m).
    pub budget: Price,

    /// Match simulator parameters.
    pub simulation: SimulationConfig,

    /// Points table.
    pub scoring: ScoringRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            budget: Price::from_millions(100.0),
            simulation: SimulationConfig::default(),
            scoring: ScoringRules::default(),
        }
    }
}

impl EngineConfig {
    /// Pin the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the budget ceiling.
    pub fn with_budget(mut self, budget: Price) -> Self {
        self.budget = budget;
        self
    }

    /// Replace the simulation parameters.
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    /// Replace the points table.
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        if self.budget.is_negative() {
            return Err(EngineError::InvalidConfig(format!(
                "budget must not be negative, got {}",
                self.budget
            )));
        }
        self.simulation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.budget, Price(1000));
        assert_eq!(config.simulation.max_home_goals, 3);
        assert_eq!(config.simulation.max_away_goals, 2);
        assert_eq!(config.simulation.play_probability, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_budget(Price::from_millions(80.0))
            .with_simulation(SimulationConfig::default().with_play_probability(1.0));

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.budget, Price(800));
        assert_eq!(config.simulation.play_probability, 1.0);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = EngineConfig::default()
            .with_simulation(SimulationConfig::default().with_assist_probability(1.2));
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_budget() {
        let config = EngineConfig::default().with_budget(Price(-1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
