//! Core engine types: identifiers, prices, RNG, configuration, errors.
//!
//! This module contains the building blocks every component shares.

pub mod ids;
pub mod money;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{AthleteId, ClubId, LeagueId, MatchId, RoundId, SlotId, UserId};
pub use money::{Price, PRICE_SCALE};
pub use rng::{SimRng, SimRngState};
pub use config::{EngineConfig, SimulationConfig};
pub use error::{EngineError, Result};
