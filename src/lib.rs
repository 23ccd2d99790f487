//! # fantasy-engine
//!
//! Simulation and scoring engine for a season-long fantasy football game.
//!
//! ## Design Principles
//!
//! 1. **Deterministic under a seed**: every random draw goes through `SimRng`.
//!    Pin `EngineConfig::seed` and a season replays exactly.
//!
//! 2. **Snapshot and replace**: simulation returns a new athlete pool and new
//!    fixtures instead of mutating its inputs. The host swaps its references.
//!
//! 3. **Explicit ownership**: catalog, leagues and RNG streams live in one
//!    `Season` handle. There is no global state and no implicit current user.
//!
//! ## Architecture
//!
//! Each round flows one way: fixture generator, then match simulator, then
//! scoring, producing an updated pool and finished fixtures that feed team
//! totals and league standings.
//!
//! - **Persistent Data Structures**: the pool is an `im::OrdMap`, so handing
//!   out a new pool per round shares structure with the old one.
//!
//! - **Fixed-point prices**: `Price` counts tenths of a million, so squad
//!   values add up exactly in any order.
//!
//! ## Modules
//!
//! - `core`: Ids, prices, RNG, configuration, errors
//! - `catalog`: Clubs, athletes, the athlete pool and season seeding
//! - `scoring`: Points table and per-round scoring
//! - `squad`: Formations, the 15-slot squad and user teams
//! - `fixtures`: Matches, events and round pairing
//! - `simulation`: Match simulator
//! - `league`: League registry and standings
//! - `report`: Squad summaries, scout prompts, goal timelines
//! - `season`: The season service tying it all together

pub mod core;
pub mod catalog;
pub mod scoring;
pub mod squad;
pub mod fixtures;
pub mod simulation;
pub mod league;
pub mod report;
pub mod season;

// Re-export commonly used types
pub use crate::core::{
    AthleteId, ClubId, LeagueId, MatchId, RoundId, SlotId, UserId,
    Price, SimRng, SimRngState,
    EngineConfig, SimulationConfig,
    EngineError, Result,
};

pub use crate::catalog::{Athlete, AthleteFilter, AthletePool, Catalog, Club, Position, RoundStats};

pub use crate::scoring::{points, points_for, ScoringRules};

pub use crate::squad::{
    build_empty_squad, is_squad_complete, team_value,
    Chip, Formation, SquadSlot, UserTeam,
};

pub use crate::fixtures::{generate_fixtures, Match, MatchEvent, MatchEventKind, Scoreline};

pub use crate::simulation::{simulate_round, MatchSimulator, RoundOutcome};

pub use crate::league::{League, LeagueMember, LeagueRegistry};

pub use crate::report::{ScoutReport, ScoutWriter};

pub use crate::season::Season;
