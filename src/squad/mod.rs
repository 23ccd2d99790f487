//! Squad builder: formations, the 15-slot skeleton, and user teams.
//!
//! ## Key Types
//!
//! - `Formation`: starting outfield shape, 4-4-2 by default
//! - `SquadSlot`: one roster position, optionally bound to an athlete
//! - `UserTeam`: budget, squad, transfers and chips for one manager

pub mod builder;
pub mod formation;
pub mod slot;
pub mod team;

pub use builder::{
    build_empty_squad, build_squad, contains_athlete, filled_slots, is_squad_complete, quota,
    team_value, SQUAD_QUOTA, SQUAD_SIZE,
};
pub use formation::Formation;
pub use slot::SquadSlot;
pub use team::{Chip, UserTeam};
