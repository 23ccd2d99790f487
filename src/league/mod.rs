//! League registry and standings.
//!
//! ## Key Types
//!
//! - `League`: name, join code and members in join order
//! - `LeagueMember`: a manager's points and last computed rank
//! - `LeagueRegistry`: owns every league, seeded with the global one

pub mod member;
pub mod registry;

pub use member::{League, LeagueMember};
pub use registry::{LeagueRegistry, CODE_LEN, GLOBAL_LEAGUE_CODE, GLOBAL_LEAGUE_ID};
