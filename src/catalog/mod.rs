//! Catalog: clubs, athletes and the athlete pool.
//!
//! ## Key Types
//!
//! - `Club`: immutable club reference data
//! - `Athlete`: baseline attributes plus current-round statistics
//! - `AthletePool`: persistent id-ordered athlete collection
//! - `Catalog`: clubs plus the baseline roster, seeded once per season

pub mod athlete;
pub mod club;
pub mod pool;
pub mod registry;
pub mod seed;

pub use athlete::{Athlete, Position, RoundStats};
pub use club::Club;
pub use pool::{AthleteFilter, AthletePool};
pub use registry::Catalog;
pub use seed::{standard_clubs, ROSTER_QUOTA};
