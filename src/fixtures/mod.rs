//! Fixtures: matches, match events, and round pairing.

pub mod fixture;
pub mod generator;

pub use fixture::{Match, MatchEvent, MatchEventKind, MatchEvents, Scoreline};
pub use generator::generate_fixtures;
